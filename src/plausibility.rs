//! Advisory checks for raw base-unit amounts that look like the caller forgot
//! to scale. Never fails, never alters the value.

use std::fmt;

use tracing::warn;

use crate::parse::QuantityKind;

/// Raw gas below this is closer to a TGas count than to any real gas limit.
pub const GAS_PLAUSIBILITY_FLOOR: u64 = 300;

/// 10^20 yoctoNEAR, i.e. 0.0001 NEAR.
pub const YOCTO_PLAUSIBILITY_FLOOR: u128 = 100_000_000_000_000_000_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlausibilityWarning {
    pub kind: QuantityKind,
    pub amount: String,
    pub hint: &'static str,
}

impl fmt::Display for PlausibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "suspiciously small {} amount {}: {}",
            self.kind, self.amount, self.hint
        )
    }
}

pub fn check_plausible_gas(base: u64) -> Option<PlausibilityWarning> {
    if base >= GAS_PLAUSIBILITY_FLOOR {
        return None;
    }
    let warning = PlausibilityWarning {
        kind: QuantityKind::Gas,
        amount: base.to_string(),
        hint: "raw amounts are base gas units, did you mean TGas?",
    };
    warn!(%warning, "implausible gas amount");
    Some(warning)
}

pub fn check_plausible_token(base: u128) -> Option<PlausibilityWarning> {
    if base >= YOCTO_PLAUSIBILITY_FLOOR {
        return None;
    }
    let warning = PlausibilityWarning {
        kind: QuantityKind::Token,
        amount: base.to_string(),
        hint: "raw amounts are yoctoNEAR, did you mean mNEAR or NEAR?",
    };
    warn!(%warning, "implausible token amount");
    Some(warning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_gas_warns_test() {
        assert!(check_plausible_gas(10).is_some());
    }

    #[test]
    fn realistic_gas_does_not_warn_test() {
        assert!(check_plausible_gas(1000).is_none());
        assert!(check_plausible_gas(GAS_PLAUSIBILITY_FLOOR).is_none());
    }

    #[test]
    fn small_token_warns_test() {
        assert!(check_plausible_token(1000).is_some());
    }

    #[test]
    fn realistic_token_does_not_warn_test() {
        assert!(check_plausible_token(10_u128.pow(24)).is_none());
        assert!(check_plausible_token(YOCTO_PLAUSIBILITY_FLOOR).is_none());
    }

    #[test]
    fn warning_names_kind_test() {
        let warning = check_plausible_gas(0).unwrap();
        assert_eq!(warning.kind, QuantityKind::Gas);
        assert!(warning.to_string().contains("gas"));

        let warning = check_plausible_token(0).unwrap();
        assert_eq!(warning.kind, QuantityKind::Token);
        assert!(warning.to_string().contains("token"));
    }
}
