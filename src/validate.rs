use serde::Serialize;
use thiserror::Error;

use crate::{
    parse::{parse_gas, parse_token, GasInput, ParseQuantityError, TokenInput},
    units::{GasNewtype, YoctoNewtype},
};

/// A call whose gas limit and attached amount both parsed. Only the validator
/// produces this, so holding one means both quantities are canonical. Both
/// fields are parsed independently and every failure is carried in the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedCall {
    pub limit: GasNewtype,
    pub attached: YoctoNewtype,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateCallError {
    #[error("invalid gas limit: {0}")]
    Limit(ParseQuantityError),
    #[error("invalid attached amount: {0}")]
    Attached(ParseQuantityError),
    #[error("invalid gas limit ({limit}) and attached amount ({attached})")]
    Both {
        limit: ParseQuantityError,
        attached: ParseQuantityError,
    },
}

pub fn validate_call(
    limit: impl Into<GasInput>,
    attached: impl Into<TokenInput>,
) -> Result<ValidatedCall, ValidateCallError> {
    let limit = parse_gas(limit);
    let attached = parse_token(attached);
    match (limit, attached) {
        (Ok(limit), Ok(attached)) => Ok(ValidatedCall { limit, attached }),
        (Err(limit), Err(attached)) => Err(ValidateCallError::Both { limit, attached }),
        (Err(limit), Ok(_)) => Err(ValidateCallError::Limit(limit)),
        (Ok(_), Err(attached)) => Err(ValidateCallError::Attached(attached)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{GAS_PER_TGAS, YOCTO_PER_NEAR};

    #[test]
    fn validate_call_test() {
        let call = validate_call("25.5 TGas", "0.01 NEAR").unwrap();
        assert_eq!(call.limit, GasNewtype(25_500_000_000_000));
        assert_eq!(call.attached, YoctoNewtype::from_near(0.01));
    }

    #[test]
    fn validate_call_mixed_inputs_test() {
        let call = validate_call(300_000_000_000_000_u64, "1 NEAR").unwrap();
        assert_eq!(call.limit, GasNewtype(300_000_000_000_000));
        assert_eq!(call.attached, YoctoNewtype(YOCTO_PER_NEAR));
    }

    #[test]
    fn validate_call_bad_limit_test() {
        let error = validate_call("nonsense", "1 NEAR").unwrap_err();
        assert!(matches!(error, ValidateCallError::Limit(_)));
    }

    #[test]
    fn validate_call_bad_attached_test() {
        let error = validate_call("25 TGas", "nonsense").unwrap_err();
        assert!(matches!(error, ValidateCallError::Attached(_)));
    }

    #[test]
    fn validate_call_both_bad_test() {
        let error = validate_call("nonsense", "nonsense").unwrap_err();
        assert!(matches!(error, ValidateCallError::Both { .. }));
        let message = error.to_string();
        assert!(message.contains("gas limit"));
        assert!(message.contains("attached amount"));
    }

    #[test]
    fn serialize_validated_call_test() {
        let call = validate_call("25 TGas", "1 NEAR").unwrap();
        let actual = serde_json::to_string(&call).unwrap();
        assert_eq!(
            actual,
            r#"{"limit":25000000000000,"attached":"1000000000000000000000000"}"#
        );
        assert_eq!(call.limit, GasNewtype(25 * GAS_PER_TGAS));
    }
}
