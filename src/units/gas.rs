use std::{
    fmt,
    num::ParseIntError,
    ops::{Add, Sub},
    str::FromStr,
};

use enum_iterator::{all, Sequence};
use serde::{de, de::Visitor, Deserialize, Serialize};
use thiserror::Error;

use super::{scale_f64_u64, GAS_PER_GGAS, GAS_PER_TGAS};

pub type Gas = u64;

/// Gas tiers, largest first. Iteration order is the order formatting scans the
/// tiers in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Sequence)]
pub enum GasUnit {
    TGas,
    GGas,
    Gas,
}

impl GasUnit {
    pub fn factor(&self) -> u64 {
        use GasUnit::*;
        match self {
            TGas => GAS_PER_TGAS,
            GGas => GAS_PER_GGAS,
            Gas => 1,
        }
    }

    pub fn suffix(&self) -> &'static str {
        use GasUnit::*;
        match self {
            TGas => "TGas",
            GGas => "GGas",
            Gas => "Gas",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGasUnitError {
    #[error("unrecognized gas unit {0:?}")]
    UnknownUnit(String),
}

impl FromStr for GasUnit {
    type Err = ParseGasUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use GasUnit::*;
        match s.to_lowercase().as_str() {
            "tgas" => Ok(TGas),
            "ggas" => Ok(GGas),
            "gas" => Ok(Gas),
            unknown_unit => Err(ParseGasUnitError::UnknownUnit(unknown_unit.to_string())),
        }
    }
}

impl fmt::Display for GasUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

// Can handle at most 1.84e19 gas, or ~18M TGas, far beyond any gas limit a chain
// accepts. Tier conversions go through f64 where max safe is 2^53, so amounts
// above ~9000 TGas lose accuracy there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GasNewtype(pub u64);

impl GasNewtype {
    pub fn new(gas: u64) -> Self {
        Self(gas)
    }

    pub fn from_ggas(ggas: f64) -> Self {
        Self(scale_f64_u64(ggas, GAS_PER_GGAS))
    }

    pub fn from_tgas(tgas: f64) -> Self {
        Self(scale_f64_u64(tgas, GAS_PER_TGAS))
    }

    pub fn to_ggas(self) -> f64 {
        self.0 as f64 / GAS_PER_GGAS as f64
    }

    pub fn to_tgas(self) -> f64 {
        self.0 as f64 / GAS_PER_TGAS as f64
    }
}

/// Renders the largest tier the amount reaches, the raw base amount otherwise.
impl fmt::Display for GasNewtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in all::<GasUnit>() {
            if unit.factor() > 1 && self.0 >= unit.factor() {
                return write!(f, "{} {}", self.0 as f64 / unit.factor() as f64, unit);
            }
        }
        write!(f, "{} {}", self.0, GasUnit::Gas)
    }
}

impl Add<GasNewtype> for GasNewtype {
    type Output = Self;

    fn add(self, GasNewtype(rhs): Self) -> Self::Output {
        let GasNewtype(lhs) = self;
        let result = lhs.checked_add(rhs).expect("caused overflow in gas addition");
        GasNewtype(result)
    }
}

impl Sub<GasNewtype> for GasNewtype {
    type Output = Self;

    fn sub(self, GasNewtype(rhs): GasNewtype) -> Self::Output {
        let GasNewtype(lhs) = self;
        let result = lhs
            .checked_sub(rhs)
            .expect("caused underflow in gas subtraction");
        GasNewtype(result)
    }
}

impl From<u64> for GasNewtype {
    fn from(amount: u64) -> Self {
        GasNewtype(amount)
    }
}

impl From<GasNewtype> for u64 {
    fn from(GasNewtype(amount): GasNewtype) -> Self {
        amount
    }
}

/// NOTE: this loses precision above 2^53.
impl From<GasNewtype> for f64 {
    fn from(GasNewtype(amount): GasNewtype) -> Self {
        amount as f64
    }
}

impl FromStr for GasNewtype {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(GasNewtype)
    }
}

struct GasAmountVisitor;

impl Visitor<'_> for GasAmountVisitor {
    type Value = GasNewtype;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "a number, or string of number, smaller u64::MAX representing an amount of gas in base units",
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<u64>().map(GasNewtype).map_err(|error| {
            de::Error::invalid_value(
                de::Unexpected::Str(&format!("unexpected value: {v}, error: {error}")),
                &"a number as string: \"300000000000000\", which fits within u64",
            )
        })
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v).map(GasNewtype).map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Signed(v), &"a non-negative gas amount")
        })
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(GasNewtype(v))
    }
}

impl<'de> Deserialize<'de> for GasNewtype {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(GasAmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_add_test() {
        assert_eq!(GasNewtype(1) + GasNewtype(1), GasNewtype(2));
    }

    #[test]
    fn gas_sub_test() {
        assert_eq!(GasNewtype(1) - GasNewtype(1), GasNewtype(0));
    }

    #[test]
    fn gas_from_tgas_test() {
        assert_eq!(GasNewtype::from_tgas(25.0), GasNewtype(25 * GAS_PER_TGAS));
        assert_eq!(GasNewtype::from_tgas(0.5), GasNewtype(500 * GAS_PER_GGAS));
    }

    #[test]
    fn gas_to_tgas_test() {
        assert_eq!(GasNewtype(25 * GAS_PER_TGAS).to_tgas(), 25.0);
        assert_eq!(GasNewtype(GAS_PER_GGAS).to_ggas(), 1.0);
    }

    #[test]
    fn tier_round_trip_test() {
        let gas = GasNewtype(7 * GAS_PER_TGAS);
        assert_eq!(GasNewtype::from_tgas(gas.to_tgas()), gas);

        let gas = GasNewtype(42 * GAS_PER_GGAS);
        assert_eq!(GasNewtype::from_ggas(gas.to_ggas()), gas);
    }

    #[test]
    fn truncates_fractional_base_units_test() {
        // 0.0000000000015 TGas is 1.5 gas, the half gas unit is dropped.
        assert_eq!(GasNewtype::from_tgas(0.0000000000015), GasNewtype(1));
    }

    #[test]
    fn gas_unit_from_str_test() {
        assert_eq!("TGas".parse::<GasUnit>().unwrap(), GasUnit::TGas);
        assert_eq!("tgas".parse::<GasUnit>().unwrap(), GasUnit::TGas);
        assert_eq!("GGAS".parse::<GasUnit>().unwrap(), GasUnit::GGas);
        assert_eq!("gas".parse::<GasUnit>().unwrap(), GasUnit::Gas);
        assert_eq!(
            "xgas".parse::<GasUnit>(),
            Err(ParseGasUnitError::UnknownUnit("xgas".to_string()))
        );
    }

    #[test]
    fn display_picks_largest_tier_test() {
        assert_eq!(GasNewtype(25 * GAS_PER_TGAS).to_string(), "25 TGas");
        assert_eq!(GasNewtype(2_500_000_000_000).to_string(), "2.5 TGas");
        assert_eq!(GasNewtype(30 * GAS_PER_GGAS).to_string(), "30 GGas");
        assert_eq!(GasNewtype(1000).to_string(), "1000 Gas");
        assert_eq!(GasNewtype(0).to_string(), "0 Gas");
    }

    #[test]
    fn serialize_gas_test() {
        let actual = serde_json::to_string(&GasNewtype(300_000_000_000_000)).unwrap();
        assert_eq!(actual, "300000000000000");
    }

    #[test]
    fn deserialize_gas_test() {
        let from_number = serde_json::from_str::<GasNewtype>("300000000000000").unwrap();
        assert_eq!(from_number, GasNewtype(300_000_000_000_000));

        let from_string = serde_json::from_str::<GasNewtype>("\"300000000000000\"").unwrap();
        assert_eq!(from_string, GasNewtype(300_000_000_000_000));
    }
}
