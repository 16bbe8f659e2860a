use std::{
    fmt,
    num::ParseIntError,
    ops::{Add, Sub},
    str::FromStr,
};

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{scale_f64_u128, YOCTO_PER_MICRO, YOCTO_PER_MILLI, YOCTO_PER_NEAR};

pub type Yocto = u128;

/// Token tiers, largest first. Iteration order is the order formatting scans the
/// tiers in. The micro and milli tiers each accept a Greek-letter and an ASCII
/// spelling, both resolving to the same scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Sequence)]
pub enum TokenUnit {
    Near,
    MilliNear,
    MicroNear,
    Yocto,
}

impl TokenUnit {
    pub fn factor(&self) -> u128 {
        use TokenUnit::*;
        match self {
            Near => YOCTO_PER_NEAR,
            MilliNear => YOCTO_PER_MILLI,
            MicroNear => YOCTO_PER_MICRO,
            Yocto => 1,
        }
    }

    pub fn suffix(&self) -> &'static str {
        use TokenUnit::*;
        match self {
            Near => "NEAR",
            MilliNear => "mNEAR",
            MicroNear => "μNEAR",
            Yocto => "yoctoNEAR",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTokenUnitError {
    #[error("unrecognized token unit {0:?}")]
    UnknownUnit(String),
}

impl FromStr for TokenUnit {
    type Err = ParseTokenUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use TokenUnit::*;
        match s.to_lowercase().as_str() {
            "near" => Ok(Near),
            "mnear" | "millinear" => Ok(MilliNear),
            "μnear" | "micronear" => Ok(MicroNear),
            "yocto" | "yoctonear" => Ok(Yocto),
            unknown_unit => Err(ParseTokenUnitError::UnknownUnit(unknown_unit.to_string())),
        }
    }
}

impl fmt::Display for TokenUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

// Tracks token amounts in yoctoNEAR, the smallest denomination at 10^-24 of a
// whole token. One whole token already exceeds JSON-safe numbers, so amounts
// serialize to string. Tier conversions go through f64 where max safe is 2^53.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct YoctoNewtype(pub u128);

impl YoctoNewtype {
    pub fn new(yocto: u128) -> Self {
        Self(yocto)
    }

    pub fn from_near(near: f64) -> Self {
        Self(scale_f64_u128(near, YOCTO_PER_NEAR))
    }

    pub fn from_milli(milli: f64) -> Self {
        Self(scale_f64_u128(milli, YOCTO_PER_MILLI))
    }

    pub fn from_micro(micro: f64) -> Self {
        Self(scale_f64_u128(micro, YOCTO_PER_MICRO))
    }

    pub fn to_near(self) -> f64 {
        self.0 as f64 / YOCTO_PER_NEAR as f64
    }

    pub fn to_milli(self) -> f64 {
        self.0 as f64 / YOCTO_PER_MILLI as f64
    }

    pub fn to_micro(self) -> f64 {
        self.0 as f64 / YOCTO_PER_MICRO as f64
    }
}

/// Renders the largest tier the amount reaches, the raw base amount otherwise.
impl fmt::Display for YoctoNewtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in all::<TokenUnit>() {
            if unit.factor() > 1 && self.0 >= unit.factor() {
                return write!(f, "{} {}", self.0 as f64 / unit.factor() as f64, unit);
            }
        }
        write!(f, "{} {}", self.0, TokenUnit::Yocto)
    }
}

impl Add<YoctoNewtype> for YoctoNewtype {
    type Output = Self;

    fn add(self, YoctoNewtype(rhs): Self) -> Self::Output {
        let YoctoNewtype(lhs) = self;
        let result = lhs
            .checked_add(rhs)
            .expect("caused overflow in yocto addition");
        YoctoNewtype(result)
    }
}

impl Sub<YoctoNewtype> for YoctoNewtype {
    type Output = Self;

    fn sub(self, YoctoNewtype(rhs): YoctoNewtype) -> Self::Output {
        let YoctoNewtype(lhs) = self;
        let result = lhs
            .checked_sub(rhs)
            .expect("caused underflow in yocto subtraction");
        YoctoNewtype(result)
    }
}

impl From<u128> for YoctoNewtype {
    fn from(amount: u128) -> Self {
        YoctoNewtype(amount)
    }
}

impl From<YoctoNewtype> for u128 {
    fn from(YoctoNewtype(amount): YoctoNewtype) -> Self {
        amount
    }
}

/// NOTE: this loses precision above 2^53.
impl From<YoctoNewtype> for f64 {
    fn from(YoctoNewtype(amount): YoctoNewtype) -> Self {
        amount as f64
    }
}

impl From<YoctoNewtype> for String {
    fn from(YoctoNewtype(amount): YoctoNewtype) -> Self {
        amount.to_string()
    }
}

impl FromStr for YoctoNewtype {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(YoctoNewtype)
    }
}

impl TryFrom<String> for YoctoNewtype {
    type Error = ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<u128>().map(YoctoNewtype)
    }
}
