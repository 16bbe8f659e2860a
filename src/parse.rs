//! Parses human-friendly gas and token amount strings, e.g. "25 TGas" or
//! "0.01 NEAR", into canonical base-unit integers. Raw integers pass through
//! unchanged, interpreted as already being in base units.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::{
    plausibility,
    units::{self, GasNewtype, GasUnit, TokenUnit, YoctoNewtype},
};

lazy_static! {
    static ref GAS_AMOUNT_RE: Regex =
        Regex::new(r"(?i)^([0-9]+(?:\.[0-9]+)?)\s*(tgas|ggas|gas)$").unwrap();
    static ref TOKEN_AMOUNT_RE: Regex = Regex::new(
        r"(?i)^([0-9]+(?:\.[0-9]+)?)\s*(near|millinear|mnear|micronear|μnear|yoctonear|yocto)$"
    )
    .unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityKind {
    Gas,
    Token,
}

impl QuantityKind {
    pub fn format_examples(&self) -> &'static str {
        use QuantityKind::*;
        match self {
            Gas => r#""800 Gas", "30 GGas" or "25.5 TGas""#,
            Token => r#""1 NEAR", "100 mNEAR", "5 μNEAR" or "10000 yoctoNEAR""#,
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use QuantityKind::*;
        match self {
            Gas => write!(f, "gas"),
            Token => write!(f, "token"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseQuantityError {
    #[error(
        "invalid {kind} amount {input:?}: expected a number followed by a unit, e.g. {}",
        .kind.format_examples()
    )]
    InvalidFormat { kind: QuantityKind, input: String },
    #[error("unrecognized {kind} unit {unit:?}, expected e.g. {}", .kind.format_examples())]
    UnknownUnit { kind: QuantityKind, unit: String },
}

/// A gas amount as callers supply it: a human-friendly string with an explicit
/// unit, or a raw integer already denominated in base gas units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GasInput {
    Text(String),
    Base(u64),
}

impl From<&str> for GasInput {
    fn from(text: &str) -> Self {
        GasInput::Text(text.to_string())
    }
}

impl From<String> for GasInput {
    fn from(text: String) -> Self {
        GasInput::Text(text)
    }
}

impl From<u64> for GasInput {
    fn from(base: u64) -> Self {
        GasInput::Base(base)
    }
}

/// A token amount as callers supply it: a human-friendly string with an
/// explicit unit, or a raw integer already denominated in yoctoNEAR.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenInput {
    Text(String),
    Base(u128),
}

impl From<&str> for TokenInput {
    fn from(text: &str) -> Self {
        TokenInput::Text(text.to_string())
    }
}

impl From<String> for TokenInput {
    fn from(text: String) -> Self {
        TokenInput::Text(text)
    }
}

impl From<u128> for TokenInput {
    fn from(base: u128) -> Self {
        TokenInput::Base(base)
    }
}

fn scale_amount(amount: &str, factor: u128) -> u128 {
    match amount.parse::<u128>() {
        Ok(whole) => units::scale_whole_u128(whole, factor),
        // Fractional or over-long amounts take the truncating float route.
        Err(_) => {
            let amount = amount
                .parse::<f64>()
                .expect("regex-matched amount parses as f64");
            (amount * factor as f64) as u128
        }
    }
}

pub fn parse_gas(input: impl Into<GasInput>) -> Result<GasNewtype, ParseQuantityError> {
    match input.into() {
        GasInput::Base(base) => {
            plausibility::check_plausible_gas(base);
            Ok(GasNewtype(base))
        }
        GasInput::Text(text) => {
            let captures =
                GAS_AMOUNT_RE
                    .captures(&text)
                    .ok_or_else(|| ParseQuantityError::InvalidFormat {
                        kind: QuantityKind::Gas,
                        input: text.clone(),
                    })?;
            let unit = captures[2].parse::<GasUnit>().map_err(|_| {
                ParseQuantityError::UnknownUnit {
                    kind: QuantityKind::Gas,
                    unit: captures[2].to_string(),
                }
            })?;
            let base = u64::try_from(scale_amount(&captures[1], unit.factor() as u128))
                .unwrap_or(u64::MAX);
            Ok(GasNewtype(base))
        }
    }
}

pub fn parse_token(input: impl Into<TokenInput>) -> Result<YoctoNewtype, ParseQuantityError> {
    match input.into() {
        TokenInput::Base(base) => {
            plausibility::check_plausible_token(base);
            Ok(YoctoNewtype(base))
        }
        TokenInput::Text(text) => {
            let captures =
                TOKEN_AMOUNT_RE
                    .captures(&text)
                    .ok_or_else(|| ParseQuantityError::InvalidFormat {
                        kind: QuantityKind::Token,
                        input: text.clone(),
                    })?;
            let unit = captures[2].parse::<TokenUnit>().map_err(|_| {
                ParseQuantityError::UnknownUnit {
                    kind: QuantityKind::Token,
                    unit: captures[2].to_string(),
                }
            })?;
            Ok(YoctoNewtype(scale_amount(&captures[1], unit.factor())))
        }
    }
}
