//! Parse, validate, and format human-friendly NEAR gas and token amounts.
//!
//! Quantity strings like "25.5 TGas" or "0.01 NEAR" normalize into canonical
//! base-unit integers (gas units and yoctoNEAR); raw integers pass through with
//! an advisory plausibility check. The newtypes convert to and from each unit
//! tier and render the most readable tier on display.

pub mod log;
mod parse;
mod plausibility;
pub mod units;
mod validate;

pub use parse::parse_gas;
pub use parse::parse_token;
pub use parse::GasInput;
pub use parse::ParseQuantityError;
pub use parse::QuantityKind;
pub use parse::TokenInput;

pub use plausibility::check_plausible_gas;
pub use plausibility::check_plausible_token;
pub use plausibility::PlausibilityWarning;

pub use units::GasNewtype;
pub use units::GasUnit;
pub use units::TokenUnit;
pub use units::YoctoNewtype;

pub use validate::validate_call;
pub use validate::ValidateCallError;
pub use validate::ValidatedCall;
