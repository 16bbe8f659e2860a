mod gas;
mod yocto;

pub use gas::Gas;
pub use gas::GasNewtype;
pub use gas::GasUnit;
pub use gas::ParseGasUnitError;

pub use yocto::ParseTokenUnitError;
pub use yocto::TokenUnit;
pub use yocto::Yocto;
pub use yocto::YoctoNewtype;

pub const GAS_PER_GGAS: u64 = 1_000_000_000;

pub const GAS_PER_TGAS: u64 = 1_000_000_000_000;

pub const YOCTO_PER_MICRO: u128 = 1_000_000_000_000_000_000;

pub const YOCTO_PER_MILLI: u128 = 1_000_000_000_000_000_000_000;

pub const YOCTO_PER_NEAR: u128 = 1_000_000_000_000_000_000_000_000;

pub type GasF64 = f64;

pub type NearF64 = f64;

// Whole amounts scale in integer space so the 10^21 and 10^24 factors stay
// exact; fractional amounts multiply as f64 and truncate toward zero. Results
// past the type max clamp there instead of wrapping.
pub(crate) fn scale_whole_u128(amount: u128, factor: u128) -> u128 {
    amount.checked_mul(factor).unwrap_or(u128::MAX)
}

pub(crate) fn scale_f64_u128(amount: f64, factor: u128) -> u128 {
    if amount.fract() == 0.0 && amount >= 0.0 && amount < u128::MAX as f64 {
        scale_whole_u128(amount as u128, factor)
    } else {
        (amount * factor as f64) as u128
    }
}

pub(crate) fn scale_f64_u64(amount: f64, factor: u64) -> u64 {
    u64::try_from(scale_f64_u128(amount, factor as u128)).unwrap_or(u64::MAX)
}
