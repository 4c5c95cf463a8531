use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::str::FromStr;

#[cfg(test)]
#[path = "./quantity.tests.rs"]
mod quantity_tests;

/// Possible errors from parsing resource quantities.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum QuantityError {
    /// Failed to parse specified quantity.
    #[error("failed to parse quantity '{0}'")]
    ParseError(String),
}

const NANO: u128 = 1;
const MICRO: u128 = 1_000;
const MILLI: u128 = 1_000_000;
const UNIT: u128 = 1_000_000_000;
const KIB: u128 = 1_024;

/// Resource quantity expressed in billionths of the base unit, so `100m` CPU and `0.1` compare equal.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResourceQuantity {
    pub nanos: u128,
}

impl ResourceQuantity {
    /// Returns `true` if the quantity is zero.
    pub fn is_zero(&self) -> bool {
        self.nanos == 0
    }
}

impl FromStr for ResourceQuantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || QuantityError::ParseError(s.to_owned());
        let (whole, fraction, unit) = split_unit(s.trim()).ok_or_else(error)?;

        let multiplier = match unit {
            "n" => NANO,
            "u" => MICRO,
            "m" => MILLI,
            "" => UNIT,
            "k" => UNIT * 1_000,
            "M" => UNIT * 1_000_000,
            "G" => UNIT * 1_000_000_000,
            "T" => UNIT * 1_000_000_000_000,
            "P" => UNIT * 1_000_000_000_000_000,
            "E" => UNIT * 1_000_000_000_000_000_000,
            "Ki" => UNIT * KIB,
            "Mi" => UNIT * KIB.pow(2),
            "Gi" => UNIT * KIB.pow(3),
            "Ti" => UNIT * KIB.pow(4),
            "Pi" => UNIT * KIB.pow(5),
            "Ei" => UNIT * KIB.pow(6),
            unit => exponent_multiplier(unit).ok_or_else(error)?,
        };

        let whole = if whole.is_empty() { 0 } else { whole.parse::<u128>().map_err(|_| error())? };
        let mut nanos = whole.checked_mul(multiplier).ok_or_else(error)?;

        let mut scale = multiplier;
        for digit in fraction.bytes() {
            scale /= 10;
            nanos += u128::from(digit - b'0') * scale;
        }

        Ok(Self { nanos })
    }
}

impl TryFrom<&Quantity> for ResourceQuantity {
    type Error = QuantityError;

    fn try_from(value: &Quantity) -> Result<Self, Self::Error> {
        value.0.parse()
    }
}

/// Returns multiplier for the decimal exponent notation, e.g. `e3` or `E-2`.
fn exponent_multiplier(unit: &str) -> Option<u128> {
    let exponent = unit.strip_prefix(['e', 'E'])?.parse::<i32>().ok()?;
    if exponent >= 0 {
        10u128.checked_pow(u32::try_from(exponent).ok()?)?.checked_mul(UNIT)
    } else if exponent >= -9 {
        Some(UNIT / 10u128.pow(exponent.unsigned_abs()))
    } else {
        None
    }
}

fn split_unit(input: &str) -> Option<(&str, &str, &str)> {
    let index = input
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(input.len());
    let (value, unit) = input.split_at(index);
    if value.is_empty() || value == "." {
        return None;
    }

    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    if fraction.contains('.') {
        return None;
    }

    Some((whole, fraction, unit))
}
