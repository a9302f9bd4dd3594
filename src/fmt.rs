use std::fmt::{Debug, Display, Formatter};

/// Number with comma-separated thousands and a fixed number of decimals.
pub struct Thousands(pub f64, pub usize);

impl Debug for Thousands {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Thousands {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self(value, precision) = *self;
        if !value.is_finite() {
            return Display::fmt(&value, f);
        }
        let formatted = format!("{:.*}", precision, value.abs());
        let (integer, fraction) =
            formatted.split_at(formatted.find('.').unwrap_or(formatted.len()));
        if is_negative_when_rounded(value, precision) {
            f.write_str("-")?;
        }
        for (i, digit) in integer.chars().enumerate() {
            if i != 0 && (integer.len() - i) % 3 == 0 {
                f.write_str(",")?;
            }
            write!(f, "{digit}")?;
        }
        f.write_str(fraction)
    }
}

/// Pound amount with the sign in front of the currency symbol.
pub struct Pounds(pub f64, pub usize);

impl Display for Pounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self(value, precision) = *self;
        if is_negative_when_rounded(value, precision) {
            write!(f, "-£{}", Thousands(-value, precision))
        } else {
            write!(f, "£{}", Thousands(value.abs(), precision))
        }
    }
}

/// Amounts that round to zero lose their sign, so that `-0.4` never prints as `-0`.
fn is_negative_when_rounded(value: f64, precision: usize) -> bool {
    value < 0.0
        && format!("{:.*}", precision, -value).bytes().any(|byte| matches!(byte, b'1'..=b'9'))
}
