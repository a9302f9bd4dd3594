use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::quantity::{Quantity, energy::MegawattHours, price::MegawattHourPrice};

/// Pounds sterling.
pub type Cost = Quantity<0, 1>;

impl Div<MegawattHours> for Cost {
    type Output = MegawattHourPrice;

    fn div(self, rhs: MegawattHours) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.0 < 0.0 {
            write!(f, "-£{:.2}", -self.0.0)
        } else {
            write!(f, "£{:.2}", self.0.0)
        }
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}£", self.0.0)
    }
}
