use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, price::MegawattHourPrice};

pub type MegawattHours = Quantity<1, 0>;

impl Mul<MegawattHourPrice> for MegawattHours {
    type Output = Cost;

    fn mul(self, rhs: MegawattHourPrice) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Display for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} MWh", self.0.0)
    }
}

impl Debug for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}MWh", self.0.0)
    }
}
