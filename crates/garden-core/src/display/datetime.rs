//! Calendar date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A forecast day label such as `Wed, May 1`.
pub struct DayLabel<'a>(pub &'a Date);

impl fmt::Display for DayLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a, %b %-d"))
    }
}

/// A planting date such as `May 1, 2024`.
pub struct LongDate<'a>(pub &'a Date);

impl fmt::Display for LongDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%B %-d, %Y"))
    }
}
