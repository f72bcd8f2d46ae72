//! Currency amounts as shown to the user.

use std::fmt;

/// An amount in a location's local currency.
///
/// Displays as the symbol followed by the whole amount with thousands
/// separators, e.g. `₹12,600`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money {
    pub symbol: &'static str,
    pub amount: f64,
}

impl Money {
    pub fn new(symbol: &'static str, amount: f64) -> Self {
        Self { symbol, amount }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol, group_thousands(self.amount))
    }
}

/// Round to a whole number and insert `,` every three digits.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(17500.0), "17,500");
        assert_eq!(group_thousands(1234567.6), "1,234,568");
        assert_eq!(group_thousands(-2500.0), "-2,500");
    }

    #[test]
    fn money_display_prefixes_symbol() {
        assert_eq!(Money::new("₹", 12600.0).to_string(), "₹12,600");
        assert_eq!(Money::new("$", 2000.0).to_string(), "$2,000");
        assert_eq!(Money::new("zł", 15.2).to_string(), "zł15");
    }
}
