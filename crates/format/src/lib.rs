//! Common formatting for reaction and decay output
//!
//! These are left public for convenience.
//!
//! Reactions, nuclides and decay rows all print numbers that span hundreds of
//! orders of magnitude, so consistent scientific formatting is useful
//! everywhere.

// standard library
use std::fmt::{Display, LowerExp};

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait NumFormat {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use nreact_format::NumFormat;
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(1.007312e-3_f64.sci(3, 3), "1.007e-003".to_string());
    /// ```
    ///
    /// Decay constants and tunneling probabilities regularly reach exponents
    /// beyond 100, hence the configurable exponent padding.
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        // `NaN` and infinities have no exponent to pad
        let Some(idx) = num.find('e') else {
            return num;
        };
        let exp = num.split_off(idx);
        // Make sure the exponent is signed
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        // Pad the exponent with zeros if needed and put it back on the number
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}

/// Extends Option for easy display formatting
pub trait OptionFormat {
    /// Better option outputs
    ///
    /// Generic over anything that implements `Display`, this will either be the
    /// value contained within `Some()` or "none" for the `None` variant.
    ///
    /// For example:
    ///
    /// ```rust
    /// # use nreact_format::OptionFormat;
    /// let x: Option<&str> = Some("0+");
    /// assert_eq!(x.display(), "0+");
    ///
    /// let x: Option<u32> = None;
    /// assert_eq!(x.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionFormat for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}

/// Capilalises the first letter in a string
///
/// Element symbols are matched case-sensitively, so anything typed by a user
/// goes through this first.
///
/// ```rust
/// # use nreact_format::capitalise;
/// assert_eq!(capitalise("pt"), "Pt".to_string());
/// assert_eq!(capitalise(""), "".to_string());
/// ```
pub fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sci_handles_large_exponents() {
        assert_eq!(4.286183e-189_f64.sci(3, 3), "4.286e-189");
        assert_eq!(6.02214129e23_f64.sci(2, 2), "6.02e+23");
    }

    #[test]
    fn sci_passes_through_undefined_values() {
        assert_eq!(f64::NAN.sci(3, 2), "NaN");
        assert_eq!(f64::INFINITY.sci(3, 2), "inf");
    }

    #[test]
    fn capitalise_lowercase_symbols() {
        assert_eq!(capitalise("he"), "He");
        assert_eq!(capitalise("Os"), "Os");
    }
}
