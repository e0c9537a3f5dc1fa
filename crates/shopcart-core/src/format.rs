//! # Currency Formatter
//!
//! Turns amounts into display strings: glyph prefix, thousands grouping,
//! exactly two fraction digits.
//!
//! ```text
//!        0  ──►  ₱0.00
//!      900  ──►  ₱900.00
//!     1000  ──►  ₱1,000.00
//!  1234567  ──►  ₱1,234,567.00
//! ```
//!
//! ## Rounding
//! [`CurrencyFormat::format_money`] is exact: `Money` is already integer
//! centavos. [`CurrencyFormat::format_amount`] takes an arbitrary `f64` and
//! rounds to the nearest centavo with **round half to even**
//! (`f64::round_ties_even`), so `0.125` becomes `₱0.12` and `0.135` becomes
//! `₱0.14`. The rounding is applied to `amount * 100` as a binary float, so
//! inputs like `1.005` (stored as 1.00499...) round down.

use serde::{Deserialize, Serialize};

use crate::money::{Money, CENTAVOS_PER_PESO};

/// Peso sign.
pub const PESO_SIGN: &str = "\u{20b1}";

/// The one active currency convention for a process.
///
/// ## Example
/// ```rust
/// use shopcart_core::format::CurrencyFormat;
/// use shopcart_core::money::Money;
///
/// let php = CurrencyFormat::philippine_peso();
/// assert_eq!(php.format_money(Money::from_pesos(1000)), "₱1,000.00");
/// assert_eq!(php.format_amount(0.0), "₱0.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// Glyph written before the number.
    pub symbol: String,

    /// Separator between groups of three integer digits.
    pub group_separator: String,

    /// Separator before the two fraction digits.
    pub decimal_separator: String,
}

impl CurrencyFormat {
    /// Philippine peso with en-PH grouping: `₱1,234.50`.
    pub fn philippine_peso() -> Self {
        CurrencyFormat {
            symbol: PESO_SIGN.to_string(),
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }

    /// Same separators, different glyph.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Formats an exact centavo amount.
    ///
    /// Negative amounts put the sign before the glyph (`-₱5.50`).
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let abs = amount.centavos().unsigned_abs();
        let per_peso = CENTAVOS_PER_PESO.unsigned_abs();

        format!(
            "{}{}{}{}{:02}",
            sign,
            self.symbol,
            group_digits(abs / per_peso, &self.group_separator),
            self.decimal_separator,
            abs % per_peso
        )
    }

    /// Formats any real number of pesos.
    ///
    /// Rounds half to even at the centavo. Non-finite input is outside the
    /// widget's contract; it still doesn't panic and renders as
    /// `₱NaN`, `₱∞` or `-₱∞`.
    pub fn format_amount(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", self.symbol);
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{}{}\u{221e}", sign, self.symbol);
        }

        // `as` saturates at the i64 bounds
        let centavos = (amount * CENTAVOS_PER_PESO as f64).round_ties_even() as i64;
        self.format_money(Money::from_centavos(centavos))
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::philippine_peso()
    }
}

/// Peso formatting with the default convention.
///
/// ```rust
/// use shopcart_core::format::format_php;
/// use shopcart_core::money::Money;
///
/// assert_eq!(format_php(Money::from_pesos(2500)), "₱2,500.00");
/// ```
pub fn format_php(amount: Money) -> String {
    CurrencyFormat::philippine_peso().format_money(amount)
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
