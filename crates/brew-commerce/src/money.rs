//! Money type and price formatting.
//!
//! Amounts are held as integer hundredths of the major unit so that totals
//! like `24.99 * 3` come out exact. Display follows en-US currency
//! conventions: symbol prefix, thousands separators and at most two
//! fractional digits, never fewer than the currency's own minor unit.

use crate::error::CommerceError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fractional digits kept and displayed at most.
pub const MAX_FRACTION_DIGITS: u32 = 2;

const HUNDREDTHS_PER_UNIT: u64 = 100;

/// ISO 4217 codes whose minor unit is the major unit itself.
const ZERO_DECIMAL_CODES: [&str; 12] = [
    "JPY", "KRW", "VND", "CLP", "ISK", "UGX", "PYG", "KMF", "RWF", "DJF", "GNF", "XAF",
];

/// A well-formed three letter currency code, stored upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Accept exactly three ASCII letters, in any case.
    pub fn parse(code: &str) -> Option<Self> {
        let bytes: [u8; 3] = code.as_bytes().try_into().ok()?;
        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Self(bytes.map(|b| b.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("XXX")
    }
}

/// Currencies. The common ones carry their en-US symbol; any other ISO
/// code is shown by its code, as in "SEK 5.00".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    CNY,
    INR,
    MXN,
    Other(CurrencyCode),
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::CNY => "CNY",
            Currency::INR => "INR",
            Currency::MXN => "MXN",
            Currency::Other(code) => code.as_str(),
        }
    }

    /// Get the en-US currency symbol (e.g., "$").
    pub fn symbol(&self) -> &str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF",
            Currency::CNY => "CN\u{00a5}",
            Currency::INR => "\u{20b9}",
            Currency::MXN => "MX$",
            Currency::Other(code) => code.as_str(),
        }
    }

    /// Fractional digits always shown: the currency's minor unit, capped at
    /// [`MAX_FRACTION_DIGITS`].
    pub fn min_fraction_digits(&self) -> u32 {
        if ZERO_DECIMAL_CODES.contains(&self.code()) {
            0
        } else {
            MAX_FRACTION_DIGITS
        }
    }

    /// Parse a currency code string. Any three letter code is accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = CurrencyCode::parse(code)?;
        Some(match code.as_str() {
            "USD" => Currency::USD,
            "EUR" => Currency::EUR,
            "GBP" => Currency::GBP,
            "JPY" => Currency::JPY,
            "CAD" => Currency::CAD,
            "AUD" => Currency::AUD,
            "CHF" => Currency::CHF,
            "CNY" => Currency::CNY,
            "INR" => Currency::INR,
            "MXN" => Currency::MXN,
            _ => Currency::Other(code),
        })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<String> for Currency {
    type Error = CommerceError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Currency::from_code(&code).ok_or(CommerceError::InvalidCurrency(code))
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in hundredths of the major unit (cents for USD).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from hundredths.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// The shortest decimal form of `amount` is rounded half away from zero
    /// to two places, so `1.005` becomes `1.01`.
    ///
    /// ```
    /// use brew_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(24.99, Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 2499);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Result<Self, CommerceError> {
        if !amount.is_finite() {
            return Err(CommerceError::InvalidAmount(amount.to_string()));
        }
        // Rounds to zero, and its decimal form can exceed Decimal's scale.
        if amount.abs() < 0.001 {
            return Ok(Self::new(0, currency));
        }

        let exact = Decimal::from_str(&amount.to_string()).map_err(|_| CommerceError::Overflow)?;
        exact
            .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|hundredths| hundredths.to_i64())
            .map(|hundredths| Self::new(hundredths, currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$1,249.50", "\u{00a5}1,500.5").
    pub fn display(&self) -> String {
        let magnitude = self.amount_cents.unsigned_abs();
        let symbol = self.currency.symbol();

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(symbol);
        // Alphabetic symbols are separated from the digits, as in "CHF 5.00".
        if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
            out.push('\u{00a0}');
        }
        out.push_str(&group_thousands(magnitude / HUNDREDTHS_PER_UNIT));

        let min_digits = self.currency.min_fraction_digits() as usize;
        let mut fraction = format!("{:02}", magnitude % HUNDREDTHS_PER_UNIT);
        while fraction.len() > min_digits && fraction.ends_with('0') {
            fraction.pop();
        }
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(&fraction);
        }
        out
    }

    /// Multiply by a quantity.
    pub fn checked_multiply(&self, factor: i64) -> Result<Money, CommerceError> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
            .ok_or(CommerceError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a decimal amount as US dollars.
///
/// ```
/// use brew_commerce::format_price;
/// assert_eq!(format_price(16.99).unwrap(), "$16.99");
/// assert_eq!(format_price(30.0).unwrap(), "$30.00");
/// ```
pub fn format_price(amount: f64) -> Result<String, CommerceError> {
    format_price_as(amount, Currency::USD)
}

/// Format a decimal amount in the currency named by an ISO code.
///
/// Codes without a known symbol are shown by their code.
pub fn format_price_in(amount: f64, currency_code: &str) -> Result<String, CommerceError> {
    let currency = Currency::from_code(currency_code)
        .ok_or_else(|| CommerceError::InvalidCurrency(currency_code.to_string()))?;
    format_price_as(amount, currency)
}

fn format_price_as(amount: f64, currency: Currency) -> Result<String, CommerceError> {
    Money::from_decimal(amount, currency).map(|money| money.display())
}
