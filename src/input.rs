//! Parsing helpers for raw form input.
//!
//! Everything that enters the crate as text goes through these functions once,
//! so the rest of the crate can work with validated values.

use std::str::FromStr;

use rust_decimal::Decimal;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is not in the expected format or
/// names a day that does not exist.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), ISO_DATE).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Parse a non-negative decimal amount such as `"12.50"`.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `text` is not a decimal number, or
/// [Error::NegativeAmount] if it is below zero.
pub fn parse_amount(text: &str) -> Result<Decimal, Error> {
    let amount =
        Decimal::from_str(text.trim()).map_err(|_| Error::InvalidAmount(text.to_owned()))?;

    check_amount(amount)
}

/// Check that `amount` is not negative.
///
/// # Errors
/// Returns [Error::NegativeAmount] if `amount` is below zero.
pub fn check_amount(amount: Decimal) -> Result<Decimal, Error> {
    if amount.is_sign_negative() && !amount.is_zero() {
        Err(Error::NegativeAmount(amount))
    } else {
        Ok(amount)
    }
}

/// Trim `text` and reject it if nothing is left.
///
/// # Errors
/// Returns [Error::EmptyField] naming `field` if `text` is blank.
pub fn require_non_empty(text: &str, field: &'static str) -> Result<String, Error> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        Err(Error::EmptyField(field))
    } else {
        Ok(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::{
        Error,
        input::{parse_amount, parse_date, require_non_empty},
    };

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2024-03-01"), Ok(date!(2024 - 03 - 01)));
    }

    #[test]
    fn rejects_malformed_dates() {
        for text in ["2024-3-1", "01/03/2024", "2024-02-30", ""] {
            assert_eq!(
                parse_date(text),
                Err(Error::InvalidDate(text.to_owned())),
                "expected {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(parse_amount("12.50"), Ok(dec!(12.50)));
        assert_eq!(parse_amount(" 0 "), Ok(dec!(0)));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert_eq!(parse_amount("-1.5"), Err(Error::NegativeAmount(dec!(-1.5))));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert!(parse_amount("-0").is_ok());
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert_eq!(
            parse_amount("twelve"),
            Err(Error::InvalidAmount("twelve".to_owned()))
        );
    }

    #[test]
    fn require_non_empty_trims() {
        assert_eq!(require_non_empty("  Dining ", "category"), Ok("Dining".to_owned()));
        assert_eq!(
            require_non_empty("   ", "category"),
            Err(Error::EmptyField("category"))
        );
    }
}
