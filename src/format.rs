//! Currency formatting for the text report.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Format `amount` as dollars with two decimal places, e.g. "$1,234.50" or "-$12.30".
pub fn format_currency(amount: Decimal) -> String {
    static POSITIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let number = amount.round_dp(2).to_f64().unwrap_or_default();

    let formatter = if number < 0.0 {
        NEGATIVE_FMT.get_or_init(|| currency_formatter("-$"))
    } else if number > 0.0 {
        POSITIVE_FMT.get_or_init(|| currency_formatter("$"))
    } else {
        // numfmt renders zero as "0" without the prefix.
        return "$0.00".to_owned();
    };

    let Some(formatter) = formatter else {
        return format!("${:.2}", amount.round_dp(2));
    };

    pad_cents(formatter.fmt_string(number.abs()))
}

fn currency_formatter(prefix: &str) -> Option<Formatter> {
    Formatter::currency(prefix)
        .ok()
        .map(|formatter| formatter.precision(Precision::Decimals(2)))
}

/// numfmt drops trailing zeros, e.g. "12.30" comes out as "12.3".
fn pad_cents(mut formatted: String) -> String {
    match formatted.rfind('.') {
        None => formatted.push_str(".00"),
        Some(index) => {
            for _ in formatted.len() - index - 1..2 {
                formatted.push('0');
            }
        }
    }

    formatted
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::format::{format_currency, pad_cents};

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
    }

    #[test]
    fn formats_cents() {
        assert_eq!(format_currency(dec!(45.99)), "$45.99");
        assert_eq!(format_currency(dec!(12.3)), "$12.30");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(dec!(-45.99)), "-$45.99");
    }

    #[test]
    fn pads_missing_cents() {
        assert_eq!(pad_cents("$12".to_owned()), "$12.00");
        assert_eq!(pad_cents("$12.3".to_owned()), "$12.30");
        assert_eq!(pad_cents("$12.34".to_owned()), "$12.34");
    }
}
