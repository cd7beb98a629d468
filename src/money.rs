//! Locale-aware money formatting, fixed to English (United Kingdom) conventions
//!
//! Two entry points: [`format_money`] (full notation, two fraction digits)
//! and [`format_money_compact`] (K/M/B/T abbreviations). Both take an
//! optional ISO 4217 code; without one the amount renders as a plain number.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MoneyError {
    #[error("Unrecognised currency code: {0}")]
    UnknownCurrency(String),
}

// en-GB narrow symbols. XXX (the ISO "no currency" code) is intentionally
// absent: callers passing it want a loud failure, not "XXX 10.00".
static CURRENCIES: &[(&str, &str)] = &[
    ("AUD", "$"),
    ("BRL", "R$"),
    ("CAD", "$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("DKK", "kr"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "$"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "$"),
    ("NOK", "kr"),
    ("NZD", "$"),
    ("PLN", "zł"),
    ("SEK", "kr"),
    ("SGD", "$"),
    ("USD", "$"),
    ("ZAR", "R"),
];

/// Case-insensitive lookup of the narrow symbol for an ISO 4217 code
fn narrow_symbol(code: &str) -> Result<&'static str, MoneyError> {
    let upper = code.to_ascii_uppercase();
    match CURRENCIES.iter().find(|&&(c, _)| c == upper) {
        Some(&(_, symbol)) => Ok(symbol),
        None => {
            log::debug!("currency lookup failed for {code:?}");
            Err(MoneyError::UnknownCurrency(code.to_string()))
        }
    }
}

/// Insert comma separators into a plain digit run
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render with a fixed number of fraction digits and full grouping
fn format_fixed(amount: f64, places: usize) -> String {
    let rendered = format!("{amount:.places$}");
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut out = String::from(sign);
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Fraction digits for a compact mantissa: one below ten, none from ten up,
/// two significant digits below one
fn compact_places(scaled: f64) -> usize {
    if scaled >= 10.0 || scaled == 0.0 {
        0
    } else if scaled >= 1.0 {
        1
    } else {
        (-scaled.log10().floor()) as usize + 1
    }
}

const TIERS: &[(f64, &str)] = &[(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Abbreviated en-GB rendering: "1.2K", "1.5M", "999", "-12B"
fn format_compact_number(amount: f64) -> String {
    let negative = amount < 0.0;
    let mut abs = amount.abs();

    let (rounded, places, suffix) = loop {
        let (divisor, suffix) = TIERS
            .iter()
            .copied()
            .find(|&(d, _)| abs >= d)
            .unwrap_or((1.0, ""));
        let scaled = abs / divisor;
        let places = compact_places(scaled);
        let factor = 10f64.powi(places as i32);
        let rounded = (scaled * factor).round() / factor;

        // rounding can carry into the next tier (999_950 -> 1M)
        if rounded >= 1000.0 && divisor < 1e12 {
            abs = rounded * divisor;
            continue;
        }
        break (rounded, places, suffix);
    };

    let mut body = format!("{rounded:.places$}");
    if body.contains('.') {
        let keep = body.trim_end_matches('0').trim_end_matches('.').len();
        body.truncate(keep);
    }
    // grouping only kicks in past four digits in compact notation
    if !body.contains('.') && body.len() >= 5 {
        body = group_thousands(&body);
    }

    let sign = if negative && rounded != 0.0 { "-" } else { "" };
    format!("{sign}{body}{suffix}")
}

/// Prefix a narrow symbol to a rendered magnitude, sign first.
/// Letter-final symbols (CHF, kr) take a no-break space before the digits.
fn with_symbol(symbol: &str, rendered: &str) -> String {
    let (sign, magnitude) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let sep = if symbol.ends_with(|c: char| c.is_alphabetic()) {
        "\u{a0}"
    } else {
        ""
    };
    format!("{sign}{symbol}{sep}{magnitude}")
}

/// Format an amount with exactly two fraction digits under en-GB conventions.
/// With a currency code the narrow symbol is prefixed, otherwise the result
/// is a plain decimal number.
///
/// # Example
/// ```rust
/// use web_display_formatting::money::format_money;
///
/// assert_eq!(format_money(Some("GBP"), 1234.5).unwrap(), "£1,234.50");
/// assert_eq!(format_money(None, 10.0).unwrap(), "10.00");
/// ```
///
/// # Errors
/// [`MoneyError::UnknownCurrency`] if the code is not a recognised ISO 4217
/// currency.
pub fn format_money(currency: Option<&str>, amount: f64) -> Result<String, MoneyError> {
    let rendered = format_fixed(amount, 2);
    match currency {
        Some(code) => Ok(with_symbol(narrow_symbol(code)?, &rendered)),
        None => Ok(rendered),
    }
}

/// Format an amount in en-GB compact notation ("1.5M") with a minimum of
/// zero fraction digits. Currency handling and failure mode match
/// [`format_money`]: the narrow symbol is used here too ("$1.5M"), rather
/// than the wider disambiguated form ("US$1.5M") some formatters default to
/// for compact output.
pub fn format_money_compact(currency: Option<&str>, amount: f64) -> Result<String, MoneyError> {
    let rendered = format_compact_number(amount);
    match currency {
        Some(code) => Ok(with_symbol(narrow_symbol(code)?, &rendered)),
        None => Ok(rendered),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_currency() {
        assert_eq!(format_money(Some("GBP"), 1234.5).unwrap(), "£1,234.50");
    }

    #[test]
    fn full_plain() {
        assert_eq!(format_money(None, 10.0).unwrap(), "10.00");
    }

    #[test]
    fn full_groups_large_amounts() {
        assert_eq!(format_money(None, 1_234_567.891).unwrap(), "1,234,567.89");
    }

    #[test]
    fn full_negative_sign_precedes_symbol() {
        assert_eq!(format_money(Some("GBP"), -1234.5).unwrap(), "-£1,234.50");
    }

    #[test]
    fn full_letter_symbol_spacing() {
        assert_eq!(format_money(Some("CHF"), 10.0).unwrap(), "CHF\u{a0}10.00");
        assert_eq!(format_money(Some("SEK"), 5.0).unwrap(), "kr\u{a0}5.00");
    }

    #[test]
    fn currency_code_is_case_insensitive() {
        assert_eq!(format_money(Some("gbp"), 1.0).unwrap(), "£1.00");
    }

    #[test]
    fn unknown_currency_errors() {
        assert!(matches!(
            format_money(Some("XXX"), 10.0),
            Err(MoneyError::UnknownCurrency(_))
        ));
        assert!(matches!(
            format_money_compact(Some("WAT"), 10.0),
            Err(MoneyError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn compact_millions() {
        assert_eq!(format_money_compact(None, 1_500_000.0).unwrap(), "1.5M");
    }

    #[test]
    fn compact_thousands_with_currency() {
        assert_eq!(format_money_compact(Some("GBP"), 1234.5).unwrap(), "£1.2K");
    }

    #[test]
    fn compact_trims_trailing_zeros() {
        assert_eq!(format_money_compact(None, 2_000_000.0).unwrap(), "2M");
        assert_eq!(format_money_compact(None, 1000.0).unwrap(), "1K");
    }

    #[test]
    fn compact_below_first_tier() {
        assert_eq!(format_money_compact(None, 999.0).unwrap(), "999");
        assert_eq!(format_money_compact(None, 12.0).unwrap(), "12");
    }

    #[test]
    fn compact_two_digit_mantissa_drops_fraction() {
        assert_eq!(format_money_compact(None, 11_500.0).unwrap(), "12K");
        assert_eq!(format_money_compact(None, 115_000.0).unwrap(), "115K");
    }

    #[test]
    fn compact_rounding_carries_into_next_tier() {
        assert_eq!(format_money_compact(None, 999_950.0).unwrap(), "1M");
        assert_eq!(format_money_compact(None, 999.6).unwrap(), "1K");
    }

    #[test]
    fn compact_billions_and_trillions() {
        assert_eq!(format_money_compact(None, 2_300_000_000.0).unwrap(), "2.3B");
        assert_eq!(format_money_compact(Some("USD"), 1.2e12).unwrap(), "$1.2T");
    }

    #[test]
    fn compact_groups_five_digit_mantissas() {
        assert_eq!(format_money_compact(None, 1e16).unwrap(), "10,000T");
    }

    #[test]
    fn compact_negative() {
        assert_eq!(format_money_compact(None, -1_500_000.0).unwrap(), "-1.5M");
        assert_eq!(
            format_money_compact(Some("GBP"), -1_500_000.0).unwrap(),
            "-£1.5M"
        );
    }

    #[test]
    fn compact_zero() {
        assert_eq!(format_money_compact(None, 0.0).unwrap(), "0");
    }

    #[test]
    fn compact_sub_unit_amounts() {
        assert_eq!(format_money_compact(None, 0.5).unwrap(), "0.5");
        assert_eq!(format_money_compact(None, 0.04).unwrap(), "0.04");
    }
}
