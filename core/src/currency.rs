//! Price formatting in the Argentine (es-AR) convention.
//!
//! `1234.5` in ARS renders as `$ 1.234,50`: symbol, non-breaking space,
//! then the amount with exactly two fractional digits. Separators and
//! grouping come from the CLDR data for `es-AR` through `icu_decimal`;
//! this module only places the sign and the currency symbol.

use std::sync::OnceLock;

use icu_decimal::input::Decimal;
use icu_decimal::options::DecimalFormatterOptions;
use icu_decimal::DecimalFormatter;
use icu_locale_core::locale;
use phf::phf_map;
use tracing::warn;

/// Currency used when a listing does not configure one.
pub const DEFAULT_CURRENCY: &str = "ARS";

const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Codes with a local symbol in es-AR. Everything else shows its ISO code.
static SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    "ARS" => "$",
    "USD" => "US$",
};

fn formatter() -> Option<&'static DecimalFormatter> {
    static FORMATTER: OnceLock<Option<DecimalFormatter>> = OnceLock::new();
    FORMATTER
        .get_or_init(|| {
            DecimalFormatter::try_new(locale!("es-AR").into(), DecimalFormatterOptions::default())
                .map_err(|err| warn!(error = %err, "es-AR number format unavailable"))
                .ok()
        })
        .as_ref()
}

/// Display symbol for an ISO 4217 code; unknown codes are shown as-is.
pub fn currency_symbol(code: &str) -> &str {
    SYMBOLS.get(code).copied().unwrap_or(code)
}

/// Format `value` as a price in `code`.
///
/// Non-finite values are formatted as zero. A negative value keeps its sign
/// even when it rounds to zero, so `-0.001` is `-$ 0,00`.
pub fn format_currency(value: f64, code: &str) -> String {
    let value = if value.is_finite() { value } else { 0.0 };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(currency_symbol(code));
    out.push(SYMBOL_SEPARATOR);
    out.push_str(&format_amount(value.abs()));
    out
}

/// Format in [`DEFAULT_CURRENCY`].
pub fn format_default(value: f64) -> String {
    format_currency(value, DEFAULT_CURRENCY)
}

/// Unsigned amount with two fractional digits in es-AR notation.
fn format_amount(value: f64) -> String {
    let fixed = format!("{value:.2}");
    match (formatter(), fixed.parse::<Decimal>()) {
        (Some(formatter), Ok(decimal)) => formatter.format(&decimal).to_string(),
        // No locale data: keep the two digits, swap the decimal point.
        _ => fixed.replace('.', ","),
    }
}
