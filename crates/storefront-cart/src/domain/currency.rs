//! Currency display helpers for cart totals and prices.
//!
//! Amounts render with grouped thousands and at most two fractional digits,
//! trailing zeros trimmed. Birr amounts carry the `ብር` prefix.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Fixed conversion rate from US dollars to Ethiopian birr.
pub const USD_TO_ETB_RATE: Decimal = Decimal::from_parts(130, 0, 0, false, 0);

const ETB_SYMBOL: &str = "ብር";

/// Display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Ethiopian birr.
    #[default]
    Etb,
    /// US dollar.
    Usd,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Etb => f.write_str("etb"),
            Self::Usd => f.write_str("usd"),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "etb" => Ok(Self::Etb),
            "usd" => Ok(Self::Usd),
            other => Err(format!("unsupported currency {other:?} (expected etb or usd)")),
        }
    }
}

/// Converts a dollar amount to birr at [`USD_TO_ETB_RATE`].
#[must_use]
pub fn usd_to_etb(amount: Decimal) -> Decimal {
    amount * USD_TO_ETB_RATE
}

/// Formats `amount` for display, e.g. `ብር 1,234.5` or `$1,234.5`.
#[must_use]
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    let rounded = round_half_up(amount, 2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let body = group_thousands(&rounded.abs().normalize().to_string());
    match currency {
        Currency::Etb => format!("{ETB_SYMBOL} {sign}{body}"),
        Currency::Usd => format!("{sign}${body}"),
    }
}

/// Formats `amount` compactly, e.g. `ብር 1.2k` or `$1.23K`.
///
/// Birr always shows thousands with one decimal. Dollars use the largest of
/// K, M, B, T not exceeding the amount; amounts under 1,000 fall back to
/// [`format_currency`].
#[must_use]
pub fn format_compact_currency(amount: Decimal, currency: Currency) -> String {
    match currency {
        Currency::Etb => {
            let mut thousands = round_half_up(amount / Decimal::ONE_THOUSAND, 1);
            thousands.rescale(1);
            format!("{ETB_SYMBOL} {thousands}k")
        }
        Currency::Usd => {
            const UNITS: [(u64, &str); 4] = [
                (1_000_000_000_000, "T"),
                (1_000_000_000, "B"),
                (1_000_000, "M"),
                (1_000, "K"),
            ];
            let magnitude = amount.abs();
            let Some(mut index) = UNITS
                .iter()
                .position(|(unit, _)| magnitude >= Decimal::from(*unit))
            else {
                return format_currency(amount, Currency::Usd);
            };

            let mut scaled = round_half_up(magnitude / Decimal::from(UNITS[index].0), 2);
            // 999_999 rounds to 1000K; promote it to 1M.
            if scaled >= Decimal::ONE_THOUSAND && index > 0 {
                index -= 1;
                scaled = round_half_up(magnitude / Decimal::from(UNITS[index].0), 2);
            }

            let sign = if amount.is_sign_negative() { "-" } else { "" };
            let body = group_thousands(&scaled.normalize().to_string());
            format!("{sign}${body}{}", UNITS[index].1)
        }
    }
}

fn round_half_up(amount: Decimal, dp: u32) -> Decimal {
    amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Inserts `,` every three integer digits of an unsigned decimal string.
fn group_thousands(digits: &str) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(digits.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
