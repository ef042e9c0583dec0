//! Normalization of locale-formatted display amounts.
//!
//! The web demo renders money in Turkish locale (`.` thousands
//! separators, `,` decimal separator, optional `TL` suffix). Scraped
//! text is canonicalized here, at the boundary between the scraper and
//! the verification protocol, so the comparison only ever sees plain
//! decimals.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed display amount: {0:?}")]
pub struct CurrencyError(pub String);

/// Parse a displayed amount into a canonical decimal.
///
/// Strips a trailing `TL` or `₺` marker, then resolves which separator
/// is the decimal point. When both `.` and `,` appear, the rightmost
/// one wins; a lone separator followed by exactly two digits is a
/// decimal point, otherwise it groups thousands. Amounts are displayed
/// with two fractional digits, which makes this unambiguous in
/// practice.
pub fn parse_display_amount(text: &str) -> Result<f64, CurrencyError> {
    let trimmed = text.trim();
    let bare = trimmed
        .strip_suffix("TL")
        .or_else(|| trimmed.strip_suffix('₺'))
        .unwrap_or(trimmed)
        .trim();

    if bare.is_empty() {
        return Err(CurrencyError(text.to_string()));
    }

    canonicalize(bare)
        .parse::<f64>()
        .map_err(|_| CurrencyError(text.to_string()))
}

fn canonicalize(s: &str) -> String {
    match (s.rfind('.'), s.rfind(',')) {
        (Some(dot), Some(comma)) if dot > comma => s.replace(',', ""),
        (Some(_), Some(_)) => s.replace('.', "").replace(',', "."),
        (None, Some(comma)) => {
            if s.matches(',').count() == 1 && s.len() - comma == 3 {
                s.replace(',', ".")
            } else {
                s.replace(',', "")
            }
        }
        (Some(dot), None) => {
            if s.matches('.').count() == 1 && s.len() - dot == 3 {
                s.to_string()
            } else {
                s.replace('.', "")
            }
        }
        (None, None) => s.to_string(),
    }
}
