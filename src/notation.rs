//! SPICE-style value notation for describing rails on the command line.
//!
//! A rail is a list of `KEY=VALUE` pairs separated by whitespace or commas.
//! Keys are case-insensitive; values take an optional SI suffix.
//!
//! ```text
//! rail   = pair { (' ' | ',') pair }
//! pair   = key '=' value
//! key    = "V" | "I" | "C" | "R" | "RC" | "CC" | "CROLL" | "L"
//! value  = number [unit_suffix]
//! number = ['-'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+]
//! unit_suffix = 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G'
//! ```
//!
//! `V`, `I` and `C` are required. For example:
//!
//! ```text
//! V=12 I=300m C=14u RC=7.5k CC=100n CROLL=100p L=4.7u
//! ```

use crate::error::{CompensationError, Result};
use crate::rail::RailSpec;

/// Parse a number string with optional unit suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (num_str, multiplier) = match text.chars().last() {
        Some(last) => {
            let mult = match last {
                'p' => 1e-12,
                'n' => 1e-9,
                'u' | 'µ' => 1e-6,
                'm' => 1e-3,
                'k' | 'K' => 1e3,
                'M' => 1e6,
                'G' => 1e9,
                _ => 1.0,
            };
            if mult != 1.0 {
                (&text[..text.len() - last.len_utf8()], mult)
            } else {
                (text, 1.0)
            }
        }
        None => (text, 1.0),
    };

    // Reject "inf", "nan" and friends, which f64::from_str accepts
    let unsigned = num_str.strip_prefix('-').unwrap_or(num_str);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

/// Parse a rail description into a [`RailSpec`].
pub fn parse_rail(text: &str) -> Result<RailSpec> {
    let mut v = None;
    let mut i = None;
    let mut c = None;
    let mut rail = RailSpec::default();

    for entry in text
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|s| !s.is_empty())
    {
        let (key, raw) = entry
            .split_once('=')
            .ok_or_else(|| CompensationError::MalformedEntry {
                text: entry.to_string(),
            })?;
        let key = key.trim().to_ascii_uppercase();
        let value =
            parse_value(raw).ok_or_else(|| CompensationError::invalid_value(key.as_str(), raw))?;

        let slot = match key.as_str() {
            "V" => &mut v,
            "I" => &mut i,
            "C" => &mut c,
            "R" => &mut rail.r,
            "RC" => &mut rail.rc,
            "CC" => &mut rail.cc,
            "CROLL" => &mut rail.croll,
            "L" => &mut rail.l,
            _ => return Err(CompensationError::UnknownField { field: key }),
        };
        if slot.is_some() {
            return Err(CompensationError::DuplicateField { field: key });
        }
        *slot = Some(value);
    }

    let require = |value: Option<f64>, field: &str| {
        value.ok_or_else(|| CompensationError::MissingField {
            field: field.to_string(),
        })
    };
    rail.v = require(v, "V")?;
    rail.i = require(i, "I")?;
    rail.c = require(c, "C")?;

    Ok(rail)
}
