//! Lenient date decoding for server fields that may be missing, blank or "N/A".

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

const PLACEHOLDERS: [&str; 2] = ["", "N/A"];

pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let raw = raw.trim();
    if PLACEHOLDERS.iter().any(|p| raw.eq_ignore_ascii_case(p)) {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.date_naive()));
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Some(ts.date()));
    }
    Err(format!("unrecognized date {raw:?}"))
}

pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_date(&raw).map_err(D::Error::custom),
        None => Ok(None),
    }
}

pub fn required_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .map_err(D::Error::custom)?
        .ok_or_else(|| D::Error::custom("date is required"))
}
