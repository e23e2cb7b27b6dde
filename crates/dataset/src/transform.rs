use crate::error::LoadError;
use crate::reader::RawRow;
use chrono::{NaiveDate, NaiveDateTime};
use core_types::stats::{mean, percent_change};
use core_types::{MovieTable, Record, SuccessLevel};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

pub const UNKNOWN_GENRE: &str = "Unknown";
pub const NOT_RATED: &str = "Not Rated";

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Turns raw rows into the enriched table.
///
/// One record per input row, in input order. Monetary cells that are not
/// numbers become missing values. A release date that cannot be parsed fails
/// the whole load, since every calendar field hangs off it.
///
/// The success level and year-over-year growth are computed here, against the
/// full corpus, so later filtering never changes them.
pub fn enrich(rows: Vec<RawRow>) -> Result<MovieTable, LoadError> {
    let mut records = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| to_record(i + 1, row))
        .collect::<Result<Vec<_>, _>>()?;

    let corpus_mean = mean(records.iter().filter_map(|r| r.total_gross));
    for record in &mut records {
        record.success_level = match (record.total_gross, corpus_mean) {
            (Some(gross), Some(avg)) if gross > avg => SuccessLevel::AboveAverage,
            _ => SuccessLevel::BelowAverage,
        };
    }

    let growth = yearly_growth_by_year(&records);
    for record in &mut records {
        record.yoy_growth = growth.get(&record.year).copied().flatten();
    }

    Ok(MovieTable::new(records))
}

/// Percent change of each year's total gross against the previous year that
/// has any titles. The earliest year, and any year following a zero total,
/// have no growth value.
pub fn yearly_growth_by_year(records: &[Record]) -> BTreeMap<i32, Option<Decimal>> {
    let mut totals: BTreeMap<i32, Decimal> = BTreeMap::new();
    for record in records {
        let sum = totals.entry(record.year).or_default();
        *sum = sum.saturating_add(record.total_gross.unwrap_or_default());
    }

    let mut previous: Option<Decimal> = None;
    totals
        .into_iter()
        .map(|(year, total)| {
            let growth = previous.and_then(|prev| percent_change(prev, total));
            previous = Some(total);
            (year, growth)
        })
        .collect()
}

fn to_record(row_number: usize, row: RawRow) -> Result<Record, LoadError> {
    let release_date = parse_date(row_number, row.release_date.as_deref())?;
    let total_gross = parse_amount(row_number, "total_gross", row.total_gross.as_deref());
    let inflation_adjusted_gross = parse_amount(
        row_number,
        "inflation_adjusted_gross",
        row.inflation_adjusted_gross.as_deref(),
    );

    Ok(Record::new(
        row.title.unwrap_or_default(),
        release_date,
        fill(row.genre, UNKNOWN_GENRE),
        fill(row.mpaa_rating, NOT_RATED),
        total_gross,
        inflation_adjusted_gross,
    ))
}

fn fill(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback.to_string(),
    }
}

fn parse_date(row_number: usize, raw: Option<&str>) -> Result<NaiveDate, LoadError> {
    let text = raw
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(LoadError::MissingDate { row: row_number })?;

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| LoadError::InvalidDate {
            row: row_number,
            value: text.to_string(),
        })
}

/// Parses a monetary cell. Anything that is not a plain or scientific-notation
/// number is a missing value.
fn parse_amount(row_number: usize, column: &str, raw: Option<&str>) -> Option<Decimal> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    let parsed = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok();
    if parsed.is_none() {
        debug!(row = row_number, column, value = text, "Coerced non-numeric amount to missing.");
    }
    parsed
}
