use crate::calendar::{decade_of, decade_range_label};
use crate::enums::{Season, SuccessLevel};
use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// One released title together with every attribute derived from it.
///
/// The calendar fields are always derived from `release_date`; they are never
/// supplied independently. `success_level` and `yoy_growth` depend on the whole
/// corpus and are filled in by the loader once every row is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub title: String,
    pub release_date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub decade: i32,
    pub decade_range: String,
    pub season: Season,
    pub genre: String,
    pub mpaa_rating: String,
    /// `None` when the source cell was not a number.
    pub total_gross: Option<Decimal>,
    pub inflation_adjusted_gross: Option<Decimal>,
    /// `inflation_adjusted_gross / total_gross`. Unbounded; `None` when either
    /// side is missing or the divisor is zero.
    pub performance_ratio: Option<Decimal>,
    pub success_level: SuccessLevel,
    /// Percent change of this year's corpus total against the previous year present.
    pub yoy_growth: Option<Decimal>,
}

impl Record {
    /// Builds a record and derives its calendar fields and performance ratio.
    pub fn new(
        title: impl Into<String>,
        release_date: NaiveDate,
        genre: impl Into<String>,
        mpaa_rating: impl Into<String>,
        total_gross: Option<Decimal>,
        inflation_adjusted_gross: Option<Decimal>,
    ) -> Self {
        let year = release_date.year();
        let month = release_date.month();
        let performance_ratio = match (inflation_adjusted_gross, total_gross) {
            (Some(adjusted), Some(total)) => adjusted.checked_div(total),
            _ => None,
        };

        Self {
            title: title.into(),
            release_date,
            year,
            month,
            decade: decade_of(year),
            decade_range: decade_range_label(year),
            season: Season::from_month(month),
            genre: genre.into(),
            mpaa_rating: mpaa_rating.into(),
            total_gross,
            inflation_adjusted_gross,
            performance_ratio,
            success_level: SuccessLevel::BelowAverage,
            yoy_growth: None,
        }
    }
}

/// An ordered, read-only collection of records.
///
/// The loader builds one per source file; filters produce new tables and never
/// touch the one they were given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovieTable {
    records: Vec<Record>,
}

impl MovieTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total gross values that are present, in row order.
    pub fn gross_values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.records.iter().filter_map(|r| r.total_gross)
    }

    /// Smallest and largest release year, or `None` for an empty table.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}

impl FromIterator<Record> for MovieTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MovieTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// An inclusive `[min, max]` span of release years. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Result<Self, CoreError> {
        if min > max {
            return Err(CoreError::InvalidYearRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Every representable year.
    pub fn all() -> Self {
        Self {
            min: i32::MIN,
            max: i32::MAX,
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_record_derives_calendar_fields() {
        let record = Record::new(
            "Snow White and the Seven Dwarfs",
            date(1937, 12, 21),
            "Musical",
            "G",
            Some(dec!(184925485)),
            Some(dec!(5228953251)),
        );

        assert_eq!(record.year, 1937);
        assert_eq!(record.month, 12);
        assert_eq!(record.decade, 1930);
        assert_eq!(record.decade_range, "1930-1939");
        assert_eq!(record.season, Season::Winter);
    }

    #[test]
    fn performance_ratio_is_adjusted_over_total() {
        let record = Record::new("A", date(2010, 6, 1), "Comedy", "PG", Some(dec!(100)), Some(dec!(250)));
        assert_eq!(record.performance_ratio, Some(dec!(2.5)));
    }

    #[test]
    fn performance_ratio_is_missing_for_zero_or_missing_total() {
        let zero = Record::new("A", date(2010, 6, 1), "Comedy", "PG", Some(Decimal::ZERO), Some(dec!(10)));
        let missing = Record::new("B", date(2010, 6, 1), "Comedy", "PG", None, Some(dec!(10)));
        let no_adjusted = Record::new("C", date(2010, 6, 1), "Comedy", "PG", Some(dec!(10)), None);

        assert_eq!(zero.performance_ratio, None);
        assert_eq!(missing.performance_ratio, None);
        assert_eq!(no_adjusted.performance_ratio, None);
    }

    #[test]
    fn year_range_rejects_inverted_bounds() {
        assert_eq!(
            YearRange::new(2015, 2010),
            Err(CoreError::InvalidYearRange { min: 2015, max: 2010 })
        );
        let range = YearRange::new(2010, 2015).unwrap();
        assert!(range.contains(2010));
        assert!(range.contains(2015));
        assert!(!range.contains(2016));
    }

    #[test]
    fn year_bounds_of_empty_table_is_none() {
        assert_eq!(MovieTable::empty().year_bounds(), None);
    }
}
