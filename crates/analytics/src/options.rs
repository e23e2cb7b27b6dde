use crate::selection::FilterCriteria;
use crate::thresholds::RevenueThresholds;
use core_types::{MovieTable, YearRange};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;

/// The domains of every filter control, computed once from the full table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// `None` only for an empty dataset.
    pub years: Option<YearRange>,
    pub genres: Vec<String>,
    pub ratings: Vec<String>,
    pub revenue: RevenueThresholds,
}

impl FilterOptions {
    pub fn from_table(table: &MovieTable) -> Self {
        let years = table
            .year_bounds()
            .and_then(|(min, max)| YearRange::new(min, max).ok());
        let genres: BTreeSet<&str> = table.iter().map(|r| r.genre.as_str()).collect();
        let ratings: BTreeSet<&str> = table.iter().map(|r| r.mpaa_rating.as_str()).collect();

        Self {
            years,
            genres: genres.into_iter().map(str::to_owned).collect(),
            ratings: ratings.into_iter().map(str::to_owned).collect(),
            revenue: RevenueThresholds::from_table(table),
        }
    }

    /// The initial selections: the whole year span, every genre and rating,
    /// and no revenue floor.
    pub fn select_all(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.years.unwrap_or_else(YearRange::all),
            self.genres.iter().cloned(),
            self.ratings.iter().cloned(),
            Decimal::ZERO,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::Record;
    use rust_decimal_macros::dec;

    #[test]
    fn domains_are_sorted_and_distinct() {
        let date = |y| NaiveDate::from_ymd_opt(y, 3, 1).unwrap();
        let table = MovieTable::new(vec![
            Record::new("A", date(2001), "Drama", "R", Some(dec!(1)), None),
            Record::new("B", date(1995), "Comedy", "PG", Some(dec!(2)), None),
            Record::new("C", date(1999), "Drama", "G", Some(dec!(3)), None),
        ]);
        let options = FilterOptions::from_table(&table);

        assert_eq!(options.years, Some(YearRange::new(1995, 2001).unwrap()));
        assert_eq!(options.genres, vec!["Comedy", "Drama"]);
        assert_eq!(options.ratings, vec!["G", "PG", "R"]);

        let criteria = options.select_all();
        assert_eq!(criteria.genres.len(), 2);
        assert_eq!(criteria.ratings.len(), 3);
        assert_eq!(criteria.min_revenue, Decimal::ZERO);
    }

    #[test]
    fn empty_table_offers_nothing_to_select() {
        let options = FilterOptions::from_table(&MovieTable::empty());
        assert_eq!(options.years, None);
        assert!(options.select_all().selects_nothing());
    }
}
