use core_types::{MovieTable, Record, YearRange};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// The user's current control selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub years: YearRange,
    pub genres: BTreeSet<String>,
    pub ratings: BTreeSet<String>,
    /// Inclusive lower bound on total gross.
    pub min_revenue: Decimal,
}

impl FilterCriteria {
    pub fn new<G, R>(years: YearRange, genres: G, ratings: R, min_revenue: Decimal) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            years,
            genres: genres.into_iter().map(Into::into).collect(),
            ratings: ratings.into_iter().map(Into::into).collect(),
            min_revenue,
        }
    }

    /// True when a category group has nothing selected, which empties the view.
    pub fn selects_nothing(&self) -> bool {
        self.genres.is_empty() || self.ratings.is_empty()
    }

    /// Whether a single record passes every filter.
    ///
    /// A record without a total gross never passes: it cannot be compared
    /// against the revenue floor, not even a floor of zero.
    pub fn matches(&self, record: &Record) -> bool {
        self.years.contains(record.year)
            && self.genres.contains(&record.genre)
            && self.ratings.contains(&record.mpaa_rating)
            && record.total_gross.is_some_and(|gross| gross >= self.min_revenue)
    }
}

/// Narrows `table` to the rows matching `criteria`, keeping their order.
///
/// An empty genre or rating selection yields an empty table regardless of the
/// other filters.
pub fn filter(table: &MovieTable, criteria: &FilterCriteria) -> MovieTable {
    if criteria.selects_nothing() {
        warn!(
            genres = criteria.genres.len(),
            ratings = criteria.ratings.len(),
            "A category group has nothing selected; the view is empty."
        );
        return MovieTable::empty();
    }

    let filtered: MovieTable = table
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();
    debug!(input = table.len(), output = filtered.len(), "Filter applied.");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(title: &str, genre: &str, rating: &str, year: i32, gross: Option<Decimal>) -> Record {
        let date = NaiveDate::from_ymd_opt(year, 5, 1).unwrap();
        Record::new(title, date, genre, rating, gross, gross)
    }

    fn sample() -> MovieTable {
        MovieTable::new(vec![
            record("A", "Comedy", "PG", 2010, Some(dec!(100))),
            record("B", "Drama", "R", 2010, Some(dec!(300))),
            record("C", "Comedy", "PG", 2015, Some(dec!(50))),
            record("D", "Comedy", "PG", 2012, None),
        ])
    }

    fn everything() -> FilterCriteria {
        FilterCriteria::new(YearRange::all(), ["Comedy", "Drama"], ["PG", "R"], Decimal::ZERO)
    }

    #[test]
    fn keeps_row_order() {
        let titles: Vec<String> = filter(&sample(), &everything())
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_gross_never_passes() {
        let filtered = filter(&sample(), &everything());
        assert!(filtered.iter().all(|r| r.title != "D"));
    }

    #[test]
    fn revenue_floor_is_inclusive() {
        let criteria = FilterCriteria {
            min_revenue: dec!(100),
            ..everything()
        };
        let titles: Vec<String> = filter(&sample(), &criteria)
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn empty_genre_or_rating_selection_empties_the_view() {
        let no_genres = FilterCriteria {
            genres: BTreeSet::new(),
            ..everything()
        };
        let no_ratings = FilterCriteria {
            ratings: BTreeSet::new(),
            ..everything()
        };
        assert!(filter(&sample(), &no_genres).is_empty());
        assert!(filter(&sample(), &no_ratings).is_empty());
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let criteria = FilterCriteria::new(
            YearRange::new(2010, 2012).unwrap(),
            ["Comedy"],
            ["PG", "R"],
            dec!(10),
        );
        let once = filter(&sample(), &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice);
    }
}
