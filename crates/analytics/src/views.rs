use core_types::{Record, Season};
use rust_decimal::Decimal;
use serde::Serialize;

/// Label used for the year range and the modes when there is nothing to summarise.
pub const NOT_AVAILABLE: &str = "N/A";

/// Headline numbers for a (possibly filtered) table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub total_count: usize,
    /// "min - max" of the release years present.
    pub year_range_label: String,
    pub total_revenue: Decimal,
    pub mean_revenue: Decimal,
    pub median_revenue: Decimal,
    /// Most frequent genre; ties go to the one seen first.
    pub top_genre: String,
    /// Most frequent rating; ties go to the one seen first.
    pub top_rating: String,
}

impl SummaryStatistics {
    /// The summary of an empty table.
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            year_range_label: NOT_AVAILABLE.to_string(),
            total_revenue: Decimal::ZERO,
            mean_revenue: Decimal::ZERO,
            median_revenue: Decimal::ZERO,
            top_genre: NOT_AVAILABLE.to_string(),
            top_rating: NOT_AVAILABLE.to_string(),
        }
    }
}

impl Default for SummaryStatistics {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTotals {
    pub year: i32,
    pub total_gross_sum: Decimal,
    pub inflation_adjusted_sum: Decimal,
    pub title_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingCount {
    pub rating: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalStats {
    pub season: Season,
    /// `None` when no title released in the season has a total gross.
    pub mean_total_gross: Option<Decimal>,
    pub title_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreYearRevenue {
    pub year: i32,
    pub genre: String,
    pub total_gross_sum: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRevenue {
    pub genre: String,
    pub total_gross_sum: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyGrowth {
    pub year: i32,
    pub total_gross_sum: Decimal,
    pub growth_pct: Option<Decimal>,
}

/// Every view of the dashboard for one set of filter selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: SummaryStatistics,
    pub time_series: Vec<YearlyTotals>,
    pub yearly_growth: Vec<YearlyGrowth>,
    pub genre_distribution: Vec<GenreCount>,
    pub genre_revenue: Vec<GenreRevenue>,
    pub rating_distribution: Vec<RatingCount>,
    pub seasonal: Vec<SeasonalStats>,
    pub genre_trend: Vec<GenreYearRevenue>,
    pub top_titles: Vec<Record>,
    pub bottom_titles: Vec<Record>,
}
