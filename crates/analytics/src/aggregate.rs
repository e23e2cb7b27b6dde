//! Pure views over a (possibly filtered) table.
//!
//! None of these mutate their input and all of them accept an empty table.
//! Missing monetary values are left out of sums and means; they are never
//! counted as zero.

use crate::views::{
    GenreCount, GenreRevenue, GenreYearRevenue, RatingCount, SeasonalStats, SummaryStatistics,
    YearlyGrowth, YearlyTotals,
};
use core_types::stats::{mean, percent_change, total};
use core_types::{MovieTable, Record, Season};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::{BTreeMap, HashMap};

pub fn summary_statistics(table: &MovieTable) -> SummaryStatistics {
    let Some((first_year, last_year)) = table.year_bounds() else {
        return SummaryStatistics::empty();
    };

    let mut grosses: Vec<Decimal> = table.gross_values().collect();
    let total_revenue = total(grosses.iter().copied());
    let mean_revenue = mean(grosses.iter().copied()).unwrap_or_default();
    grosses.sort();
    let median_revenue = quantile(&grosses, Decimal::new(5, 1)).unwrap_or_default();

    SummaryStatistics {
        total_count: table.len(),
        year_range_label: format!("{first_year} - {last_year}"),
        total_revenue,
        mean_revenue,
        median_revenue,
        top_genre: mode(table.iter().map(|r| r.genre.as_str())),
        top_rating: mode(table.iter().map(|r| r.mpaa_rating.as_str())),
    }
}

/// Per-year totals in ascending year order.
pub fn time_series(table: &MovieTable) -> Vec<YearlyTotals> {
    let mut by_year: BTreeMap<i32, YearlyTotals> = BTreeMap::new();
    for record in table {
        let entry = by_year.entry(record.year).or_insert_with(|| YearlyTotals {
            year: record.year,
            total_gross_sum: Decimal::ZERO,
            inflation_adjusted_sum: Decimal::ZERO,
            title_count: 0,
        });
        entry.total_gross_sum = entry
            .total_gross_sum
            .saturating_add(record.total_gross.unwrap_or_default());
        entry.inflation_adjusted_sum = entry
            .inflation_adjusted_sum
            .saturating_add(record.inflation_adjusted_gross.unwrap_or_default());
        entry.title_count += has_title(record) as usize;
    }
    by_year.into_values().collect()
}

/// Percent change of each year's total against the previous year present.
pub fn yearly_growth(table: &MovieTable) -> Vec<YearlyGrowth> {
    let mut previous: Option<Decimal> = None;
    time_series(table)
        .into_iter()
        .map(|totals| {
            let growth_pct = previous.and_then(|prev| percent_change(prev, totals.total_gross_sum));
            previous = Some(totals.total_gross_sum);
            YearlyGrowth {
                year: totals.year,
                total_gross_sum: totals.total_gross_sum,
                growth_pct,
            }
        })
        .collect()
}

/// Titles per genre, most frequent first.
pub fn genre_distribution(table: &MovieTable) -> Vec<GenreCount> {
    value_counts(table.iter().map(|r| r.genre.as_str()))
        .into_iter()
        .map(|(genre, count)| GenreCount { genre, count })
        .collect()
}

/// Titles per MPAA rating, most frequent first.
pub fn rating_distribution(table: &MovieTable) -> Vec<RatingCount> {
    value_counts(table.iter().map(|r| r.mpaa_rating.as_str()))
        .into_iter()
        .map(|(rating, count)| RatingCount { rating, count })
        .collect()
}

/// Mean gross and title count for each season present, Winter first.
pub fn seasonal_analysis(table: &MovieTable) -> Vec<SeasonalStats> {
    let mut by_season: BTreeMap<Season, Vec<&Record>> = BTreeMap::new();
    for record in table {
        by_season.entry(record.season).or_default().push(record);
    }

    by_season
        .into_iter()
        .map(|(season, records)| SeasonalStats {
            season,
            mean_total_gross: mean(records.iter().filter_map(|r| r.total_gross)),
            title_count: records.iter().filter(|r| has_title(r)).count(),
        })
        .collect()
}

/// Total gross per (year, genre) pair, ordered by year then genre.
pub fn genre_revenue_trend(table: &MovieTable) -> Vec<GenreYearRevenue> {
    let mut by_pair: BTreeMap<(i32, &str), Decimal> = BTreeMap::new();
    for record in table {
        let sum = by_pair.entry((record.year, record.genre.as_str())).or_default();
        *sum = sum.saturating_add(record.total_gross.unwrap_or_default());
    }

    by_pair
        .into_iter()
        .map(|((year, genre), total_gross_sum)| GenreYearRevenue {
            year,
            genre: genre.to_string(),
            total_gross_sum,
        })
        .collect()
}

/// Total gross per genre, highest first.
pub fn genre_revenue(table: &MovieTable) -> Vec<GenreRevenue> {
    let mut order: Vec<GenreRevenue> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in table {
        let slot = *index.entry(record.genre.as_str()).or_insert_with(|| {
            order.push(GenreRevenue {
                genre: record.genre.clone(),
                total_gross_sum: Decimal::ZERO,
            });
            order.len() - 1
        });
        let sum = &mut order[slot].total_gross_sum;
        *sum = sum.saturating_add(record.total_gross.unwrap_or_default());
    }
    order.sort_by(|a, b| b.total_gross_sum.cmp(&a.total_gross_sum));
    order
}

/// Up to `n` records ordered by total gross.
///
/// Equal grosses keep their table order. Records without a total gross come
/// last whichever direction is asked for.
pub fn top_n_by_revenue(table: &MovieTable, n: usize, ascending: bool) -> Vec<Record> {
    let mut ranked: Vec<&Record> = table.iter().collect();
    ranked.sort_by(|a, b| match (a.total_gross, b.total_gross) {
        (Some(x), Some(y)) if ascending => x.cmp(&y),
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    ranked.into_iter().take(n).cloned().collect()
}

/// Linear-interpolated quantile of already sorted values; `q` in `[0, 1]`.
pub(crate) fn quantile(sorted: &[Decimal], q: Decimal) -> Option<Decimal> {
    let last = sorted.len().checked_sub(1)?;
    let position = q.checked_mul(Decimal::from(last))?;
    let lower = position.floor();
    let fraction = position - lower;
    let lower_index = lower.to_usize()?;
    let upper_index = (lower_index + 1).min(last);
    let low = sorted[lower_index];
    let high = sorted[upper_index];
    let offset = high.checked_sub(low)?.checked_mul(fraction)?;
    low.checked_add(offset)
}

/// Counts occurrences, most frequent first; ties keep first-seen order.
fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for value in values {
        match index.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn mode<'a>(values: impl Iterator<Item = &'a str>) -> String {
    value_counts(values)
        .into_iter()
        .next()
        .map(|(value, _)| value)
        .unwrap_or_else(|| crate::views::NOT_AVAILABLE.to_string())
}

/// Mirrors a non-null count: only a title absent from the source is skipped.
fn has_title(record: &Record) -> bool {
    !record.title.is_empty()
}
