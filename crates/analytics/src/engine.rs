use crate::aggregate::{
    genre_distribution, genre_revenue, genre_revenue_trend, rating_distribution,
    seasonal_analysis, summary_statistics, time_series, top_n_by_revenue, yearly_growth,
};
use crate::options::FilterOptions;
use crate::selection::{filter, FilterCriteria};
use crate::views::DashboardView;
use core_types::MovieTable;
use std::sync::Arc;
use tracing::debug;

/// Recomputes the dashboard for a set of filter selections.
///
/// The engine holds the enriched table read-only. Every call to `render`
/// filters it afresh and rebuilds all views; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct DashboardEngine {
    table: Arc<MovieTable>,
    top_n: usize,
}

impl DashboardEngine {
    pub fn new(table: Arc<MovieTable>, top_n: usize) -> Self {
        Self { table, top_n }
    }

    pub fn table(&self) -> &MovieTable {
        &self.table
    }

    /// Control domains, always taken from the unfiltered table.
    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_table(&self.table)
    }

    /// The main entry point: filter, then build every view from the result.
    pub fn render(&self, criteria: &FilterCriteria) -> DashboardView {
        let view = filter(&self.table, criteria);
        debug!(rows = view.len(), "Rendering dashboard views.");

        DashboardView {
            summary: summary_statistics(&view),
            time_series: time_series(&view),
            yearly_growth: yearly_growth(&view),
            genre_distribution: genre_distribution(&view),
            genre_revenue: genre_revenue(&view),
            rating_distribution: rating_distribution(&view),
            seasonal: seasonal_analysis(&view),
            genre_trend: genre_revenue_trend(&view),
            top_titles: top_n_by_revenue(&view, self.top_n, false),
            bottom_titles: top_n_by_revenue(&view, self.top_n, true),
        }
    }
}
