//! # Marquee Analytics
//!
//! Filtering and aggregation over the enriched release table.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** This crate never reads files. It depends only on
//!   `core-types`.
//! - **Stateless views:** Every aggregator is a free function from a
//!   `MovieTable` to a view struct. The input is never mutated, and an empty
//!   table is a valid input for all of them.
//!
//! ## Public API
//!
//! - `filter` / `FilterCriteria`: narrow a table by year, category and revenue.
//! - The aggregators in `aggregate`: summary, time series, distributions,
//!   seasonal and genre trend views, top/bottom N.
//! - `FilterOptions` / `RevenueThresholds`: the domains offered by the controls.
//! - `DashboardEngine`: filter + every view in one pass.

// Declare the modules that constitute this crate.
pub mod aggregate;
pub mod engine;
pub mod error;
pub mod options;
pub mod selection;
pub mod thresholds;
pub mod views;

// Re-export the key components to create a clean, public-facing API.
pub use aggregate::{
    genre_distribution, genre_revenue, genre_revenue_trend, rating_distribution,
    seasonal_analysis, summary_statistics, time_series, top_n_by_revenue, yearly_growth,
};
pub use engine::DashboardEngine;
pub use error::AnalyticsError;
pub use options::FilterOptions;
pub use selection::{filter, FilterCriteria};
pub use thresholds::{RevenueThreshold, RevenueThresholds, NO_MINIMUM};
pub use views::*;
