use analytics::{
    filter, genre_distribution, summary_statistics, time_series, top_n_by_revenue,
    DashboardEngine, FilterCriteria, FilterOptions, SummaryStatistics,
};
use chrono::Datelike;
use core_types::{MovieTable, Season, YearRange};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;
use std::sync::Arc;

const HEADER: &str =
    "movie_title,release_date,genre,mpaa_rating,total_gross,inflation_adjusted_gross\n";

fn load(body: &str) -> MovieTable {
    dataset::load_from_bytes(format!("{HEADER}{body}")).expect("fixture loads")
}

fn three_titles() -> MovieTable {
    load(
        "Laughs,2010-03-01,Comedy,PG,100,150\n\
         Tears,2010-07-01,Drama,PG-13,300,420\n\
         More Laughs,2015-11-01,Comedy,PG,50,55\n",
    )
}

fn all_of(table: &MovieTable) -> FilterCriteria {
    FilterOptions::from_table(table).select_all()
}

#[test]
fn genre_distribution_counts_titles() {
    let counts: Vec<(String, usize)> = genre_distribution(&three_titles())
        .into_iter()
        .map(|g| (g.genre, g.count))
        .collect();
    assert_eq!(counts, vec![("Comedy".to_string(), 2), ("Drama".to_string(), 1)]);
}

#[test]
fn time_series_sums_each_year() {
    let series = time_series(&three_titles());

    assert_eq!(series.len(), 2);
    assert_eq!((series[0].year, series[0].total_gross_sum, series[0].title_count), (2010, dec!(400), 2));
    assert_eq!(series[0].inflation_adjusted_sum, dec!(570));
    assert_eq!((series[1].year, series[1].total_gross_sum, series[1].title_count), (2015, dec!(50), 1));
}

#[test]
fn top_one_is_the_drama() {
    let top = top_n_by_revenue(&three_titles(), 1, false);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].title, "Tears");
}

#[test]
fn filtering_to_comedy_in_2010_keeps_the_first_row() {
    let table = three_titles();
    let criteria = FilterCriteria {
        years: YearRange::new(2010, 2010).unwrap(),
        genres: ["Comedy".to_string()].into(),
        ..all_of(&table)
    };
    let filtered = filter(&table, &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records()[0], table.records()[0]);
}

#[test]
fn empty_selection_yields_no_rows() {
    let table = three_titles();
    let no_genres = FilterCriteria {
        genres: Default::default(),
        ..all_of(&table)
    };
    let no_ratings = FilterCriteria {
        ratings: Default::default(),
        ..all_of(&table)
    };
    assert_eq!(filter(&table, &no_genres).len(), 0);
    assert_eq!(filter(&table, &no_ratings).len(), 0);
}

#[test]
fn summary_of_empty_table_uses_defaults() {
    let summary = summary_statistics(&MovieTable::empty());
    assert_eq!(summary, SummaryStatistics::empty());
    assert_eq!(summary.year_range_label, "N/A");
    assert_eq!(summary.top_genre, "N/A");
    assert_eq!(summary.total_revenue, Decimal::ZERO);
}

#[test]
fn time_series_total_matches_present_grosses() {
    let table = load(
        "A,1995-01-01,Comedy,PG,100,1\n\
         B,1995-06-01,Drama,R,not reported,2\n\
         C,1999-09-01,,G,250,3\n\
         D,2001-12-24,Adventure,,,4\n",
    );
    let series_total: Decimal = time_series(&table).iter().map(|y| y.total_gross_sum).sum();
    let present_total: Decimal = table.gross_values().sum();
    assert_eq!(series_total, present_total);
    assert_eq!(series_total, dec!(350));
}

#[test]
fn loader_derives_calendar_fields_for_every_row() {
    let table = load(
        "Jan,2000-01-15,Comedy,PG,1,1\n\
         Apr,2003-04-15,Comedy,PG,1,1\n\
         Jul,2008-07-15,Comedy,PG,1,1\n\
         Oct,2011-10-15,Comedy,PG,1,1\n",
    );
    for record in table.iter() {
        assert_eq!(record.year, record.release_date.year());
        assert_eq!(record.season, Season::from_month(record.release_date.month()));
        assert_eq!(record.decade_range, format!("{}-{}", record.decade, record.decade + 9));
    }
}

#[test]
fn success_level_is_not_recomputed_after_filtering() {
    let table = three_titles();
    let criteria = FilterCriteria {
        genres: ["Comedy".to_string()].into(),
        ..all_of(&table)
    };
    let filtered = filter(&table, &criteria);
    // Corpus mean is 150, so both comedies stay below average even though
    // "Laughs" is above the mean of the filtered view.
    assert!(filtered.iter().all(|r| r.success_level.as_str() == "Below Average"));
}

#[test]
fn engine_renders_every_view_from_one_selection() {
    let table = Arc::new(three_titles());
    let engine = DashboardEngine::new(Arc::clone(&table), 2);
    let criteria = engine.options().select_all();
    let view = engine.render(&criteria);

    assert_eq!(view.summary.total_count, 3);
    assert_eq!(view.summary.year_range_label, "2010 - 2015");
    assert_eq!(view.summary.total_revenue, dec!(450));
    assert_eq!(view.summary.top_genre, "Comedy");
    assert_eq!(view.time_series.len(), 2);
    assert_eq!(view.top_titles.len(), 2);
    assert_eq!(view.bottom_titles[0].title, "More Laughs");
    assert_eq!(view.seasonal.len(), 3);
    // The engine never touches the table it was given.
    assert_eq!(engine.table(), table.as_ref());
}

#[test]
fn engine_renders_empty_view_without_failing() {
    let engine = DashboardEngine::new(Arc::new(three_titles()), 5);
    let criteria = FilterCriteria {
        min_revenue: dec!(1000000),
        ..engine.options().select_all()
    };
    let view = engine.render(&criteria);
    assert_eq!(view.summary, SummaryStatistics::empty());
    assert!(view.time_series.is_empty());
    assert!(view.top_titles.is_empty());
}

#[test]
fn loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{HEADER}Bambi,1942-08-13,Drama,G,102797000,1092393000\n").unwrap();

    let table = dataset::load_and_process(file.path()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].decade_range, "1940-1949");
}
