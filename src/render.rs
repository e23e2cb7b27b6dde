use analytics::thresholds::group_thousands;
use analytics::{DashboardView, FilterOptions, SummaryStatistics};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use core_types::Record;
use rust_decimal::Decimal;

fn money(value: Decimal) -> String {
    format!("${}", group_thousands(value))
}

fn maybe_money(value: Option<Decimal>) -> String {
    value.map(money).unwrap_or_else(|| "-".to_string())
}

fn percent(value: Option<Decimal>) -> String {
    value
        .map(|v| format!("{:.1}%", v.round_dp(1)))
        .unwrap_or_else(|| "-".to_string())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn summary_table(summary: &SummaryStatistics) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec!["Total Movies".to_string(), summary.total_count.to_string()]);
    table.add_row(vec!["Date Range".to_string(), summary.year_range_label.clone()]);
    table.add_row(vec!["Total Revenue".to_string(), money(summary.total_revenue)]);
    table.add_row(vec!["Mean Revenue".to_string(), money(summary.mean_revenue)]);
    table.add_row(vec!["Median Revenue".to_string(), money(summary.median_revenue)]);
    table.add_row(vec!["Top Genre".to_string(), summary.top_genre.clone()]);
    table.add_row(vec!["Most Common Rating".to_string(), summary.top_rating.clone()]);
    table
}

pub fn options_table(options: &FilterOptions) -> Table {
    let mut table = new_table(vec!["Filter", "Choices"]);
    let years = options
        .years
        .map(|y| format!("{} - {}", y.min(), y.max()))
        .unwrap_or_else(|| "N/A".to_string());
    table.add_row(vec!["Years".to_string(), years]);
    table.add_row(vec!["Genres".to_string(), options.genres.join(", ")]);
    table.add_row(vec!["Ratings".to_string(), options.ratings.join(", ")]);
    table.add_row(vec![
        "Minimum Revenue".to_string(),
        options.revenue.labels().collect::<Vec<_>>().join("\n"),
    ]);
    table
}

fn titles_table(records: &[Record]) -> Table {
    let mut table = new_table(vec!["Title", "Year", "Genre", "Total Gross"]);
    for record in records {
        table.add_row(vec![
            record.title.clone(),
            record.year.to_string(),
            record.genre.clone(),
            maybe_money(record.total_gross),
        ]);
    }
    table
}

pub fn print_dashboard(view: &DashboardView) {
    println!("{}", summary_table(&view.summary));

    println!("\nBox Office Performance Over Time");
    let mut table = new_table(vec!["Year", "Total Gross", "Inflation Adjusted", "Titles", "Growth"]);
    for (totals, growth) in view.time_series.iter().zip(&view.yearly_growth) {
        table.add_row(vec![
            totals.year.to_string(),
            money(totals.total_gross_sum),
            money(totals.inflation_adjusted_sum),
            totals.title_count.to_string(),
            percent(growth.growth_pct),
        ]);
    }
    println!("{table}");

    println!("\nGenre Distribution");
    let mut table = new_table(vec!["Genre", "Titles"]);
    for genre in &view.genre_distribution {
        table.add_row(vec![genre.genre.clone(), genre.count.to_string()]);
    }
    println!("{table}");

    println!("\nGenre by Revenue");
    let mut table = new_table(vec!["Genre", "Total Gross"]);
    for genre in &view.genre_revenue {
        table.add_row(vec![genre.genre.clone(), money(genre.total_gross_sum)]);
    }
    println!("{table}");

    println!("\nMPAA Ratings");
    let mut table = new_table(vec!["Rating", "Titles"]);
    for rating in &view.rating_distribution {
        table.add_row(vec![rating.rating.clone(), rating.count.to_string()]);
    }
    println!("{table}");

    println!("\nSeasonal Releases");
    let mut table = new_table(vec!["Season", "Mean Total Gross", "Titles"]);
    for season in &view.seasonal {
        table.add_row(vec![
            season.season.to_string(),
            maybe_money(season.mean_total_gross),
            season.title_count.to_string(),
        ]);
    }
    println!("{table}");

    println!("\nGenre Revenue Trend");
    let mut table = new_table(vec!["Year", "Genre", "Total Gross"]);
    for point in &view.genre_trend {
        table.add_row(vec![
            point.year.to_string(),
            point.genre.clone(),
            money(point.total_gross_sum),
        ]);
    }
    println!("{table}");

    println!("\nTop Movies");
    println!("{}", titles_table(&view.top_titles));
    println!("\nBottom Movies");
    println!("{}", titles_table(&view.bottom_titles));
}
