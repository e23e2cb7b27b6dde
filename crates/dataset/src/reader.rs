use crate::error::LoadError;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

pub const TITLE: &str = "movie_title";
pub const RELEASE_DATE: &str = "release_date";
pub const GENRE: &str = "genre";
pub const MPAA_RATING: &str = "mpaa_rating";
pub const TOTAL_GROSS: &str = "total_gross";
pub const INFLATION_ADJUSTED_GROSS: &str = "inflation_adjusted_gross";

/// Columns the source must carry. Anything else in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    TITLE,
    RELEASE_DATE,
    GENRE,
    MPAA_RATING,
    TOTAL_GROSS,
    INFLATION_ADJUSTED_GROSS,
];

/// One source row exactly as it appeared in the file, before any coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    pub mpaa_rating: Option<String>,
    pub total_gross: Option<String>,
    pub inflation_adjusted_gross: Option<String>,
}

/// Reads a delimited file with a header row into raw rows.
pub fn read_path(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let df = CsvReader::from_path(path)?
        .has_header(true)
        // Zero inference rows keeps every column as text; coercion is ours to do.
        .infer_schema(Some(0))
        .finish()?;
    rows_from_frame(&df)
}

/// Same as [`read_path`] for an in-memory source.
pub fn read_bytes(bytes: Vec<u8>) -> Result<Vec<RawRow>, LoadError> {
    let df = CsvReader::new(Cursor::new(bytes))
        .has_header(true)
        .infer_schema(Some(0))
        .finish()?;
    rows_from_frame(&df)
}

fn rows_from_frame(df: &DataFrame) -> Result<Vec<RawRow>, LoadError> {
    let present = df.get_column_names();
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|name| !present.contains(*name)) {
        return Err(LoadError::MissingColumn(missing.to_string()));
    }

    let titles = text_column(df, TITLE)?;
    let dates = text_column(df, RELEASE_DATE)?;
    let genres = text_column(df, GENRE)?;
    let ratings = text_column(df, MPAA_RATING)?;
    let totals = text_column(df, TOTAL_GROSS)?;
    let adjusted = text_column(df, INFLATION_ADJUSTED_GROSS)?;

    let rows = (0..df.height())
        .map(|i| RawRow {
            title: titles[i].clone(),
            release_date: dates[i].clone(),
            genre: genres[i].clone(),
            mpaa_rating: ratings[i].clone(),
            total_gross: totals[i].clone(),
            inflation_adjusted_gross: adjusted[i].clone(),
        })
        .collect();

    Ok(rows)
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoadError> {
    let series = df.column(name)?.cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_owned))
        .collect();
    Ok(values)
}
