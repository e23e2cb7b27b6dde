//! Pure calendar derivations shared by the loader and the views.

/// Floors a year to the start of its decade (1994 -> 1990).
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// The "YYYY-YYYY" label for the decade containing `year` (1994 -> "1990-1999").
pub fn decade_range_label(year: i32) -> String {
    let decade = decade_of(year);
    format!("{}-{}", decade, decade + 9)
}
