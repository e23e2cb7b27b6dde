use crate::aggregate::quantile;
use crate::error::AnalyticsError;
use core_types::MovieTable;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

pub const NO_MINIMUM: &str = "No Minimum";

const TIERS: [(&str, i64); 4] = [
    ("25th Percentile", 25),
    ("Median", 50),
    ("75th Percentile", 75),
    ("90th Percentile", 90),
];

/// One entry of the minimum-revenue selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueThreshold {
    pub label: String,
    pub value: Decimal,
}

/// The minimum-revenue choices offered to the user: no minimum, then the
/// quartiles and 90th percentile of total gross, truncated to whole units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueThresholds {
    options: Vec<RevenueThreshold>,
}

impl RevenueThresholds {
    /// Computes the choices from the grosses present in `table`. Intended to be
    /// called on the full table so the choices do not move as filters change.
    pub fn from_table(table: &MovieTable) -> Self {
        let mut grosses: Vec<Decimal> = table.gross_values().collect();
        grosses.sort();

        let mut options = vec![RevenueThreshold {
            label: NO_MINIMUM.to_string(),
            value: Decimal::ZERO,
        }];
        if grosses.is_empty() {
            return Self { options };
        }

        for (name, percentile) in TIERS {
            if let Some(value) = quantile(&grosses, Decimal::new(percentile, 2)) {
                let value = value.trunc();
                options.push(RevenueThreshold {
                    label: format!("{name} (${})", group_thousands(value)),
                    value,
                });
            }
        }
        Self { options }
    }

    pub fn options(&self) -> &[RevenueThreshold] {
        &self.options
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.label.as_str())
    }

    /// Maps a selector label back to its amount.
    pub fn resolve(&self, label: &str) -> Result<Decimal, AnalyticsError> {
        self.options
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.value)
            .ok_or_else(|| AnalyticsError::UnknownRevenueTier(label.to_string()))
    }
}

/// Formats the integer part of `value` with comma thousands separators.
pub fn group_thousands(value: Decimal) -> String {
    let whole = value.trunc().to_i128().unwrap_or_default();
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::Record;
    use rust_decimal_macros::dec;

    fn table(grosses: &[Option<Decimal>]) -> MovieTable {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        grosses
            .iter()
            .map(|g| Record::new("T", date, "Comedy", "PG", *g, *g))
            .collect()
    }

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(dec!(0)), "0");
        assert_eq!(group_thousands(dec!(999)), "999");
        assert_eq!(group_thousands(dec!(1000)), "1,000");
        assert_eq!(group_thousands(dec!(184925485.9)), "184,925,485");
        assert_eq!(group_thousands(dec!(-1234567)), "-1,234,567");
    }

    #[test]
    fn thresholds_follow_percentiles() {
        let grosses = [Some(dec!(1000)), Some(dec!(2000)), Some(dec!(3000)), Some(dec!(4000)), None];
        let thresholds = RevenueThresholds::from_table(&table(&grosses));
        let labels: Vec<&str> = thresholds.labels().collect();

        assert_eq!(
            labels,
            vec![
                "No Minimum",
                "25th Percentile ($1,750)",
                "Median ($2,500)",
                "75th Percentile ($3,250)",
                "90th Percentile ($3,700)",
            ]
        );
        assert_eq!(thresholds.resolve("Median ($2,500)"), Ok(dec!(2500)));
        assert_eq!(thresholds.resolve(NO_MINIMUM), Ok(Decimal::ZERO));
    }

    #[test]
    fn unknown_label_is_an_error() {
        let thresholds = RevenueThresholds::from_table(&table(&[Some(dec!(5))]));
        assert_eq!(
            thresholds.resolve("Top Decile"),
            Err(AnalyticsError::UnknownRevenueTier("Top Decile".to_string()))
        );
    }

    #[test]
    fn no_revenue_means_only_no_minimum() {
        let thresholds = RevenueThresholds::from_table(&table(&[None, None]));
        assert_eq!(thresholds.labels().collect::<Vec<_>>(), vec![NO_MINIMUM]);
    }
}
