//! Small numeric helpers over optional Decimals, shared by the loader and the views.
//! Missing values are skipped, never treated as zero. None of these panic on
//! overflow: totals saturate, ratios become missing.

use rust_decimal::Decimal;

/// Sum of the values, clamped to `Decimal::MAX` / `Decimal::MIN` on overflow.
pub fn total<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

/// Arithmetic mean of the values, or `None` when there are none.
///
/// Falls back to a running mean when the plain sum would overflow.
pub fn mean<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let values: Vec<Decimal> = values.into_iter().collect();
    if values.is_empty() {
        return None;
    }
    match values
        .iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))
    {
        Some(sum) => sum.checked_div(Decimal::from(values.len())),
        None => running_mean(&values),
    }
}

fn running_mean(values: &[Decimal]) -> Option<Decimal> {
    let mut current = Decimal::ZERO;
    for (i, value) in values.iter().enumerate() {
        let step = value
            .checked_sub(current)?
            .checked_div(Decimal::from(i + 1))?;
        current = current.checked_add(step)?;
    }
    Some(current)
}

/// `(current - previous) / previous * 100`, or `None` when `previous` is zero
/// or the result does not fit in a Decimal.
pub fn percent_change(previous: Decimal, current: Decimal) -> Option<Decimal> {
    current
        .checked_sub(previous)?
        .checked_div(previous)?
        .checked_mul(Decimal::ONE_HUNDRED)
}
