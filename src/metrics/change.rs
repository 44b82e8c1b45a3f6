//! Period-over-period change
//!
//! Percent change between a month and the month before, as shown on the
//! dashboard summary cards.

use serde_json::Value;

use super::aggregate::sum_field;
use crate::models::metrics::{ChangeDirection, ChangeResult, PeriodComparison};
use crate::models::record::RecordSource;
use crate::trends::monthly::filter_by_bucket;
use crate::trends::BucketKey;

/// Rounded percent change from `previous` to `current`.
///
/// A zero previous value always reports 100% up, even when the current
/// value is zero too. Cards have always displayed it that way.
pub fn calculate_change(current: f64, previous: f64) -> ChangeResult {
    if previous == 0.0 {
        return ChangeResult::new(100.0, ChangeDirection::Up);
    }
    if current == previous {
        return ChangeResult::new(0.0, ChangeDirection::Neutral);
    }

    let percent = (((current - previous) / previous).abs() * 100.0).round();
    let direction = if current > previous {
        ChangeDirection::Up
    } else {
        ChangeDirection::Down
    };

    ChangeResult::new(percent, direction)
}

/// Total of `field` in `bucket` against the month before
pub fn compare_periods(
    records: &[Value],
    source: &RecordSource,
    field: &str,
    bucket: BucketKey,
) -> PeriodComparison {
    let previous_bucket = bucket.previous();

    let current = sum_field(filter_by_bucket(records, &bucket, source), field);
    let previous = sum_field(filter_by_bucket(records, &previous_bucket, source), field);

    PeriodComparison {
        bucket,
        previous_bucket,
        current,
        previous,
        change: calculate_change(current, previous),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_previous_is_full_increase() {
        assert_eq!(
            calculate_change(0.0, 0.0),
            ChangeResult::new(100.0, ChangeDirection::Up)
        );
        assert_eq!(
            calculate_change(42.0, 0.0),
            ChangeResult::new(100.0, ChangeDirection::Up)
        );
    }

    #[test]
    fn test_increase_and_decrease() {
        assert_eq!(
            calculate_change(150.0, 100.0),
            ChangeResult::new(50.0, ChangeDirection::Up)
        );
        assert_eq!(
            calculate_change(50.0, 100.0),
            ChangeResult::new(50.0, ChangeDirection::Down)
        );
    }

    #[test]
    fn test_unchanged_is_neutral() {
        assert_eq!(
            calculate_change(100.0, 100.0),
            ChangeResult::new(0.0, ChangeDirection::Neutral)
        );
    }

    #[test]
    fn test_percent_is_rounded() {
        let change = calculate_change(1.0, 3.0);
        assert_eq!(change.percent, 67.0);
        assert_eq!(change.direction, ChangeDirection::Down);

        let change = calculate_change(0.0, 80.0);
        assert_eq!(change.percent, 100.0);
        assert_eq!(change.direction, ChangeDirection::Down);
    }

    #[test]
    fn test_negative_previous_stays_non_negative() {
        let change = calculate_change(-50.0, -100.0);
        assert_eq!(change.percent, 50.0);
        assert_eq!(change.direction, ChangeDirection::Up);
    }

    #[test]
    fn test_compare_periods_across_year() {
        let payments = vec![
            json!({"_id": "2024-01-03", "totalAmount": 150}),
            json!({"_id": "2024-01-20", "totalAmount": 150}),
            json!({"_id": "2023-12-11", "totalAmount": 200}),
            json!({"_id": "2023-11-11", "totalAmount": 999}),
        ];

        let bucket: BucketKey = "2024-01".parse().unwrap();
        let summary = compare_periods(&payments, &RecordSource::id(), "totalAmount", bucket);

        assert_eq!(summary.previous_bucket.to_string(), "2023-12");
        assert_eq!(summary.current, 300.0);
        assert_eq!(summary.previous, 200.0);
        assert_eq!(summary.change, ChangeResult::new(50.0, ChangeDirection::Up));
    }

    #[test]
    fn test_compare_periods_without_history() {
        let bucket: BucketKey = "2024-05".parse().unwrap();
        let summary = compare_periods(&[], &RecordSource::id(), "count", bucket);
        assert_eq!(summary.current, 0.0);
        assert_eq!(summary.change.direction, ChangeDirection::Up);
        assert_eq!(summary.change.percent, 100.0);
    }
}
