use serde::{Deserialize, Serialize};

use stockcast_core::{EngineError, EngineResult, ItemId, Period};
use stockcast_records::RecordStore;

/// Point estimate of near-term demand for one item and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub item_id: ItemId,
    pub period: Period,
    /// Trailing moving average, rounded half-away-from-zero to 2 decimals.
    pub predicted_demand: f64,
    /// Lookback window bound to the period (daily→7, weekly→4, monthly→3).
    pub window_size: usize,
}

/// Forecast demand as a trailing moving average of the item's most recent
/// sales.
///
/// The estimate is the arithmetic mean of the last `period.window_size()`
/// quantities ordered by time; an item with less history than the window is
/// averaged over whatever is present (no padding). An item with no sales at
/// all fails with `ItemNotFound`.
///
/// Deliberately simple: not seasonal, not trend-aware. That approximation is
/// a documented limitation of the estimator, not a bug.
pub fn forecast(
    store: &RecordStore,
    item_id: &ItemId,
    period: Period,
) -> EngineResult<ForecastResult> {
    let series = store.sales_for(item_id);
    if series.is_empty() {
        return Err(EngineError::item_not_found(item_id.as_str()));
    }

    let window = period.window_size();
    let tail = &series[series.len().saturating_sub(window)..];
    let mean = tail.iter().map(|r| r.quantity).sum::<f64>() / tail.len() as f64;
    let predicted = round2(mean);

    tracing::debug!(
        item_id = %item_id,
        period = %period,
        observations = tail.len(),
        predicted_demand = predicted,
        "demand forecast"
    );

    Ok(ForecastResult {
        item_id: item_id.clone(),
        period,
        predicted_demand: predicted,
        window_size: window,
    })
}

/// Round half away from zero to 2 decimal places.
///
/// `f64::round` rounds half away from zero, which is the convention this
/// engine commits to at exact `.xx5` boundaries.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use stockcast_records::SalesRecord;

    use super::*;

    fn series(item: &str, quantities: &[f64]) -> Vec<SalesRecord> {
        quantities
            .iter()
            .enumerate()
            .map(|(i, &quantity)| SalesRecord {
                item_id: ItemId::new(item),
                timestamp: DateTime::from_timestamp(1_700_000_000 + i as i64 * 86_400, 0).unwrap(),
                quantity,
            })
            .collect()
    }

    fn store_with(quantities: &[f64]) -> RecordStore {
        RecordStore::new(series("A", quantities), vec![])
    }

    #[test]
    fn daily_forecast_averages_last_seven() {
        let store = store_with(&[10.0, 12.0, 9.0, 11.0, 10.0, 13.0, 9.0]);
        let result = forecast(&store, &ItemId::new("A"), Period::Daily).unwrap();

        assert_eq!(result.predicted_demand, 10.57);
        assert_eq!(result.window_size, 7);
        assert_eq!(result.period, Period::Daily);
    }

    #[test]
    fn window_takes_most_recent_records() {
        // Older history beyond the window must not move the estimate.
        let store = store_with(&[100.0, 100.0, 10.0, 12.0, 9.0, 11.0, 10.0, 13.0, 9.0]);
        let result = forecast(&store, &ItemId::new("A"), Period::Daily).unwrap();
        assert_eq!(result.predicted_demand, 10.57);
    }

    #[test]
    fn weekly_forecast_uses_window_of_four() {
        let store = store_with(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let result = forecast(&store, &ItemId::new("A"), Period::Weekly).unwrap();
        // mean of [3, 4, 5, 6]
        assert_eq!(result.predicted_demand, 4.5);
        assert_eq!(result.window_size, 4);
    }

    #[test]
    fn monthly_forecast_uses_window_of_three() {
        let store = store_with(&[1.0, 2.0, 3.0, 4.0]);
        let result = forecast(&store, &ItemId::new("A"), Period::Monthly).unwrap();
        // mean of [2, 3, 4]
        assert_eq!(result.predicted_demand, 3.0);
        assert_eq!(result.window_size, 3);
    }

    #[test]
    fn short_history_averages_what_is_present() {
        let store = store_with(&[4.0, 8.0]);
        let result = forecast(&store, &ItemId::new("A"), Period::Daily).unwrap();
        assert_eq!(result.predicted_demand, 6.0);
        // The reported window stays bound to the period.
        assert_eq!(result.window_size, 7);
    }

    #[test]
    fn unknown_item_fails_with_item_not_found_for_every_period() {
        let store = store_with(&[1.0]);
        for period in [Period::Daily, Period::Weekly, Period::Monthly] {
            let err = forecast(&store, &ItemId::new("ZZZ"), period).unwrap_err();
            match err {
                EngineError::ItemNotFound(id) => assert_eq!(id, "ZZZ"),
                _ => panic!("Expected ItemNotFound for unknown item"),
            }
        }
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 10.005 would round down under half-to-even.
        assert_eq!(round2(10.005), 10.01);
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(2.675), 2.68);
    }

    #[cfg(test)]
    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the forecast is deterministic and equals the rounded
            /// mean of the trailing window.
            #[test]
            fn forecast_matches_rounded_window_mean(
                quantities in proptest::collection::vec(0.0f64..1000.0, 1..30)
            ) {
                let store = store_with(&quantities);
                let item = ItemId::new("A");

                for period in [Period::Daily, Period::Weekly, Period::Monthly] {
                    let window = period.window_size();
                    let tail: Vec<f64> = quantities
                        .iter()
                        .rev()
                        .take(window)
                        .copied()
                        .collect();
                    let expected = round2(tail.iter().sum::<f64>() / tail.len() as f64);

                    let first = forecast(&store, &item, period).unwrap();
                    let second = forecast(&store, &item, period).unwrap();

                    prop_assert_eq!(first.predicted_demand, expected);
                    prop_assert_eq!(first, second);
                }
            }

            /// Property: predicted demand of non-negative history is never
            /// negative.
            #[test]
            fn forecast_of_non_negative_history_is_non_negative(
                quantities in proptest::collection::vec(0.0f64..1000.0, 1..30)
            ) {
                let store = store_with(&quantities);
                let result = forecast(&store, &ItemId::new("A"), Period::Daily).unwrap();
                prop_assert!(result.predicted_demand >= 0.0);
            }
        }
    }
}
