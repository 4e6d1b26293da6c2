use crate::insights::{action_count, metric_f64, metric_i64};
use crate::models::{Insight, TrendPoint};
use chrono::NaiveDate;

/// Turn raw daily rows into a date-ordered trend with running totals.
///
/// Rows without a parsable `date_start` are dropped; malformed metric values
/// coerce to zero. The sort is stable, so duplicate dates keep their input
/// relative order.
pub fn build_trend(daily: &[Insight], action_type: &str) -> Vec<TrendPoint> {
    let mut rows: Vec<(NaiveDate, &Insight)> = daily
        .iter()
        .filter_map(|row| {
            let raw = row.date_start.as_deref()?;
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
            Some((date, row))
        })
        .collect();
    rows.sort_by_key(|(date, _)| *date);

    let mut trend = Vec::with_capacity(rows.len());
    let mut cumulative_spend = 0.0;
    let mut cumulative_impressions = 0;
    let mut cumulative_reach = 0;
    let mut cumulative_landing_page_views = 0;

    for (date, row) in rows {
        let spend = metric_f64(row.spend.as_deref());
        let impressions = metric_i64(row.impressions.as_deref());
        let reach = metric_i64(row.reach.as_deref());
        let landing_page_views = action_count(&row.actions, action_type);

        cumulative_spend += spend;
        cumulative_impressions += impressions;
        cumulative_reach += reach;
        cumulative_landing_page_views += landing_page_views;

        trend.push(TrendPoint {
            date,
            spend,
            impressions,
            reach,
            landing_page_views,
            cumulative_spend,
            cumulative_impressions,
            cumulative_reach,
            cumulative_landing_page_views,
        });
    }

    trend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActionRecord;

    fn day(date: &str, spend: &str, impressions: &str, reach: &str) -> Insight {
        Insight {
            date_start: Some(date.to_string()),
            spend: Some(spend.to_string()),
            impressions: Some(impressions.to_string()),
            reach: Some(reach.to_string()),
            ..Insight::default()
        }
    }

    fn with_action(mut insight: Insight, action_type: &str, value: &str) -> Insight {
        insight.actions.push(ActionRecord {
            action_type: action_type.to_string(),
            value: value.to_string(),
        });
        insight
    }

    #[test]
    fn empty_input_yields_empty_trend() {
        assert!(build_trend(&[], "landing_page_view").is_empty());
    }

    #[test]
    fn sorts_by_date_and_cumulates() {
        // Input deliberately out of order: Jan 2 first, Jan 1 second.
        let daily = vec![
            day("2024-01-02", "10", "0", "100"),
            with_action(
                day("2024-01-01", "5", "0", "50"),
                "landing_page_view",
                "3",
            ),
        ];

        let trend = build_trend(&daily, "landing_page_view");
        assert_eq!(trend.len(), 2);

        let first = &trend[0];
        assert_eq!(first.date.to_string(), "2024-01-01");
        assert_eq!(first.spend, 5.0);
        assert_eq!(first.cumulative_spend, 5.0);
        assert_eq!(first.landing_page_views, 3);
        assert_eq!(first.cumulative_landing_page_views, 3);

        let second = &trend[1];
        assert_eq!(second.date.to_string(), "2024-01-02");
        assert_eq!(second.spend, 10.0);
        assert_eq!(second.cumulative_spend, 15.0);
        assert_eq!(second.landing_page_views, 0);
        assert_eq!(second.cumulative_landing_page_views, 3);
        assert_eq!(second.cumulative_reach, 150);
    }

    #[test]
    fn output_is_independent_of_input_order() {
        let forward = vec![
            day("2024-01-01", "1", "10", "5"),
            day("2024-01-02", "2", "20", "6"),
            day("2024-01-03", "3", "30", "7"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let from_forward = build_trend(&forward, "landing_page_view");
        let from_reversed = build_trend(&reversed, "landing_page_view");
        assert_eq!(from_forward, from_reversed);
        // Deterministic over re-runs as well.
        assert_eq!(from_forward, build_trend(&forward, "landing_page_view"));
    }

    #[test]
    fn cumulative_series_are_non_decreasing_and_total_the_sum() {
        let daily = vec![
            day("2024-02-03", "7.5", "300", "120"),
            day("2024-02-01", "2.5", "100", "80"),
            day("2024-02-02", "0", "0", "0"),
        ];

        let trend = build_trend(&daily, "landing_page_view");
        assert_eq!(trend.len(), daily.len());
        for pair in trend.windows(2) {
            assert!(pair[1].date > pair[0].date);
            assert!(pair[1].cumulative_spend >= pair[0].cumulative_spend);
            assert!(pair[1].cumulative_impressions >= pair[0].cumulative_impressions);
            assert!(pair[1].cumulative_reach >= pair[0].cumulative_reach);
            assert!(
                pair[1].cumulative_landing_page_views >= pair[0].cumulative_landing_page_views
            );
        }
        assert_eq!(trend.last().unwrap().cumulative_spend, 10.0);
        assert_eq!(trend.last().unwrap().cumulative_impressions, 400);
    }

    #[test]
    fn malformed_metrics_coerce_to_zero() {
        let daily = vec![Insight {
            date_start: Some("2024-03-01".to_string()),
            spend: Some("free?".to_string()),
            impressions: None,
            reach: Some("".to_string()),
            ..Insight::default()
        }];

        let trend = build_trend(&daily, "landing_page_view");
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].spend, 0.0);
        assert_eq!(trend[0].impressions, 0);
        assert_eq!(trend[0].reach, 0);
    }

    #[test]
    fn rows_without_parsable_dates_are_dropped() {
        let daily = vec![
            day("2024-01-01", "1", "1", "1"),
            day("yesterday", "99", "99", "99"),
            Insight::default(),
        ];

        let trend = build_trend(&daily, "landing_page_view");
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].cumulative_spend, 1.0);
    }
}
