use crate::models::{ActionRecord, Insight, SummaryMetrics};

/// Parse a decimal-string metric, substituting zero for missing or
/// malformed input.
pub fn metric_f64(value: Option<&str>) -> f64 {
    value.and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0)
}

/// Count metrics truncate toward zero.
pub fn metric_i64(value: Option<&str>) -> i64 {
    metric_f64(value) as i64
}

/// Count of the first action matching `action_type`. Zero means "no data":
/// an empty list, no matching record and a malformed value all land there.
pub fn action_count(actions: &[ActionRecord], action_type: &str) -> i64 {
    actions
        .iter()
        .find(|action| action.action_type == action_type)
        .and_then(|action| action.value.parse::<f64>().ok())
        .map(|value| value as i64)
        .unwrap_or(0)
}

pub fn summarize(insight: &Insight, action_type: &str) -> SummaryMetrics {
    SummaryMetrics {
        spend: metric_f64(insight.spend.as_deref()),
        impressions: metric_i64(insight.impressions.as_deref()),
        reach: metric_i64(insight.reach.as_deref()),
        frequency: metric_f64(insight.frequency.as_deref()),
        cpc: metric_f64(insight.cpc.as_deref()),
        ctr: metric_f64(insight.ctr.as_deref()),
        landing_page_views: action_count(&insight.actions, action_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(action_type: &str, value: &str) -> ActionRecord {
        ActionRecord {
            action_type: action_type.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn action_count_empty_list_is_zero() {
        assert_eq!(action_count(&[], "landing_page_view"), 0);
    }

    #[test]
    fn action_count_takes_first_match_and_truncates() {
        let actions = vec![
            action("link_click", "5"),
            action("landing_page_view", "12.0"),
        ];
        assert_eq!(action_count(&actions, "landing_page_view"), 12);
    }

    #[test]
    fn action_count_ignores_later_duplicates() {
        let actions = vec![
            action("landing_page_view", "7.9"),
            action("landing_page_view", "100"),
        ];
        assert_eq!(action_count(&actions, "landing_page_view"), 7);
    }

    #[test]
    fn action_count_no_match_is_zero() {
        let actions = vec![action("link_click", "5")];
        assert_eq!(action_count(&actions, "landing_page_view"), 0);
    }

    #[test]
    fn action_count_malformed_value_is_zero() {
        let actions = vec![action("landing_page_view", "n/a")];
        assert_eq!(action_count(&actions, "landing_page_view"), 0);
    }

    #[test]
    fn metric_coercion_substitutes_zero() {
        assert_eq!(metric_f64(None), 0.0);
        assert_eq!(metric_f64(Some("not a number")), 0.0);
        assert_eq!(metric_f64(Some("150.50")), 150.50);
        assert_eq!(metric_i64(Some("1234")), 1234);
        assert_eq!(metric_i64(Some("12.9")), 12);
        assert_eq!(metric_i64(Some("")), 0);
    }

    #[test]
    fn summarize_coerces_every_field() {
        let insight = Insight {
            spend: Some("150.50".to_string()),
            impressions: Some("1000".to_string()),
            reach: Some("800".to_string()),
            frequency: Some("1.25".to_string()),
            cpc: Some("bad".to_string()),
            ctr: None,
            actions: vec![action("landing_page_view", "12")],
            ..Insight::default()
        };

        let summary = summarize(&insight, "landing_page_view");
        assert_eq!(summary.spend, 150.50);
        assert_eq!(summary.impressions, 1000);
        assert_eq!(summary.reach, 800);
        assert_eq!(summary.frequency, 1.25);
        assert_eq!(summary.cpc, 0.0);
        assert_eq!(summary.ctr, 0.0);
        assert_eq!(summary.landing_page_views, 12);
    }
}
