//! Display transforms for model evaluation data.
//!
//! Kept free of any rendering so the formatting rules can be tested without a
//! browser.

/// A single bar in the feature-importance chart.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturePoint {
    pub name: String,
    pub value: f64,
}

/// Confusion matrix counts in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionCounts {
    pub tp: i64,
    pub fp: i64,
    pub fn_: i64,
    pub tn: i64,
}

/// Formats a metric score to two decimals, or "N/A" when the backend did not
/// report it.
pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}

/// Formats accuracy as a percentage badge label, e.g. "92.0% Accuracy".
pub fn format_accuracy(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}% Accuracy", v * 100.0),
        None => "N/A".to_string(),
    }
}

/// Extracts the four confusion matrix counts.
///
/// Row 0 is [true positive, false positive], row 1 is [false negative,
/// true negative]. A missing row or cell counts as 0; present values are
/// taken verbatim, negative or not.
pub fn confusion_counts(matrix: Option<&Vec<Vec<i64>>>) -> ConfusionCounts {
    let cell = |row: usize, col: usize| -> i64 {
        matrix
            .and_then(|m| m.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    };

    ConfusionCounts {
        tp: cell(0, 0),
        fp: cell(0, 1),
        fn_: cell(1, 0),
        tn: cell(1, 1),
    }
}

/// Builds the chart series from raw importance values: each value rounded to
/// four decimals, named by 1-based index ("Feature 1", "Feature 2", ...).
pub fn feature_points(importance: &[f64]) -> Vec<FeaturePoint> {
    importance
        .iter()
        .enumerate()
        .map(|(index, value)| FeaturePoint {
            name: format!("Feature {}", index + 1),
            value: (value * 10_000.0).round() / 10_000.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rounds_to_two_decimals() {
        assert_eq!(format_score(Some(0.876)), "0.88");
        assert_eq!(format_score(Some(0.9)), "0.90");
        assert_eq!(format_score(Some(1.0)), "1.00");
    }

    #[test]
    fn score_falls_back_when_absent() {
        assert_eq!(format_score(None), "N/A");
    }

    #[test]
    fn accuracy_renders_as_percentage_with_suffix() {
        assert_eq!(format_accuracy(Some(0.92)), "92.0% Accuracy");
        assert_eq!(format_accuracy(Some(0.8567)), "85.7% Accuracy");
    }

    #[test]
    fn accuracy_falls_back_when_absent() {
        assert_eq!(format_accuracy(None), "N/A");
    }

    #[test]
    fn confusion_counts_follow_row_order() {
        let matrix = vec![vec![5, 2], vec![1, 10]];
        let counts = confusion_counts(Some(&matrix));
        assert_eq!(counts.tp, 5);
        assert_eq!(counts.fp, 2);
        assert_eq!(counts.fn_, 1);
        assert_eq!(counts.tn, 10);
    }

    #[test]
    fn absent_matrix_defaults_to_zeros() {
        assert_eq!(confusion_counts(None), ConfusionCounts::default());
    }

    #[test]
    fn short_rows_default_missing_cells_to_zero() {
        let matrix = vec![vec![7]];
        let counts = confusion_counts(Some(&matrix));
        assert_eq!(counts.tp, 7);
        assert_eq!(counts.fp, 0);
        assert_eq!(counts.fn_, 0);
        assert_eq!(counts.tn, 0);
    }

    #[test]
    fn negative_counts_pass_through_verbatim() {
        let matrix = vec![vec![-3, 2], vec![1, 10]];
        assert_eq!(confusion_counts(Some(&matrix)).tp, -3);
    }

    #[test]
    fn feature_points_round_and_name_by_index() {
        let points = feature_points(&[0.12345, 0.6]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "Feature 1");
        assert_eq!(points[0].value, 0.1235);
        assert_eq!(points[1].name, "Feature 2");
        assert_eq!(points[1].value, 0.6);
    }

    #[test]
    fn empty_importance_produces_no_points() {
        assert!(feature_points(&[]).is_empty());
    }
}
