use serde::{Deserialize, Serialize};

use crate::api_client;

/// Model list entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub created_at: Option<String>,
}

/// Evaluation payload for a single trained model.
///
/// Every field is optional: backends differ in which metrics they report
/// (KNN-style models expose no feature importances, some report no confusion
/// matrix), so consumers must handle absence explicitly.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ModelDetails {
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
    /// Row 0 = [true positive, false positive],
    /// row 1 = [false negative, true negative]. Shape is not validated.
    pub confusion_matrix: Option<Vec<Vec<i64>>>,
    /// One value per input feature, index-positional; no feature names carried.
    pub feature_importance: Option<Vec<f64>>,
}

/// Get all models
pub async fn get_models() -> Result<Vec<ModelSummary>, String> {
    log::trace!("Fetching all models");
    let result = api_client::get::<Vec<ModelSummary>>("/models").await;
    match &result {
        Ok(models) => log::info!("Fetched {} models", models.len()),
        Err(e) => log::error!("Failed to fetch models: {}", e),
    }
    result
}

/// Get evaluation details for a specific model by ID.
///
/// Resolves to `Ok(None)` when the backend knows no such model.
pub async fn get_model_details(model_id: &str) -> Result<Option<ModelDetails>, String> {
    log::trace!("Fetching details for model: {}", model_id);
    let result = api_client::get_optional(&format!("/models/{}", model_id)).await;
    match &result {
        Ok(Some(_)) => log::info!("Fetched details for model: {}", model_id),
        Ok(None) => log::warn!("Model not found: {}", model_id),
        Err(e) => log::error!("Failed to fetch model {}: {}", model_id, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_deserialize_full_payload() {
        let details: ModelDetails = serde_json::from_str(
            r#"{
                "accuracy": 0.92,
                "precision": 0.876,
                "recall": 0.81,
                "f1": 0.84,
                "confusion_matrix": [[5, 2], [1, 10]],
                "feature_importance": [0.12345, 0.6]
            }"#,
        )
        .unwrap();

        assert_eq!(details.accuracy, Some(0.92));
        assert_eq!(details.precision, Some(0.876));
        assert_eq!(details.recall, Some(0.81));
        assert_eq!(details.f1, Some(0.84));
        assert_eq!(
            details.confusion_matrix,
            Some(vec![vec![5, 2], vec![1, 10]])
        );
        assert_eq!(details.feature_importance, Some(vec![0.12345, 0.6]));
    }

    #[test]
    fn details_missing_fields_deserialize_as_none() {
        let details: ModelDetails = serde_json::from_str("{}").unwrap();
        assert_eq!(details, ModelDetails::default());
    }

    #[test]
    fn details_null_metrics_deserialize_as_none() {
        let details: ModelDetails = serde_json::from_str(
            r#"{"accuracy": null, "f1": null, "feature_importance": null}"#,
        )
        .unwrap();

        assert_eq!(details.accuracy, None);
        assert_eq!(details.f1, None);
        assert_eq!(details.feature_importance, None);
    }

    #[test]
    fn summary_created_at_is_optional() {
        let summary: ModelSummary = serde_json::from_str(
            r#"{"id": "rf-1", "name": "Random Forest", "kind": "random_forest"}"#,
        )
        .unwrap();
        assert_eq!(summary.created_at, None);
    }
}
