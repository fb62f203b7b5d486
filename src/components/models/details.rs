use yew::prelude::*;

use super::display::{confusion_counts, format_accuracy, format_score};
use super::feature_chart::FeatureImportanceChart;
use crate::api_client::model::{get_model_details, ModelDetails};
use crate::common::fetch_hook::use_fetch_keyed;
use crate::common::loading::Loading;
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

/// Dashboard card for a single model's evaluation results.
///
/// Fetches details whenever `id` changes. Performance tab shows the metric
/// grid and confusion matrix; Features tab shows the importance chart when the
/// model exposes one.
#[function_component(ModelDetailsCard)]
pub fn model_details_card(props: &Props) -> Html {
    let (fetch_state, _refetch) = use_fetch_keyed(props.id.clone(), |id: &String| {
        let id = id.clone();
        async move { get_model_details(&id).await }
    });

    match &*fetch_state {
        FetchState::NotStarted | FetchState::Loading => html! {
            <Loading text="Loading model details..." />
        },
        // The cause was already logged and toasted by the fetch hook; the
        // card itself shows only the generic message.
        FetchState::Error(_) => html! {
            <div class="alert alert-error">
                <i class="fas fa-exclamation-circle"></i>
                <span>{"Failed to load model details"}</span>
            </div>
        },
        FetchState::Success(None) => html! {
            <div class="alert alert-info">
                <i class="fas fa-info-circle"></i>
                <span>{format!("No model found for {}.", props.id)}</span>
            </div>
        },
        FetchState::Success(Some(details)) => render_details(&props.id, details),
    }
}

fn render_details(id: &str, details: &ModelDetails) -> Html {
    let counts = confusion_counts(details.confusion_matrix.as_ref());
    let has_importance = details
        .feature_importance
        .as_ref()
        .is_some_and(|fi| !fi.is_empty());

    html! {
        <div class="card bg-base-100 shadow col-span-1">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">{format!("Model Details: {}", id)}</h3>
                    <span class="badge badge-outline badge-primary">
                        {format_accuracy(details.accuracy)}
                    </span>
                </div>

                <div role="tablist" class="tabs tabs-bordered mt-2">
                    <input
                        type="radio"
                        name="model-detail-tabs"
                        role="tab"
                        class="tab"
                        aria-label="Performance"
                        checked={true}
                    />
                    <div role="tabpanel" class="tab-content pt-4">
                        <div class="grid grid-cols-3 gap-4">
                            {metric_tile("Precision", format_score(details.precision))}
                            {metric_tile("Recall", format_score(details.recall))}
                            {metric_tile("F1 Score", format_score(details.f1))}
                        </div>

                        <h4 class="text-sm font-medium my-4">{"Confusion Matrix"}</h4>
                        <div class="grid grid-cols-2 gap-1 text-center">
                            {count_tile("True Positive", counts.tp, true)}
                            {count_tile("False Positive", counts.fp, false)}
                            {count_tile("False Negative", counts.fn_, false)}
                            {count_tile("True Negative", counts.tn, true)}
                        </div>
                    </div>

                    <input
                        type="radio"
                        name="model-detail-tabs"
                        role="tab"
                        class="tab"
                        aria-label="Features"
                    />
                    <div role="tabpanel" class="tab-content pt-4">
                        <h4 class="text-sm font-medium mb-2">{"Feature Importance"}</h4>
                        {if has_importance {
                            let importance = details
                                .feature_importance
                                .clone()
                                .unwrap_or_default();
                            html! { <FeatureImportanceChart {importance} /> }
                        } else {
                            html! {
                                <p class="text-sm text-gray-500">
                                    {format!(
                                        "Feature importance not available for {}. \
                                         Some model kinds, like KNN, do not expose it.",
                                        id
                                    )}
                                </p>
                            }
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn metric_tile(title: &str, value: String) -> Html {
    html! {
        <div class="stat bg-base-200 rounded-lg p-2">
            <div class="stat-title text-xs">{title}</div>
            <div class="stat-value text-lg">{value}</div>
        </div>
    }
}

fn count_tile(title: &str, count: i64, positive: bool) -> Html {
    let value_class = if positive { "text-success" } else { "text-error" };

    html! {
        <div class="stat bg-base-200 rounded-lg p-2">
            <div class="stat-title text-xs">{title}</div>
            <div class={classes!("stat-value", "text-lg", value_class)}>{count}</div>
        </div>
    }
}
