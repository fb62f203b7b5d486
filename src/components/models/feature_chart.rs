use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use super::display::feature_points;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub importance: Vec<f64>,
}

/// Bar chart of per-feature importance values.
///
/// Rendering is delegated to Plotly; this component only prepares the series
/// (index-named, 4-decimal rounded) and the visual configuration.
#[function_component(FeatureImportanceChart)]
pub fn feature_importance_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.importance.clone()),
        move |(chart_ref, importance)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let points = feature_points(importance);
                let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
                let values: Vec<f64> = points.iter().map(|p| p.value).collect();

                let data = serde_json::json!([{
                    "x": names,
                    "y": values,
                    "type": "bar",
                    "marker": {"color": "#6419e6"},
                    "name": "Importance"
                }]);

                let layout = serde_json::json!({
                    "margin": {"t": 5, "r": 30, "l": 20, "b": 5},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false},
                    "yaxis": {"showgrid": true, "gridcolor": "#eee"},
                    "showlegend": true,
                    "legend": {"orientation": "h", "y": -0.2}
                });

                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                let div_id = element.id();
                if !div_id.is_empty() {
                    newPlot(
                        &div_id,
                        serde_wasm_bindgen::to_value(&data).unwrap(),
                        serde_wasm_bindgen::to_value(&layout).unwrap(),
                        serde_wasm_bindgen::to_value(&config).unwrap(),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-feature-importance" class="chart-container" style="height: 300px;"></div>
    }
}
