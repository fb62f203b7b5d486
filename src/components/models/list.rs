use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::model::{get_models, ModelSummary};
use crate::common::fetch_hook::use_fetch_keyed;
use crate::common::fetch_render::FetchRender;
use crate::Route;

#[function_component(Models)]
pub fn models() -> Html {
    let (fetch_state, refetch) = use_fetch_keyed((), |_: &()| get_models());

    let render = Callback::from(|models: Vec<ModelSummary>| {
        if models.is_empty() {
            html! {
                <div class="alert alert-info">
                    <i class="fas fa-info-circle"></i>
                    <span>{"No models found. Train a model to see it here."}</span>
                </div>
            }
        } else {
            html! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for models.iter().map(model_card) }
                </div>
            }
        }
    });

    html! {
        <>
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Trained Models"}</h2>
            </div>

            <FetchRender<Vec<ModelSummary>>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
                loading_text="Loading models..."
            />
        </>
    }
}

fn model_card(model: &ModelSummary) -> Html {
    html! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title text-lg">{&model.name}</h3>
                    <span class="badge badge-ghost">{&model.kind}</span>
                </div>
                {if let Some(created_at) = &model.created_at {
                    html! { <p class="text-xs text-gray-500">{format!("Trained {}", created_at)}</p> }
                } else {
                    html! {}
                }}
                <div class="card-actions justify-end mt-2">
                    <Link<Route>
                        to={Route::ModelDetail { id: model.id.clone() }}
                        classes="btn btn-primary btn-sm"
                    >
                        {"View Details"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
