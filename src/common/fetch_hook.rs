use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::hooks::FetchState;

/// Fetch hook keyed by a dependency value.
///
/// The fetch runs on mount and again whenever `deps` changes; each run flips
/// the state back to `Loading`. Every request carries a generation number and
/// a resolution is applied only while its generation is still current, so a
/// result that arrives after the key has moved on is discarded instead of
/// overwriting newer state.
///
/// Errors are pushed to the injected `ToastContext` and logged; the returned
/// state carries the raw error message for callers that render it.
#[hook]
pub fn use_fetch_keyed<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(&D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>().expect("ToastContext not found");
    let generation = use_mut_ref(|| 0u64);
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let generation = generation.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback(deps.clone(), move |_, deps| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let generation = generation.clone();

            // The future captures the deps value as of this request
            let fut = (**fetch_fn)(deps);

            *generation.borrow_mut() += 1;
            let this_generation = *generation.borrow();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = fut.await;

                // A newer request superseded this one while it was in flight
                if *generation.borrow() != this_generation {
                    log::debug!(
                        "Discarding stale fetch result (generation {})",
                        this_generation
                    );
                    return;
                }

                match result {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        log::error!("Fetch failed: {}", err);
                        fetch_state.set(FetchState::Error(err.clone()));
                        toast_ctx.show_error(err);
                    }
                }
            });
        })
    };

    // Fetch on mount and on every key change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
