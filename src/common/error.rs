use yew::prelude::*;

use crate::settings;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    /// Diagnostic detail. Always logged; rendered only in debug mode so the
    /// page never leaks transport errors to end users.
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    let detail = visible_detail(&props.message, settings::get_settings().debug_mode);

    html! {
        <div class="alert alert-error max-w-lg mx-auto my-12">
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <div class="flex flex-col gap-1">
                <span class="font-semibold">{"Failed to load data"}</span>
                {if let Some(detail) = detail {
                    html! { <span class="text-xs opacity-80">{detail}</span> }
                } else {
                    html! {}
                }}
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-sm btn-ghost"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

/// The raw cause stays diagnostic: it reaches the page only in debug mode,
/// and never when it is empty.
fn visible_detail(message: &str, debug_mode: bool) -> Option<&str> {
    if debug_mode && !message.is_empty() {
        Some(message)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_hidden_outside_debug_mode() {
        assert_eq!(visible_detail("HTTP error: 500", false), None);
    }

    #[test]
    fn detail_shown_in_debug_mode() {
        assert_eq!(
            visible_detail("HTTP error: 500", true),
            Some("HTTP error: 500")
        );
    }

    #[test]
    fn empty_detail_is_never_shown() {
        assert_eq!(visible_detail("", true), None);
        assert_eq!(visible_detail("", false), None);
    }
}
