///! Loading and failure views
///!
///! A failed request replaces the whole inventory table; there is no retry or dismiss.

use leptos::*;
use switchdesk_common::RequestFailed;

/// Shown while the initial read-all request is outstanding
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            <h6 class="loading">"Loading..."</h6>
        </div>
    }
}

/// Full-replacement error view
#[component]
pub fn RequestFailedView(
    /// Failure to display
    error: RequestFailed,
) -> impl IntoView {
    view! {
        <div class="loading-error">
            <div class="loading-error-icon">"❌"</div>
            <h6 class="error">{error_text(&error)}</h6>
        </div>
    }
}

pub fn error_text(error: &RequestFailed) -> String {
    format!("Error: {}", error.reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text() {
        assert_eq!(error_text(&RequestFailed::status(502)), "Error: HTTP 502");
        assert_eq!(
            error_text(&RequestFailed::new("Failed to fetch")),
            "Error: Failed to fetch"
        );
    }
}
