use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href="/" class="btn btn-primary">"Back to switches"</A>
        </div>
    }
}
