//! SwitchDesk web UI
//!
//! Leptos client-side app for the switch inventory table.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
mod error;
mod pages;
pub mod utils;

use pages::{InventoryTable, NotFound};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="SwitchDesk - Switch Inventory"/>
        <Meta name="description" content="Network switch inventory management"/>

        <Router>
            <main class="container">
                <Routes>
                    <Route path="/" view=InventoryTable/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, run when the module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
