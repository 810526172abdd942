use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state lives in context, not in globals
    provide_context(AppGlobalContext::new());

    view! {
        <Shell />
    }
}
