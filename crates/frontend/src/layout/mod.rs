pub mod global_context;

use crate::dashboards::d400_rep_summary::ui::RepSummaryDashboard;
use crate::domain::a001_sales_record::ui::details::SalesRecordDetails;
use crate::domain::a001_sales_record::ui::list::SalesRecordList;
use crate::shared::icons::icon;
use global_context::{use_app_context, Route};
use leptos::prelude::*;

/// Application shell: sidebar navigation, page title and the current page
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |  Page title                  |
/// |           +------------------------------+
/// |           |  Dashboard / Entry / List    |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    let nav_item = move |route: Route, icon_name: &'static str, label: &'static str| {
        let key = route.nav_key();
        view! {
            <button
                class="nav-item"
                class:active=move || ctx.route.get().nav_key() == key
                on:click=move |_| ctx.navigate(route.clone())
            >
                {icon(icon_name)}
                <span>{label}</span>
            </button>
        }
    };

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar-title">{"売上管理"}</div>
                <nav class="sidebar-nav">
                    {nav_item(Route::Dashboard, "dashboard", "ダッシュボード")}
                    {nav_item(Route::Entry { editing_id: None }, "plus", "売上登録")}
                    {nav_item(Route::List, "list", "売上一覧")}
                </nav>
            </aside>

            <main class="main-content">
                <header class="page-header">
                    <h2 id="page-title">{move || ctx.route.get().title()}</h2>
                </header>

                <div id="content-area">
                    {move || match ctx.route.get() {
                        Route::Dashboard => view! { <RepSummaryDashboard /> }.into_any(),
                        Route::Entry { editing_id } => {
                            view! { <SalesRecordDetails id=editing_id /> }.into_any()
                        }
                        Route::List => view! { <SalesRecordList /> }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}
