use super::model;
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::shared::date_utils::{current_year_month, format_period_label};
use crate::shared::number_format::format_yen;
use contracts::dashboards::d400_rep_summary::{RepStat, RepSummaryRequest, RepSummaryResponse};
use leptos::prelude::*;

/// Overall totals and per-representative cards for the current month
#[component]
pub fn RepSummaryDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let (year, month) = current_year_month();
    let request = RepSummaryRequest::new(year, month);

    view! {
        <div class="dashboard">
            {move || {
                // Re-read after every write
                ctx.revision.get();
                match model::load_summary(request) {
                    Ok(summary) => summary_view(summary, ctx).into_any(),
                    Err(e) => load_error_view(e, ctx).into_any(),
                }
            }}
        </div>
    }
}

fn summary_view(summary: RepSummaryResponse, ctx: AppGlobalContext) -> impl IntoView {
    let heading = format!(
        "担当者別レポート ({} / 年間)",
        format_period_label(summary.year, summary.month)
    );
    let cards = summary
        .rep_stats
        .into_iter()
        .map(rep_card)
        .collect_view();

    let seed_action = summary
        .can_seed
        .then(|| seed_button(ctx, "デモデータを生成", "btn btn-primary"));

    view! {
        <div class="dashboard-grid">
            <div class="card stat-card">
                <span class="stat-title">{"全体総売上"}</span>
                <span class="stat-value">{format_yen(summary.total_sales)}</span>
            </div>
            <div class="card stat-card">
                <span class="stat-title">{"全体総粗利"}</span>
                <span class="stat-value stat-value--success">{format_yen(summary.total_profit)}</span>
            </div>
        </div>

        <h3 class="section-title">{heading}</h3>
        <div class="dashboard-grid">{cards}</div>

        {seed_action}
    }
}

/// Unreadable store: the error plus a way to start over from the demo data
fn load_error_view(message: String, ctx: AppGlobalContext) -> impl IntoView {
    view! {
        <div class="card error">
            <p>{message}</p>
            <p>{"保存データを読み込めません。デモデータで初期化すると現在のデータは失われます。"}</p>
            {seed_button(ctx, "デモデータで初期化", "btn btn-danger")}
        </div>
    }
}

/// Replaces the stored collection with the demo dataset
fn seed_button(ctx: AppGlobalContext, label: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <button
            class=class
            on:click=move |_| match model::seed_demo_data() {
                Ok(()) => ctx.touch(),
                Err(e) => log::error!("{}", e),
            }
        >
            {label}
        </button>
    }
}

fn rep_card(stat: RepStat) -> impl IntoView {
    view! {
        <div class="card rep-card">
            <h4 class="rep-card__name">{stat.display_name}</h4>
            <div class="rep-card__section">
                <div class="stat-title">{format!("月間売上: {}", format_yen(stat.monthly_sales))}</div>
                <div class="stat-title">{format!("月間粗利: {}", format_yen(stat.monthly_profit))}</div>
            </div>
            <div class="rep-card__section">
                <div class="stat-title">{format!("年間売上: {}", format_yen(stat.yearly_sales))}</div>
                <div class="stat-title">{format!("年間粗利: {}", format_yen(stat.yearly_profit))}</div>
            </div>
        </div>
    }
}
