use crate::layout::global_context::{use_app_context, Route};
use crate::shared::browser_storage::sales_store;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_yen;
use contracts::domain::a001_sales_record::{SalesRecord, SalesRecordId};
use ledger::domain::a001_sales_record::service;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SalesRecordRow {
    pub id: String,
    pub date: String,
    pub rep_name: String,
    pub invoice_number: String,
    pub client: String,
    pub project_name: String,
    pub amount: String,
}

impl From<SalesRecord> for SalesRecordRow {
    fn from(r: SalesRecord) -> Self {
        Self {
            id: r.id.0,
            date: format_date(&r.date),
            rep_name: r.rep_name.display_name().to_string(),
            invoice_number: if r.invoice_number.trim().is_empty() {
                "-".to_string()
            } else {
                r.invoice_number
            },
            client: r.client,
            project_name: r.project_name,
            amount: format_yen(r.amount),
        }
    }
}

fn fetch_rows() -> Result<Vec<SalesRecordRow>, String> {
    service::list_newest_first(&sales_store())
        .map(|records| records.into_iter().map(Into::into).collect())
        .map_err(|e| format!("データの読み込みに失敗しました: {:#}", e))
}

fn confirm_delete() -> bool {
    web_sys::window()
        .map(|win| {
            win.confirm_with_message("この売上データを削除してもよろしいですか？")
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[component]
pub fn SalesRecordList() -> impl IntoView {
    let ctx = use_app_context();
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_delete = move |id: String| {
        if !confirm_delete() {
            return;
        }
        match service::delete(&sales_store(), &SalesRecordId::new(id.as_str())) {
            Ok(_) => {
                set_error.set(None);
                ctx.touch();
            }
            Err(e) => set_error.set(Some(format!("削除に失敗しました: {:#}", e))),
        }
    };

    view! {
        {move || error.get().map(|e| view! { <div class="card error">{e}</div> })}

        {move || {
            ctx.revision.get();
            match fetch_rows() {
                Err(e) => view! { <div class="card error">{e}</div> }.into_any(),
                Ok(rows) if rows.is_empty() => {
                    view! { <div class="card">{"データがありません。"}</div> }.into_any()
                }
                Ok(rows) => view! {
                    <div class="card table-card">
                        <div class="table-scroll">
                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{"日付"}</th>
                                        <th class="table__header-cell">{"担当 / 請求番号"}</th>
                                        <th class="table__header-cell">{"クライアント"}</th>
                                        <th class="table__header-cell">{"案件名"}</th>
                                        <th class="table__header-cell table__header-cell--right">{"売上金額"}</th>
                                        <th class="table__header-cell table__header-cell--center">{"操作"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|row| {
                                        let id_for_edit = row.id.clone();
                                        let id_for_delete = row.id.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{row.date}</td>
                                                <td class="table__cell">
                                                    {row.rep_name}
                                                    <br />
                                                    <small class="text-muted">{row.invoice_number}</small>
                                                </td>
                                                <td class="table__cell">{row.client}</td>
                                                <td class="table__cell">{row.project_name}</td>
                                                <td class="table__cell table__cell--right">{row.amount}</td>
                                                <td class="table__cell table__cell--center">
                                                    <div class="row-actions">
                                                        <button
                                                            class="btn btn-secondary btn-sm"
                                                            on:click=move |_| ctx.navigate(Route::edit(id_for_edit.clone()))
                                                        >
                                                            {icon("edit")}
                                                            {"編集"}
                                                        </button>
                                                        <button
                                                            class="btn btn-danger btn-sm"
                                                            on:click=move |_| handle_delete(id_for_delete.clone())
                                                        >
                                                            {icon("delete")}
                                                            {"削除"}
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }.into_any(),
            }
        }}
    }
}
