use super::view_model::SalesRecordDetailsViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::enums::Representative;
use leptos::prelude::*;

#[component]
pub fn SalesRecordDetails(id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let vm = SalesRecordDetailsViewModel::new();
    vm.load_if_needed(id);

    let rep_options = Representative::all()
        .into_iter()
        .map(|rep| {
            let code = rep.code().to_string();
            let name = rep.display_name().to_string();
            view! {
                <option value=code selected=move || vm.form.get().rep_name == rep>
                    {name}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="card details-container sales-record-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command(ctx);
                }
            >
                <div class="dashboard-grid form-row">
                    <div class="form-group">
                        <label class="form-label" for="repName">{"担当者"}</label>
                        <select
                            id="repName"
                            class="form-select"
                            on:change=move |ev| {
                                if let Some(rep) = Representative::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.rep_name = rep);
                                }
                            }
                        >
                            {rep_options}
                        </select>
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="date">{"売上日"}</label>
                        <input
                            type="date"
                            id="date"
                            class="form-input"
                            required=true
                            prop:value=move || vm.form.get().date
                            on:input=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="dashboard-grid form-row">
                    <div class="form-group">
                        <label class="form-label" for="client">{"クライアント名"}</label>
                        <input
                            type="text"
                            id="client"
                            class="form-input"
                            required=true
                            prop:value=move || vm.form.get().client
                            on:input=move |ev| vm.form.update(|f| f.client = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="invoiceNumber">{"請求書番号"}</label>
                        <input
                            type="text"
                            id="invoiceNumber"
                            class="form-input"
                            prop:value=move || vm.form.get().invoice_number
                            on:input=move |ev| vm.form.update(|f| f.invoice_number = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label class="form-label" for="projectName">{"案件名"}</label>
                    <input
                        type="text"
                        id="projectName"
                        class="form-input"
                        required=true
                        prop:value=move || vm.form.get().project_name
                        on:input=move |ev| vm.form.update(|f| f.project_name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label class="form-label" for="inputAmount">{"売上金額 (税抜)"}</label>
                    <input
                        type="number"
                        id="inputAmount"
                        class="form-input"
                        min="0"
                        required=true
                        prop:value=move || vm.amount_text.get()
                        on:input=move |ev| vm.amount_text.set(event_target_value(&ev))
                    />
                </div>

                <hr class="form-divider" />
                <h4 class="form-section-title">{"外注費情報"}</h4>

                <div class="dashboard-grid form-row">
                    <div class="form-group">
                        <label class="form-label" for="contractorName">{"外注先"}</label>
                        <input
                            type="text"
                            id="contractorName"
                            class="form-input"
                            prop:value=move || vm.form.get().contractor_name
                            on:input=move |ev| vm.form.update(|f| f.contractor_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="inputCost">{"外注費"}</label>
                        <input
                            type="number"
                            id="inputCost"
                            class="form-input"
                            min="0"
                            prop:value=move || vm.cost_text.get()
                            on:input=move |ev| vm.cost_text.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label class="form-label" for="outsourcingBreakdown">{"外注費内訳"}</label>
                    <textarea
                        id="outsourcingBreakdown"
                        class="form-input"
                        rows="2"
                        prop:value=move || vm.form.get().outsourcing_breakdown
                        on:input=move |ev| vm.form.update(|f| f.outsourcing_breakdown = event_target_value(&ev))
                    />
                </div>

                <div class="preview-box">
                    <div class="dashboard-grid form-row">
                        <div>
                            <div class="stat-title">{"予想粗利"}</div>
                            <div class="stat-value" id="previewProfit">{move || vm.preview_profit()}</div>
                        </div>
                        <div>
                            <div class="stat-title">{"外注費率"}</div>
                            <div class="stat-value" id="previewRatio">{move || vm.preview_ratio()}</div>
                        </div>
                    </div>
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary">
                        {icon("save")}
                        {move || if vm.is_edit_mode() { "更新する" } else { "登録する" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
