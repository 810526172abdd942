use super::model;
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::number_format::{format_percent, format_yen};
use contracts::domain::a001_sales_record::SalesRecordDto;
use ledger::dashboards::d400_rep_summary::service::outsourcing_ratio;
use leptos::prelude::*;

/// ViewModel for the sales record entry form
///
/// Amount inputs are kept as raw text so partially typed numbers survive
/// re-rendering; they are parsed on preview and on save.
#[derive(Clone, Copy)]
pub struct SalesRecordDetailsViewModel {
    pub form: RwSignal<SalesRecordDto>,
    pub amount_text: RwSignal<String>,
    pub cost_text: RwSignal<String>,
    pub editing_id: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl SalesRecordDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(SalesRecordDto::default()),
            amount_text: RwSignal::new(String::new()),
            cost_text: RwSignal::new("0".to_string()),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with(|id| id.is_some())
    }

    /// Load the record being edited into the form
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        match model::fetch_by_id(&existing_id) {
            Ok(Some(record)) => {
                self.amount_text.set(amount_input_text(record.amount, ""));
                self.cost_text.set(amount_input_text(record.outsourcing_cost, "0"));
                self.form.set(record.to_dto());
                self.editing_id.set(Some(existing_id));
            }
            Ok(None) => {
                // Stay in edit mode so saving cannot create a record by accident
                log::warn!("Record {} not found, opening an empty form", existing_id);
                self.editing_id.set(Some(existing_id));
                self.error
                    .set(Some("指定された売上データが見つかりません".to_string()));
            }
            Err(e) => self.error.set(Some(format!("読み込みエラー: {}", e))),
        }
    }

    /// Form contents with the amount inputs parsed
    fn current_dto(&self) -> SalesRecordDto {
        let mut dto = self.form.get();
        dto.amount = parse_amount(&self.amount_text.get());
        dto.outsourcing_cost = parse_amount(&self.cost_text.get());
        dto
    }

    /// Profit preview, e.g. `¥250,000`
    pub fn preview_profit(&self) -> String {
        format_yen(self.current_dto().preview_profit())
    }

    /// Outsourcing ratio preview, e.g. `16.7%`
    pub fn preview_ratio(&self) -> String {
        let dto = self.current_dto();
        format_percent(outsourcing_ratio(dto.amount, dto.outsourcing_cost))
    }

    /// Validate, write to the store and go to the list
    pub fn save_command(&self, ctx: AppGlobalContext) {
        let mut dto = self.form.get_untracked();
        dto.amount = parse_amount(&self.amount_text.get_untracked());
        dto.outsourcing_cost = parse_amount(&self.cost_text.get_untracked());

        if let Err(e) = dto.validate() {
            self.error.set(Some(e));
            return;
        }

        let editing_id = self.editing_id.get_untracked();
        match model::save_form(editing_id.as_deref(), &dto) {
            Ok(()) => {
                ctx.touch();
                ctx.navigate(Route::List);
            }
            Err(e) => self.error.set(Some(format!("保存エラー: {}", e))),
        }
    }
}

impl Default for SalesRecordDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Number input text to amount; blank or unparsable text counts as 0
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Amount as input text; `zero_text` is what a zero amount shows as
fn amount_input_text(value: f64, zero_text: &str) -> String {
    if value == 0.0 {
        zero_text.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("300000"), 300000.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_amount_input_text() {
        assert_eq!(amount_input_text(0.0, ""), "");
        assert_eq!(amount_input_text(0.0, "0"), "0");
        assert_eq!(amount_input_text(300000.0, ""), "300000");
    }
}
