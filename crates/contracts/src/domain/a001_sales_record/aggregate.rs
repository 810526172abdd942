use crate::domain::common::number::{deserialize_lenient_f64, deserialize_lenient_string};
use crate::domain::common::AggregateId;
use crate::enums::Representative;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Opaque identifier of a sales record
///
/// Stored as a plain string. Demo data uses short numeric ids, records
/// created through the form get a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesRecordId(pub String);

impl SalesRecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for SalesRecordId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        String::from_string(s).map(SalesRecordId)
    }
}

impl fmt::Display for SalesRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One sales transaction
///
/// Field names at rest follow the persisted JSON layout (`repName`,
/// `outsourcingCost`, ...). `amount` and `outsourcing_cost` are always
/// written as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub id: SalesRecordId,

    /// Sale date, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub date: String,

    pub rep_name: Representative,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub client: String,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub invoice_number: String,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub project_name: String,

    /// Sale total before tax
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub amount: f64,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub contractor_name: String,

    /// Cost paid to the external contractor
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub outsourcing_cost: f64,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub outsourcing_breakdown: String,
}

impl SalesRecord {
    /// Build a record from form data under the given id
    pub fn from_dto(id: SalesRecordId, dto: &SalesRecordDto) -> Self {
        let mut record = Self {
            id,
            date: String::new(),
            rep_name: Representative::default(),
            client: String::new(),
            invoice_number: String::new(),
            project_name: String::new(),
            amount: 0.0,
            contractor_name: String::new(),
            outsourcing_cost: 0.0,
            outsourcing_breakdown: String::new(),
        };
        record.update(dto);
        record
    }

    /// Replace every field except `id` from form data
    pub fn update(&mut self, dto: &SalesRecordDto) {
        self.date = dto.date.trim().to_string();
        self.rep_name = dto.rep_name.clone();
        self.client = dto.client.clone();
        self.invoice_number = dto.invoice_number.clone();
        self.project_name = dto.project_name.clone();
        self.amount = dto.amount;
        self.contractor_name = dto.contractor_name.clone();
        self.outsourcing_cost = dto.outsourcing_cost;
        self.outsourcing_breakdown = dto.outsourcing_breakdown.clone();
    }

    /// Form view of the record
    pub fn to_dto(&self) -> SalesRecordDto {
        SalesRecordDto {
            id: Some(self.id.as_string()),
            date: self.date.clone(),
            rep_name: self.rep_name.clone(),
            client: self.client.clone(),
            invoice_number: self.invoice_number.clone(),
            project_name: self.project_name.clone(),
            amount: self.amount,
            contractor_name: self.contractor_name.clone(),
            outsourcing_cost: self.outsourcing_cost,
            outsourcing_breakdown: self.outsourcing_breakdown.clone(),
        }
    }

    /// Amount minus outsourcing cost. May be negative.
    pub fn profit(&self) -> f64 {
        self.amount - self.outsourcing_cost
    }

    /// Parsed sale date, `None` when the stored text is not a calendar date
    pub fn sale_date(&self) -> Option<NaiveDate> {
        parse_sale_date(&self.date)
    }
}

/// Parse `YYYY-MM-DD`, tolerating a trailing `T...` time part
pub fn parse_sale_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

// ============================================================================
// DTO
// ============================================================================

/// Entry form payload
///
/// `id` is set in edit mode and ignored by the store, which always keeps the
/// id of the record being edited.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecordDto {
    pub id: Option<String>,
    pub date: String,
    pub rep_name: Representative,
    pub client: String,
    pub invoice_number: String,
    pub project_name: String,
    pub amount: f64,
    pub contractor_name: String,
    pub outsourcing_cost: f64,
    pub outsourcing_breakdown: String,
}

impl SalesRecordDto {
    /// Form-level validation. The store never calls this.
    pub fn validate(&self) -> Result<(), String> {
        if parse_sale_date(&self.date).is_none() {
            return Err("売上日を正しく入力してください".into());
        }
        if self.client.trim().is_empty() {
            return Err("クライアント名は必須です".into());
        }
        if self.project_name.trim().is_empty() {
            return Err("案件名は必須です".into());
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err("売上金額は0以上の数値で入力してください".into());
        }
        if !self.outsourcing_cost.is_finite() || self.outsourcing_cost < 0.0 {
            return Err("外注費は0以上の数値で入力してください".into());
        }
        Ok(())
    }

    /// Expected profit shown in the form preview
    pub fn preview_profit(&self) -> f64 {
        self.amount - self.outsourcing_cost
    }
}
