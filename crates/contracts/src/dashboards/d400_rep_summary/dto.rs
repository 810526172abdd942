use crate::enums::Representative;
use serde::{Deserialize, Serialize};

/// Request for the representative summary dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepSummaryRequest {
    pub year: i32,
    /// 1-indexed calendar month
    pub month: u32,
}

impl RepSummaryRequest {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Period in format "YYYY-MM"
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Per-representative totals for one month and its year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepStat {
    pub rep: Representative,
    /// Display name (e.g., "内藤")
    pub display_name: String,
    pub monthly_sales: f64,
    pub monthly_profit: f64,
    pub yearly_sales: f64,
    pub yearly_profit: f64,
}

/// Response for the representative summary dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepSummaryResponse {
    /// Period in format "YYYY-MM"
    pub period: String,
    pub year: i32,
    pub month: u32,
    /// Sales over every stored record, regardless of period
    pub total_sales: f64,
    /// Profit over every stored record, regardless of period
    pub total_profit: f64,
    pub rep_stats: Vec<RepStat>,
    pub record_count: usize,
    /// True when the store is empty and demo data may be generated
    pub can_seed: bool,
}
