//! In-process service layer of the sales ledger.
//!
//! - `shared::data`: persistence substrates (`read(key)` / `write(key, text)`)
//! - `domain::a001_sales_record`: record store and record service
//! - `dashboards::d400_rep_summary`: totals and per-representative breakdowns

pub mod dashboards;
pub mod domain;
pub mod shared;
