pub mod aggregate;

pub use aggregate::{SalesRecord, SalesRecordDto, SalesRecordId};
