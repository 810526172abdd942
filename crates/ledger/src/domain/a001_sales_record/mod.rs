pub mod repository;
pub mod service;

pub use repository::SalesRecordRepository;
