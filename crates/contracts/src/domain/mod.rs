pub mod a001_sales_record;
pub mod common;
