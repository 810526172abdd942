pub mod browser_storage;
pub mod date_utils;
pub mod icons;
pub mod number_format;
