pub mod browser_storage;
pub mod date_utils;
pub mod logging;
