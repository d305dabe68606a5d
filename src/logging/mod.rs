pub mod fetch_log;

pub use fetch_log::FetchLog;
