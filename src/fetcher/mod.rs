pub mod ads_client;

pub use ads_client::{filter_by_cutoff, AdsClient};
