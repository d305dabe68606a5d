pub mod ad_item;
pub mod envelope;
pub mod metric;

pub use ad_item::AdItem;
pub use envelope::{AdsData, AdsEnvelope};
pub use metric::Metric;
