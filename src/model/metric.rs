// src/model/metric.rs

use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize, Serializer};

/// 上游指标值：要么存在，要么明确缺失（上游以 `false` / `null` 表示）。
///
/// 缺失与 `0` 不同，展示层统一渲染为占位符。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Metric<T> {
    Present(T),
    #[default]
    Absent,
}

impl<T: Copy> Metric<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Metric::Present(v) => Some(*v),
            Metric::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Metric::Absent)
    }
}

/// 上游的原始形态：数值，或者一个布尔标记
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMetric<T> {
    Present(T),
    Flag(bool),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Metric<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<RawMetric<T>>::deserialize(deserializer)? {
            Some(RawMetric::Present(v)) => Ok(Metric::Present(v)),
            Some(RawMetric::Flag(false)) | None => Ok(Metric::Absent),
            Some(RawMetric::Flag(true)) => {
                Err(<D::Error as DeError>::custom("metric cannot be `true`"))
            }
        }
    }
}

impl<T: Serialize> Serialize for Metric<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Present(v) => v.serialize(serializer),
            Metric::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Serialize)]
    struct Holder {
        #[serde(default)]
        ctr: Metric<f64>,
    }

    #[test]
    fn false_null_and_missing_decode_to_absent() {
        for raw in [json!({"ctr": false}), json!({"ctr": null}), json!({})] {
            let h: Holder = serde_json::from_value(raw).unwrap();
            assert_eq!(h.ctr, Metric::Absent);
        }
    }

    #[test]
    fn zero_stays_present() {
        let h: Holder = serde_json::from_value(json!({"ctr": 0})).unwrap();
        assert_eq!(h.ctr, Metric::Present(0.0));
    }

    #[test]
    fn true_is_rejected() {
        assert!(serde_json::from_value::<Holder>(json!({"ctr": true})).is_err());
    }

    #[test]
    fn absent_encodes_as_null_and_reads_back_absent() {
        let out = serde_json::to_value(Holder { ctr: Metric::Absent }).unwrap();
        assert_eq!(out, json!({"ctr": null}));
        let back: Holder = serde_json::from_value(out).unwrap();
        assert!(back.ctr.is_absent());
    }
}
