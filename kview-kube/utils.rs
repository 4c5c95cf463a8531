use k8s_openapi::serde_json::{self, Value};
use kube::api::DynamicObject;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Returns `true` if all `selector` pairs are present in `labels`.\
/// **Note** that an empty selector matches everything.
pub fn labels_match(selector: &BTreeMap<String, String>, labels: Option<&BTreeMap<String, String>>) -> bool {
    selector
        .iter()
        .all(|(key, value)| labels.and_then(|l| l.get(key)).is_some_and(|v| v == value))
}

/// Converts typed kubernetes resource to the [`DynamicObject`].
pub fn to_dynamic<K: Serialize>(resource: &K) -> Result<DynamicObject, serde_json::Error> {
    serde_json::to_value(resource).and_then(serde_json::from_value)
}

/// Parses [`DynamicObject`] into the typed kubernetes resource.
pub fn from_dynamic<K: DeserializeOwned>(object: &DynamicObject) -> Result<K, serde_json::Error> {
    let value: Value = serde_json::to_value(object)?;
    serde_json::from_value(value)
}
