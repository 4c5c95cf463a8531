use anyhow::{Context, Result};
use kube::api::DynamicObject;
use serde::Deserialize;
use std::path::Path;

#[cfg(test)]
#[path = "./manifests.tests.rs"]
mod manifests_tests;

/// Reads all objects from the YAML `path`, see [`parse`].
pub async fn read(path: &Path, namespace: &str) -> Result<Vec<DynamicObject>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read manifest {}", path.display()))?;

    parse(&text, namespace).with_context(|| format!("invalid manifest {}", path.display()))
}

/// Parses multi-document YAML `text` into objects, skipping empty documents.\
/// **Note** that objects without namespace are placed into the `namespace`.
pub fn parse(text: &str, namespace: &str) -> Result<Vec<DynamicObject>> {
    let mut objects = Vec::new();
    for document in serde_yaml::Deserializer::from_str(text) {
        let value = serde_yaml::Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }

        let mut object = serde_yaml::from_value::<DynamicObject>(value)?;
        if object.metadata.namespace.as_deref().is_none_or(str::is_empty) {
            object.metadata.namespace = Some(namespace.to_owned());
        }

        objects.push(object);
    }

    Ok(objects)
}
