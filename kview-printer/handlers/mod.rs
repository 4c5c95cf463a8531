use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::DynamicObject;
use kview_kube::{Kind, PathBuilder, utils::from_dynamic};
use kview_view::{Labels, Link, TableRow, Timestamp};
use serde::de::DeserializeOwned;

use crate::{PrinterError, derived::controller_of};

pub use self::pod::{PodConfiguration, PodHandler};
pub use self::replication_controller::{ReplicationControllerConfiguration, ReplicationControllerHandler};
pub use self::service_account::{ServiceAccountConfiguration, ServiceAccountHandler};

mod pod;
mod replication_controller;
mod service_account;

#[cfg(test)]
pub(crate) mod fixtures;

pub const POD: &str = "Pod";
pub const REPLICATION_CONTROLLER: &str = "ReplicationController";
pub const SECRET: &str = "Secret";
pub const SERVICE_ACCOUNT: &str = "ServiceAccount";

/// Parses [`DynamicObject`] into the typed resource handled by the caller.
fn parse<K: DeserializeOwned>(object: &DynamicObject, kind: &str) -> Result<K, PrinterError> {
    from_dynamic(object).map_err(|error| {
        PrinterError::InvalidObject(format!(
            "{}/{} is not a valid {}: {}",
            object.metadata.namespace.as_deref().unwrap_or_default(),
            object.metadata.name.as_deref().unwrap_or_default(),
            kind,
            error
        ))
    })
}

/// Returns the `Name`, `Labels` and `Age` cells shared by all list tables.\
/// **Note** that the name link is required, so failing to build its path fails the row.
fn common_cells(metadata: &ObjectMeta, kind: &str, paths: &PathBuilder) -> Result<TableRow, PrinterError> {
    let name = metadata.name.as_deref().unwrap_or_default();
    let namespace = metadata.namespace.as_deref().unwrap_or_default();
    let path = paths.build(namespace, &kind.into(), name)?;

    Ok(TableRow::new()
        .with("Name", Link::new("", name, path))
        .with("Labels", Labels::from(metadata.labels.as_ref()))
        .with_opt("Age", metadata.creation_timestamp.as_ref().map(Timestamp::from)))
}

/// Returns link to the object in `namespace`, or `None` if its path cannot be built.
fn link_to(paths: &PathBuilder, namespace: &str, kind: &Kind, name: &str) -> Option<Link> {
    match paths.build(namespace, kind, name) {
        Ok(path) => Some(Link::new("", name, path)),
        Err(error) => {
            tracing::warn!("Cannot link to {} {}/{}: {}", kind, namespace, name, error);
            None
        },
    }
}

/// Returns link to the controller of the object.\
/// **Note** that the owner always lives in the namespace of the owned object.
fn controlled_by(metadata: &ObjectMeta, paths: &PathBuilder) -> Option<Link> {
    let owner = controller_of(metadata)?;
    let namespace = metadata.namespace.as_deref().unwrap_or_default();
    let kind = Kind::from_api_version(&owner.kind, &owner.api_version);

    link_to(paths, namespace, &kind, &owner.name)
}

/// Returns `Some` with owned text if it is not empty.
fn non_empty_text(value: Option<&String>) -> Option<String> {
    kview_common::non_empty(value.map(String::as_str)).map(String::from)
}
