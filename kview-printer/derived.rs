use k8s_openapi::api::core::v1::{Container, ContainerStatus, Pod};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference, Time};
use std::collections::BTreeMap;

use crate::quantity::ResourceQuantity;

#[cfg(test)]
#[path = "./derived.tests.rs"]
mod derived_tests;

pub const QOS_GUARANTEED: &str = "Guaranteed";
pub const QOS_BURSTABLE: &str = "Burstable";
pub const QOS_BEST_EFFORT: &str = "BestEffort";

const QOS_RESOURCES: [&str; 2] = ["cpu", "memory"];

/// Returns `R/N` where `R` is the number of ready container statuses and `N` the number of `containers`.
pub fn ready_ratio(statuses: &[ContainerStatus], containers: usize) -> String {
    let ready = statuses.iter().filter(|s| s.ready).count();
    format!("{ready}/{containers}")
}

/// Returns sum of restart counts of all containers.
pub fn total_restarts(statuses: &[ContainerStatus]) -> i64 {
    statuses.iter().map(|s| i64::from(s.restart_count)).sum()
}

/// Formats grace period, e.g. `30s`.
pub fn grace_period(seconds: i64) -> String {
    format!("{seconds}s")
}

/// Deletion state of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Termination<'a> {
    pub deleted_at: &'a Time,
    pub grace_period: Option<i64>,
}

/// Returns [`Termination`] if the object is being deleted.
pub fn termination(metadata: &ObjectMeta) -> Option<Termination<'_>> {
    metadata.deletion_timestamp.as_ref().map(|deleted_at| Termination {
        deleted_at,
        grace_period: metadata.deletion_grace_period_seconds,
    })
}

/// Returns the first owner reference marked as the controller.
pub fn controller_of(metadata: &ObjectMeta) -> Option<&OwnerReference> {
    metadata
        .owner_references
        .as_ref()?
        .iter()
        .find(|o| o.controller == Some(true))
}

/// Returns QoS class reported in the pod status, `None` if it is not set.
pub fn qos_class(pod: &Pod) -> Option<&str> {
    kview_common::non_empty(pod.status.as_ref().and_then(|s| s.qos_class.as_deref()))
}

/// Computes pod's QoS class from resources of its containers and init containers.\
/// Returns `None` if the pod has no spec.
pub fn pod_qos_class(pod: &Pod) -> Option<&'static str> {
    let spec = pod.spec.as_ref()?;
    let containers = spec.containers.iter().chain(spec.init_containers.iter().flatten());
    Some(compute_qos_class(containers))
}

/// Computes QoS class from requests and limits of the `containers`.\
/// **Note** that quantities which cannot be parsed make the pod `Burstable` at best.
pub fn compute_qos_class<'a>(containers: impl Iterator<Item = &'a Container>) -> &'static str {
    let mut requests = BTreeMap::<&str, u128>::new();
    let mut limits = BTreeMap::<&str, u128>::new();
    let mut is_guaranteed = true;

    for container in containers {
        let resources = container.resources.as_ref();

        for (name, quantity) in qos_quantities(resources.and_then(|r| r.requests.as_ref())) {
            match quantity {
                Some(quantity) => *requests.entry(name).or_default() += quantity.nanos,
                None => is_guaranteed = false,
            }
        }

        let mut limits_found = 0;
        for (name, quantity) in qos_quantities(resources.and_then(|r| r.limits.as_ref())) {
            match quantity {
                Some(quantity) => {
                    limits_found += 1;
                    *limits.entry(name).or_default() += quantity.nanos;
                },
                None => is_guaranteed = false,
            }
        }

        if limits_found < QOS_RESOURCES.len() {
            is_guaranteed = false;
        }
    }

    if requests.is_empty() && limits.is_empty() {
        return QOS_BEST_EFFORT;
    }

    if is_guaranteed && requests.len() == limits.len() && requests.iter().all(|(name, request)| limits.get(name) == Some(request)) {
        return QOS_GUARANTEED;
    }

    QOS_BURSTABLE
}

/// Returns non-zero `cpu` and `memory` quantities, `None` for the ones that cannot be parsed.
fn qos_quantities(
    quantities: Option<&BTreeMap<String, Quantity>>,
) -> impl Iterator<Item = (&str, Option<ResourceQuantity>)> {
    quantities
        .into_iter()
        .flatten()
        .filter(|(name, _)| QOS_RESOURCES.contains(&name.as_str()))
        .map(|(name, quantity)| (name.as_str(), ResourceQuantity::try_from(quantity).ok()))
        .filter(|(_, quantity)| !quantity.is_some_and(|q| q.is_zero()))
}

/// Returns `<ready>/<desired>` replicas.
pub fn replica_ratio(ready: Option<i32>, desired: Option<i32>) -> String {
    format!("{}/{}", ready.unwrap_or_default(), desired.unwrap_or(1))
}

/// Number of pods in each phase.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PodPhaseCounts {
    pub running: usize,
    pub waiting: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl PodPhaseCounts {
    /// Counts pods by their phase, pods in `Pending` (or with no phase) count as waiting.
    pub fn from_pods<'a>(pods: impl IntoIterator<Item = &'a Pod>) -> Self {
        let mut counts = Self::default();
        for pod in pods {
            match pod.status.as_ref().and_then(|s| s.phase.as_deref()) {
                Some("Running") => counts.running += 1,
                Some("Succeeded") => counts.succeeded += 1,
                Some("Failed") => counts.failed += 1,
                Some("Unknown") => (),
                _ => counts.waiting += 1,
            }
        }

        counts
    }
}

impl std::fmt::Display for PodPhaseCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Running / {} Waiting / {} Succeeded / {} Failed",
            self.running, self.waiting, self.succeeded, self.failed
        )
    }
}
