use k8s_openapi::api::core::v1::{
    Container, ContainerStatus, ObjectReference, Pod, PodSpec, PodStatus, PodTemplateSpec, ReplicationController,
    ReplicationControllerSpec, ReplicationControllerStatus, Secret, ServiceAccount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference, Time};
use k8s_openapi::chrono::{DateTime, Utc};
use kube::api::DynamicObject;
use kview_kube::utils::to_dynamic;
use std::collections::BTreeMap;

pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1547211430, 0).unwrap()
}

pub fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

pub fn dynamic<K: serde::Serialize>(resource: &K) -> DynamicObject {
    to_dynamic(resource).unwrap()
}

pub fn meta(namespace: &str, name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_owned()),
        namespace: Some(namespace.to_owned()),
        creation_timestamp: Some(Time(now())),
        ..Default::default()
    }
}

pub fn controller(kind: &str, name: &str) -> OwnerReference {
    OwnerReference {
        api_version: "v1".to_owned(),
        kind: kind.to_owned(),
        name: name.to_owned(),
        controller: Some(true),
        ..Default::default()
    }
}

pub fn container(name: &str, image: &str) -> Container {
    Container {
        name: name.to_owned(),
        image: Some(image.to_owned()),
        ..Default::default()
    }
}

pub fn container_status(name: &str, image: &str, ready: bool, restarts: i32) -> ContainerStatus {
    ContainerStatus {
        name: name.to_owned(),
        image: image.to_owned(),
        ready,
        restart_count: restarts,
        ..Default::default()
    }
}

/// Pending pod named `pod` with two containers, one of them ready.
pub fn list_pod() -> Pod {
    Pod {
        metadata: ObjectMeta {
            labels: Some(labels(&[("app", "testing")])),
            ..meta("default", "pod")
        },
        spec: Some(PodSpec {
            containers: vec![
                container("nginx", "nginx:1.15"),
                container("kuard", "gcr.io/kuar-demo/kuard-amd64:1"),
            ],
            node_name: Some("node".to_owned()),
            ..Default::default()
        }),
        status: Some(PodStatus {
            phase: Some("Pending".to_owned()),
            container_statuses: Some(vec![
                container_status("nginx", "nginx:1.15", true, 0),
                container_status("kuard", "gcr.io/kuar-demo/kuard-amd64:1", false, 0),
            ]),
            ..Default::default()
        }),
    }
}

/// Terminating pod with every configuration field set.
pub fn valid_pod() -> Pod {
    Pod {
        metadata: ObjectMeta {
            owner_references: Some(vec![controller("ReplicationController", "myreplicationcontroller")]),
            deletion_timestamp: Some(Time(now())),
            deletion_grace_period_seconds: Some(30),
            ..meta("default", "pod")
        },
        spec: Some(PodSpec {
            priority: Some(1000000),
            priority_class_name: Some("high-priority".to_owned()),
            service_account_name: Some("default".to_owned()),
            ..Default::default()
        }),
        status: Some(PodStatus {
            start_time: Some(Time(now())),
            phase: Some("Running".to_owned()),
            reason: Some("SleepExpired".to_owned()),
            message: Some("Sleep expired".to_owned()),
            nominated_node_name: Some("mynode".to_owned()),
            qos_class: Some("Guaranteed".to_owned()),
            ..Default::default()
        }),
    }
}

pub fn phase_pod(namespace: &str, name: &str, app: &str, phase: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            labels: Some(labels(&[("app", app)])),
            ..meta(namespace, name)
        },
        status: Some(PodStatus {
            phase: Some(phase.to_owned()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn replication_controller(name: &str, app: &str) -> ReplicationController {
    ReplicationController {
        metadata: ObjectMeta {
            labels: Some(labels(&[("app", app)])),
            ..meta("default", name)
        },
        spec: Some(ReplicationControllerSpec {
            replicas: Some(3),
            selector: Some(labels(&[("app", app)])),
            template: Some(PodTemplateSpec {
                metadata: None,
                spec: Some(PodSpec {
                    containers: vec![container("nginx", "nginx:1.15")],
                    ..Default::default()
                }),
            }),
            ..Default::default()
        }),
        status: Some(ReplicationControllerStatus {
            replicas: 3,
            ready_replicas: Some(2),
            ..Default::default()
        }),
    }
}

pub fn service_account(name: &str, secrets: &[&str], pull_secrets: &[&str]) -> ServiceAccount {
    ServiceAccount {
        metadata: meta("default", name),
        secrets: Some(
            secrets
                .iter()
                .map(|s| ObjectReference {
                    name: Some((*s).to_owned()),
                    ..Default::default()
                })
                .collect(),
        ),
        image_pull_secrets: Some(
            pull_secrets
                .iter()
                .map(|s| k8s_openapi::api::core::v1::LocalObjectReference { name: (*s).to_owned() })
                .collect(),
        ),
        ..Default::default()
    }
}

pub fn secret(name: &str, secret_type: &str) -> Secret {
    Secret {
        metadata: meta("default", name),
        type_: Some(secret_type.to_owned()),
        ..Default::default()
    }
}
