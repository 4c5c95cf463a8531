use k8s_openapi::api::core::v1::{PodSpec, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};
use kview_kube::MemoryCache;
use kview_view::{Component, Labels, Link, SummarySection, TableRow};
use std::sync::Arc;

use super::*;
use crate::handlers::fixtures::*;

fn options() -> Options {
    Options::new(Arc::new(MemoryCache::default()))
}

#[test]
fn pod_list_handler_test() {
    let got = PodHandler.list(&[dynamic(&list_pod())], &options()).unwrap();

    let mut expected = Table::new("Pods", TableCol::from_names(&COLUMNS));
    expected
        .add(
            TableRow::new()
                .with("Name", Link::new("", "pod", "/content/overview/namespace/default/workloads/pods/pod"))
                .with("Labels", Labels::new(labels(&[("app", "testing")])))
                .with("Ready", Text::new("1/2"))
                .with("Status", Text::new("Pending"))
                .with("Restarts", Text::new("0"))
                .with("Age", Timestamp::new(now()))
                .with("Node", Text::new("node")),
        )
        .unwrap();

    assert_eq!(expected, got);
}

#[test]
fn pod_list_preserves_order_test() {
    let mut first = list_pod();
    first.metadata.name = Some("zeta".to_owned());
    let mut second = list_pod();
    second.metadata.name = Some("alpha".to_owned());

    let table = PodHandler::table(&[first, second], &PathBuilder::default()).unwrap();

    let names = table
        .rows
        .iter()
        .map(|r| match r.get("Name") {
            Some(Component::Link(link)) => link.text.clone(),
            _ => String::new(),
        })
        .collect::<Vec<_>>();
    assert_eq!(vec!["zeta", "alpha"], names);
}

#[test]
fn pod_list_counts_test() {
    let mut pod = list_pod();
    if let Some(status) = pod.status.as_mut() {
        status.container_statuses = Some(vec![
            container_status("a", "a", true, 2),
            container_status("b", "b", true, 3),
            container_status("c", "c", false, 0),
        ]);
    }
    if let Some(spec) = pod.spec.as_mut() {
        spec.containers = vec![container("a", "a"), container("b", "b"), container("c", "c")];
    }

    let table = PodHandler::table(&[pod], &PathBuilder::default()).unwrap();

    assert_eq!(Some(&Component::Text(Text::new("2/3"))), table.rows[0].get("Ready"));
    assert_eq!(Some(&Component::Text(Text::new("5"))), table.rows[0].get("Restarts"));
}

#[test]
fn pod_list_no_containers_test() {
    let pod = Pod {
        metadata: ObjectMeta {
            creation_timestamp: None,
            ..meta("default", "empty")
        },
        ..Default::default()
    };

    let table = PodHandler::table(&[pod], &PathBuilder::default()).unwrap();

    let row = &table.rows[0];
    assert_eq!(Some(&Component::Text(Text::new("0/0"))), row.get("Ready"));
    assert_eq!(Some(&Component::Text(Text::new("0"))), row.get("Restarts"));
    assert_eq!(Some(&Component::Text(Text::default())), row.get("Status"));
    assert_eq!(None, row.get("Age"));
}

#[test]
fn pod_list_empty_test() {
    let table = PodHandler.list(&[], &options()).unwrap();

    assert_eq!("Pods", table.title);
    assert_eq!(7, table.columns.len());
    assert!(table.is_empty());
}

#[test]
fn pod_list_missing_namespace_test() {
    let mut pod = list_pod();
    pod.metadata.namespace = None;

    assert_eq!(
        Err(PrinterError::Path(kview_kube::PathError::InvalidInput("namespace"))),
        PodHandler::table(&[list_pod(), pod], &PathBuilder::default())
    );
}

#[test]
fn pod_configuration_general_test() {
    let pod = valid_pod();
    let summary = PodConfiguration::new(Some(&pod)).create().unwrap();

    let expected = Summary::new(
        "Configuration",
        vec![
            SummarySection::new("Priority", Text::new("1000000")),
            SummarySection::new("PriorityClassName", Text::new("high-priority")),
            SummarySection::new("Start Time", Timestamp::new(now())),
            SummarySection::new("Status: Terminating", Timestamp::new(now())),
            SummarySection::new("Termination Grace Period", Text::new("30s")),
            SummarySection::new("Reason", Text::new("SleepExpired")),
            SummarySection::new("Message", Text::new("Sleep expired")),
            SummarySection::new(
                "Controlled By",
                Link::new(
                    "",
                    "myreplicationcontroller",
                    "/content/overview/namespace/default/workloads/replication-controllers/myreplicationcontroller",
                ),
            ),
            SummarySection::new("NominatedNodeName", Text::new("mynode")),
            SummarySection::new("QoS Class", Text::new("Guaranteed")),
            SummarySection::new(
                "Service Account",
                Link::new(
                    "",
                    "default",
                    "/content/overview/namespace/default/config-and-storage/service-accounts/default",
                ),
            ),
        ],
    );

    assert_eq!(expected, summary);
}

#[test]
fn pod_configuration_nil_test() {
    assert_eq!(Err(PrinterError::NilObject), PodConfiguration::new(None).create());
}

#[test]
fn pod_configuration_terminating_without_grace_period_test() {
    let pod = Pod {
        metadata: ObjectMeta {
            deletion_timestamp: Some(Time(now())),
            ..meta("default", "pod")
        },
        ..Default::default()
    };

    let summary = PodConfiguration::new(Some(&pod)).create().unwrap();

    assert_eq!(vec!["Status: Terminating"], summary.headers());
    assert_eq!(None, summary.get("Termination Grace Period"));
}

#[test]
fn pod_configuration_controller_only_test() {
    let mut pod = valid_pod();
    if let Some(owners) = pod.metadata.owner_references.as_mut() {
        owners[0].controller = Some(false);
        owners.push(controller("ReplicaSet", "web-7d9f"));
    }

    let summary = PodConfiguration::new(Some(&pod)).create().unwrap();

    assert_eq!(
        Some(&Component::Link(Link::new(
            "",
            "web-7d9f",
            "/content/overview/namespace/default/workloads/replica-sets/web-7d9f"
        ))),
        summary.get("Controlled By")
    );
}

#[test]
fn pod_configuration_unknown_owner_kind_test() {
    let mut pod = valid_pod();
    pod.metadata.owner_references = Some(vec![controller("Widget", "w")]);

    let summary = PodConfiguration::new(Some(&pod)).create().unwrap();

    assert_eq!(None, summary.get("Controlled By"));
    assert_eq!(10, summary.sections.len());
}

#[test]
fn pod_configuration_without_qos_status_test() {
    let mut container = container("nginx", "nginx:1.15");
    container.resources = Some(ResourceRequirements {
        requests: Some([("cpu".to_owned(), Quantity("100m".to_owned()))].into()),
        ..Default::default()
    });
    let pod = Pod {
        metadata: meta("default", "pod"),
        spec: Some(PodSpec {
            containers: vec![container],
            ..Default::default()
        }),
        status: None,
    };

    let summary = PodConfiguration::new(Some(&pod)).create().unwrap();

    assert!(summary.headers().is_empty());
}

#[test]
fn pod_configuration_service_account_only_test() {
    let pod = Pod {
        metadata: meta("default", "pod"),
        spec: Some(PodSpec {
            service_account_name: Some("default".to_owned()),
            ..Default::default()
        }),
        status: None,
    };

    let summary = PodConfiguration::new(Some(&pod)).create().unwrap();

    assert_eq!(vec!["Service Account"], summary.headers());
}

#[test]
fn pod_list_ready_without_statuses_test() {
    let mut pod = list_pod();
    if let Some(status) = pod.status.as_mut() {
        status.container_statuses = None;
    }

    let table = PodHandler::table(&[pod], &PathBuilder::default()).unwrap();

    assert_eq!(Some(&Component::Text(Text::new("0/2"))), table.rows[0].get("Ready"));
}

#[test]
fn pod_handler_configuration_test() {
    let summary = PodHandler.configuration(&dynamic(&valid_pod()), &options()).unwrap();

    assert_eq!(PodConfiguration::new(Some(&valid_pod())).create().unwrap(), summary);
}

#[test]
fn pod_handler_wrong_kind_test() {
    let object = dynamic(&replication_controller("rc", "web"));

    assert!(matches!(
        PodHandler.configuration(&object, &options()),
        Err(PrinterError::InvalidObject(_))
    ));
}
