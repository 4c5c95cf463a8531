use kview_kube::{CacheError, CacheKey, MemoryCache};
use kview_view::{Component, Labels, Link, SummarySection, TableRow, Timestamp};
use std::sync::Arc;

use super::*;
use crate::handlers::fixtures::*;

struct FailingCache;

impl ObjectCache for FailingCache {
    fn get(&self, _: &CacheKey) -> Result<Option<DynamicObject>, CacheError> {
        Err(CacheError::Unavailable("connection refused".to_owned()))
    }

    fn list(&self, _: &CacheQuery) -> Result<Vec<DynamicObject>, CacheError> {
        Err(CacheError::Unavailable("connection refused".to_owned()))
    }
}

fn cache_with_pods() -> MemoryCache {
    MemoryCache::from_objects([
        dynamic(&phase_pod("default", "web-1", "web", "Running")),
        dynamic(&phase_pod("default", "web-2", "web", "Running")),
        dynamic(&phase_pod("default", "web-3", "web", "Pending")),
        dynamic(&phase_pod("default", "web-4", "web", "Failed")),
        dynamic(&phase_pod("default", "db-1", "db", "Running")),
        dynamic(&phase_pod("other", "web-5", "web", "Succeeded")),
    ])
    .unwrap()
}

#[test]
fn replication_controller_list_test() {
    let options = Options::new(Arc::new(MemoryCache::default()));
    let got = ReplicationControllerHandler
        .list(&[dynamic(&replication_controller("web", "web"))], &options)
        .unwrap();

    let mut containers = Containers::new();
    containers.add("nginx", "nginx:1.15");

    let mut expected = Table::new("Replication Controllers", TableCol::from_names(&COLUMNS));
    expected
        .add(
            TableRow::new()
                .with(
                    "Name",
                    Link::new(
                        "",
                        "web",
                        "/content/overview/namespace/default/workloads/replication-controllers/web",
                    ),
                )
                .with("Labels", Labels::new(labels(&[("app", "web")])))
                .with("Status", Text::new("2/3"))
                .with("Age", Timestamp::new(now()))
                .with("Containers", containers)
                .with("Selector", Labels::new(labels(&[("app", "web")]))),
        )
        .unwrap();

    assert_eq!(expected, got);
}

#[test]
fn replication_controller_configuration_test() {
    let cache = cache_with_pods();
    let rc = replication_controller("web", "web");

    let summary = ReplicationControllerConfiguration::new(Some(&rc))
        .with_cache(&cache)
        .create()
        .unwrap();

    let expected = Summary::new(
        "Configuration",
        vec![
            SummarySection::new("Replica Status", Text::new("Current 3 / Desired 3")),
            SummarySection::new("Replicas", Text::new("3 Desired")),
            SummarySection::new(
                "Pod Status",
                Text::new("2 Running / 1 Waiting / 0 Succeeded / 1 Failed"),
            ),
        ],
    );
    assert_eq!(expected, summary);
}

#[test]
fn replication_controller_configuration_without_cache_test() {
    let mut rc = replication_controller("web", "web");
    rc.metadata.owner_references = Some(vec![controller("Deployment", "frontend")]);

    let summary = ReplicationControllerConfiguration::new(Some(&rc)).create().unwrap();

    assert_eq!(vec!["Controlled By", "Replica Status", "Replicas"], summary.headers());
}

#[test]
fn replication_controller_configuration_empty_selector_test() {
    let mut rc = replication_controller("web", "web");
    if let Some(spec) = rc.spec.as_mut() {
        spec.selector = None;
    }

    let summary = ReplicationControllerConfiguration::new(Some(&rc))
        .with_cache(&FailingCache)
        .create()
        .unwrap();

    assert_eq!(None, summary.get("Pod Status"));
}

#[test]
fn replication_controller_configuration_cache_error_test() {
    let rc = replication_controller("web", "web");
    let options = Options::new(Arc::new(FailingCache));

    assert_eq!(
        Err(PrinterError::Cache(CacheError::Unavailable("connection refused".to_owned()))),
        ReplicationControllerHandler.configuration(&dynamic(&rc), &options)
    );
}

#[test]
fn replication_controller_configuration_nil_test() {
    assert_eq!(
        Err(PrinterError::NilObject),
        ReplicationControllerConfiguration::new(None).create()
    );
}

#[test]
fn replication_controller_handler_uses_cache_test() {
    let options = Options::new(Arc::new(cache_with_pods()));
    let summary = ReplicationControllerHandler
        .configuration(&dynamic(&replication_controller("db", "db")), &options)
        .unwrap();

    assert_eq!(
        Some(&Component::Text(Text::new("1 Running / 0 Waiting / 0 Succeeded / 0 Failed"))),
        summary.get("Pod Status")
    );
}
