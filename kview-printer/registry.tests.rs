use kview_kube::MemoryCache;
use kview_view::{Summary, Table, TableCol};
use rstest::rstest;
use std::sync::Arc;

use super::*;
use crate::PodConfiguration;
use crate::handlers::fixtures::*;

struct EmptyHandler;

impl PrinterHandler for EmptyHandler {
    fn list(&self, _objects: &[DynamicObject], _options: &Options) -> Result<Table, PrinterError> {
        Ok(Table::new("Empty", TableCol::from_names(&["Name"])))
    }

    fn configuration(&self, _object: &DynamicObject, _options: &Options) -> Result<Summary, PrinterError> {
        Ok(Summary::new("Empty", Vec::new()))
    }

    fn requires_items(&self) -> bool {
        true
    }
}

fn options() -> Options {
    Options::new(Arc::new(MemoryCache::default()))
}

#[test]
fn with_defaults_test() {
    let registry = Registry::with_defaults();

    let kinds = registry.kinds().into_iter().map(Kind::as_str).collect::<Vec<_>>();
    assert_eq!(vec!["Pod", "ReplicationController", "ServiceAccount"], kinds);
}

#[test]
fn register_duplicate_test() {
    let mut registry = Registry::default();

    assert_eq!(Ok(()), registry.register("Pod", PodHandler));
    assert_eq!(
        Err(PrinterError::DuplicateHandler("Pod".to_owned())),
        registry.register("Pod", EmptyHandler)
    );
    assert_eq!(Ok(()), registry.register("Pod.example.com", EmptyHandler));
}

#[test]
fn render_unsupported_kind_test() {
    let registry = Registry::default();

    let result = registry.render(Some(&dynamic(&list_pod())), &options());

    assert_eq!(Err(PrinterError::UnsupportedKind("Pod".to_owned())), result);
}

#[rstest]
#[case(None, "object")]
#[case(Some("kind"), "kind")]
#[case(Some("name"), "name")]
fn render_invalid_input_test(#[case] clear: Option<&str>, #[case] missing: &'static str) {
    let registry = Registry::with_defaults();
    let mut object = dynamic(&list_pod());
    match clear {
        Some("kind") => object.types = None,
        Some("name") => object.metadata.name = Some(String::new()),
        _ => (),
    }

    let object = clear.map(|_| &object);
    assert_eq!(Err(PrinterError::InvalidInput(missing)), registry.render(object, &options()));
}

#[test]
fn render_pod_test() {
    let registry = Registry::with_defaults();
    let pod = valid_pod();

    let got = registry.render(Some(&dynamic(&pod)), &options()).unwrap();
    let expected = PodConfiguration::new(Some(&pod)).create().unwrap();

    assert_eq!(Component::Summary(expected), got);
}

#[test]
fn render_is_idempotent_test() {
    let registry = Registry::with_defaults();
    let object = dynamic(&valid_pod());
    let options = options();

    assert_eq!(
        registry.render(Some(&object), &options),
        registry.render(Some(&object), &options)
    );
}

#[test]
fn render_list_test() {
    let registry = Registry::with_defaults();
    let pods = vec![list_pod()];

    let got = registry.render_list(&POD.into(), &[dynamic(&pods[0])], &options()).unwrap();
    let expected = PodHandler::table(&pods, &options().paths).unwrap();

    assert_eq!(Component::Table(expected), got);
}

#[test]
fn render_list_empty_test() {
    let mut registry = Registry::with_defaults();
    registry.register("Empty", EmptyHandler).unwrap();

    let pods = registry.render_list(&POD.into(), &[], &options()).unwrap();
    assert!(matches!(pods, Component::Table(table) if table.is_empty()));

    assert_eq!(
        Err(PrinterError::EmptyList("Empty".to_owned())),
        registry.render_list(&"Empty".into(), &[], &options())
    );
}

#[test]
fn render_list_mixed_kinds_test() {
    let registry = Registry::with_defaults();
    let objects = [dynamic(&list_pod()), dynamic(&service_account("default", &[], &[]))];

    let result = registry.render_list(&POD.into(), &objects, &options());

    assert_eq!(
        Err(PrinterError::InvalidObject("default/default is not a Pod".to_owned())),
        result
    );
}

#[test]
fn render_list_unsupported_kind_test() {
    let registry = Registry::with_defaults();

    let result = registry.render_list(&"Deployment.apps".into(), &[], &options());

    assert_eq!(Err(PrinterError::UnsupportedKind("Deployment.apps".to_owned())), result);
}
