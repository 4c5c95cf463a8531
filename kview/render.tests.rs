use kview_kube::{MemoryCache, PathBuilder};
use kview_view::Text;
use rstest::rstest;
use std::sync::Arc;

use super::*;
use crate::manifests;

const MANIFEST: &str = r#"
apiVersion: v1
kind: ServiceAccount
metadata:
  name: builder
secrets:
  - name: builder-token-abc
  - name: registry
---
apiVersion: v1
kind: Secret
metadata:
  name: builder-token-abc
type: kubernetes.io/service-account-token
---
apiVersion: v1
kind: Secret
metadata:
  name: registry
type: Opaque
"#;

fn render(text: &str) -> Result<Vec<Component>, PrinterError> {
    let objects = manifests::parse(text, "default").unwrap();
    let cache = MemoryCache::from_objects(objects.iter().cloned()).unwrap();
    let options = Options::new(Arc::new(cache)).with_paths(PathBuilder::default());

    render_objects(&Registry::with_defaults(), &objects, &options)
}

#[test]
fn render_objects_resolves_tokens_test() {
    let components = render(MANIFEST).unwrap();

    assert_eq!(1, components.len());
    let Component::Summary(summary) = &components[0] else {
        panic!("expected summary, got {}", components[0].type_name());
    };
    assert_eq!(
        Some(&Component::Text(Text::new("builder-token-abc, registry"))),
        summary.get("Mountable Secrets")
    );
    assert_eq!(Some(&Component::Text(Text::new("builder-token-abc"))), summary.get("Tokens"));
}

#[rstest]
#[case("", 0)]
#[case("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: settings\n", 0)]
#[case("apiVersion: v1\nkind: Pod\nmetadata:\n  name: nginx\n", 1)]
fn render_objects_count_test(#[case] text: &str, #[case] expected: usize) {
    assert_eq!(expected, render(text).unwrap().len());
}

#[test]
fn render_objects_invalid_pod_test() {
    let text = "apiVersion: v1\nkind: Pod\nmetadata:\n  name: nginx\nspec:\n  containers: 7\n";

    assert!(matches!(render(text), Err(PrinterError::InvalidObject(_))));
}
