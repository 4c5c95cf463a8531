use kview_kube::Kind;

use super::*;

#[test]
fn parse_multiple_documents_test() {
    let text = r#"
---
apiVersion: v1
kind: Pod
metadata:
  name: nginx
  namespace: web
spec:
  containers:
    - name: nginx
      image: nginx:1.15
---
---
apiVersion: v1
kind: ServiceAccount
metadata:
  name: builder
"#;

    let objects = parse(text, "default").unwrap();

    assert_eq!(2, objects.len());
    assert_eq!(Some(Kind::from("Pod")), Kind::from_object(&objects[0]));
    assert_eq!(Some("web"), objects[0].metadata.namespace.as_deref());
    assert_eq!(Some(Kind::from("ServiceAccount")), Kind::from_object(&objects[1]));
    assert_eq!(Some("default"), objects[1].metadata.namespace.as_deref());
}

#[test]
fn parse_empty_text_test() {
    assert!(parse("", "default").unwrap().is_empty());
}

#[test]
fn parse_invalid_document_test() {
    assert!(parse("- just\n- a list\n", "default").is_err());
}
