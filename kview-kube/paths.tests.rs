use rstest::rstest;

use super::*;

#[rstest]
#[case("/content/overview/namespace/default/workloads/pods/pod", "default", "Pod", "pod")]
#[case(
    "/content/overview/namespace/default/workloads/replication-controllers/myreplicationcontroller",
    "default",
    "ReplicationController",
    "myreplicationcontroller"
)]
#[case(
    "/content/overview/namespace/kube-system/config-and-storage/service-accounts/default",
    "kube-system",
    "ServiceAccount",
    "default"
)]
#[case("/content/overview/namespace/apps/workloads/deployments/web", "apps", "Deployment.apps", "web")]
#[case("/content/overview/namespace/web/rbac/role-bindings/view", "web", "RoleBinding.rbac.authorization.k8s.io", "view")]
fn build_test(#[case] expected: &str, #[case] namespace: &str, #[case] kind: &str, #[case] name: &str) {
    let paths = PathBuilder::default();
    assert_eq!(expected, paths.build(namespace, &kind.into(), name).unwrap());
}

#[rstest]
#[case(PathError::InvalidInput("namespace"), "", "Pod", "pod")]
#[case(PathError::InvalidInput("kind"), "default", "", "pod")]
#[case(PathError::InvalidInput("name"), "default", "Pod", "")]
#[case(PathError::UnknownKind("Widget.example.com".to_owned()), "default", "Widget.example.com", "w")]
fn build_error_test(#[case] expected: PathError, #[case] namespace: &str, #[case] kind: &str, #[case] name: &str) {
    let paths = PathBuilder::default();
    assert_eq!(Err(expected), paths.build(namespace, &kind.into(), name));
}

#[test]
fn custom_root_test() {
    let paths = PathBuilder::new("/dashboard/");
    assert_eq!("/dashboard", paths.root());
    assert_eq!(
        "/dashboard/namespace/default/workloads/pods/pod",
        paths.build("default", &"Pod".into(), "pod").unwrap()
    );
}

#[test]
fn build_segment_test() {
    let paths = PathBuilder::default();
    assert_eq!("/content/overview/namespace/ns", paths.build_segment("ns", None, Some("pods"), None));
    assert_eq!(
        "/content/overview/namespace/ns/workloads",
        paths.build_segment("ns", Some(Category::Workloads), None, Some("ignored"))
    );
    assert_eq!(
        "/content/overview/namespace/ns/rbac/roles",
        paths.build_segment("ns", Some(Category::Rbac), Some("roles"), None)
    );
}

#[test]
fn category_resources_test() {
    let kinds = Category::ConfigAndStorage.resources().map(|p| p.kind).collect::<Vec<_>>();
    assert_eq!(vec!["ConfigMap", "PersistentVolumeClaim", "Secret", "ServiceAccount"], kinds);
}
