use super::*;

#[test]
fn kind_with_group_test() {
    let kind: Kind = "Pod".into();
    assert_eq!("Pod", kind.name());
    assert!(!kind.has_group());
    assert_eq!("", kind.group());

    let kind: Kind = "Deployment.apps".into();
    assert_eq!("Deployment", kind.name());
    assert!(kind.has_group());
    assert_eq!("apps", kind.group());
    assert_eq!("Deployment.apps", kind.as_str());
}

#[test]
fn from_api_version_test() {
    assert_eq!(Kind::from("Pod"), Kind::from_api_version("Pod", CORE_VERSION));
    assert_eq!(Kind::from("Pod"), Kind::from_api_version("Pod", ""));
    assert_eq!(Kind::from("Deployment.apps"), Kind::from_api_version("Deployment", "apps/v1"));
    assert_eq!(
        Kind::from("CronJob.batch"),
        Kind::from_api_version("CronJob", "batch/v1beta1")
    );
}

#[test]
fn from_type_meta_test() {
    let types = TypeMeta {
        api_version: "v1".to_owned(),
        kind: "ServiceAccount".to_owned(),
    };
    assert_eq!(Some(Kind::from("ServiceAccount")), Kind::from_type_meta(&types));

    let types = TypeMeta {
        api_version: "v1".to_owned(),
        kind: String::new(),
    };
    assert_eq!(None, Kind::from_type_meta(&types));
}
