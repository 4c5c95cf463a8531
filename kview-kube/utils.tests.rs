use k8s_openapi::api::core::v1::Pod;
use kube::api::ObjectMeta;

use super::*;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn labels_match_test() {
    let labels = map(&[("app", "web"), ("tier", "front")]);

    assert!(labels_match(&map(&[]), None));
    assert!(labels_match(&map(&[]), Some(&labels)));
    assert!(labels_match(&map(&[("app", "web")]), Some(&labels)));
    assert!(!labels_match(&map(&[("app", "db")]), Some(&labels)));
    assert!(!labels_match(&map(&[("app", "web"), ("env", "prod")]), Some(&labels)));
    assert!(!labels_match(&map(&[("app", "web")]), None));
}

#[test]
fn dynamic_conversion_test() {
    let pod = Pod {
        metadata: ObjectMeta {
            name: Some("pod".to_owned()),
            namespace: Some("default".to_owned()),
            ..Default::default()
        },
        ..Default::default()
    };

    let object = to_dynamic(&pod).unwrap();
    let types = object.types.as_ref().unwrap();
    assert_eq!("Pod", types.kind);
    assert_eq!("v1", types.api_version);
    assert_eq!(Some("pod"), object.metadata.name.as_deref());

    let parsed: Pod = from_dynamic(&object).unwrap();
    assert_eq!(pod, parsed);
}
