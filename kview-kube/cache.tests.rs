use k8s_openapi::api::core::v1::{Pod, ServiceAccount};
use kube::api::ObjectMeta;

use crate::utils::to_dynamic;

use super::*;

fn pod(namespace: &str, name: &str, app: &str) -> DynamicObject {
    to_dynamic(&Pod {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            namespace: Some(namespace.to_owned()),
            labels: Some([("app".to_owned(), app.to_owned())].into()),
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn get_test() {
    let cache = MemoryCache::from_objects([pod("default", "a", "web"), pod("other", "a", "web")]).unwrap();

    assert_eq!(2, cache.len());
    let found = cache.get(&CacheKey::new("default", "Pod", "a")).unwrap().unwrap();
    assert_eq!(Some("default"), found.metadata.namespace.as_deref());
    assert_eq!(None, cache.get(&CacheKey::new("default", "Pod", "b")).unwrap());
    assert_eq!(None, cache.get(&CacheKey::new("default", "ServiceAccount", "a")).unwrap());
}

#[test]
fn list_test() {
    let account = to_dynamic(&ServiceAccount {
        metadata: ObjectMeta {
            name: Some("default".to_owned()),
            namespace: Some("default".to_owned()),
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();
    let cache = MemoryCache::from_objects([
        pod("default", "c", "web"),
        pod("default", "a", "web"),
        pod("default", "b", "db"),
        pod("other", "d", "web"),
        account,
    ])
    .unwrap();

    let query = CacheQuery::new("default", "Pod").with_selector([("app".to_owned(), "web".to_owned())].into());
    let names = cache
        .list(&query)
        .unwrap()
        .iter()
        .map(|o| o.metadata.name.clone().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(vec!["a", "c"], names);

    assert_eq!(3, cache.list(&CacheQuery::new("default", "Pod")).unwrap().len());
    assert_eq!(1, cache.list(&CacheQuery::new("default", "ServiceAccount")).unwrap().len());
}

#[test]
fn store_and_remove_test() {
    let cache = MemoryCache::default();
    assert!(cache.is_empty());

    cache.store(pod("default", "a", "web")).unwrap();
    cache.store(pod("default", "a", "db")).unwrap();
    assert_eq!(1, cache.len());

    let key = CacheKey::new("default", "Pod", "a");
    assert!(cache.remove(&key).unwrap().is_some());
    assert!(cache.remove(&key).unwrap().is_none());
    assert!(cache.is_empty());
}

#[test]
fn store_invalid_object_test() {
    let mut object = pod("default", "a", "web");
    object.metadata.name = None;
    assert!(matches!(MemoryCache::default().store(object), Err(CacheError::InvalidObject(_))));

    let mut object = pod("default", "a", "web");
    object.types = None;
    assert!(matches!(MemoryCache::default().store(object), Err(CacheError::InvalidObject(_))));
}
