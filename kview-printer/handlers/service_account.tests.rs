use kview_kube::{CacheError, CacheQuery, MemoryCache};
use kview_view::{Component, Labels, Link, SummarySection, TableRow, Timestamp};
use std::sync::Arc;

use super::*;
use crate::handlers::fixtures::*;

#[test]
fn service_account_list_test() {
    let options = Options::new(Arc::new(MemoryCache::default()));
    let account = service_account("builder", &["builder-token-abc", "registry"], &[]);

    let got = ServiceAccountHandler.list(&[dynamic(&account)], &options).unwrap();

    let mut expected = Table::new("Service Accounts", TableCol::from_names(&COLUMNS));
    expected
        .add(
            TableRow::new()
                .with(
                    "Name",
                    Link::new(
                        "",
                        "builder",
                        "/content/overview/namespace/default/config-and-storage/service-accounts/builder",
                    ),
                )
                .with("Labels", Labels::default())
                .with("Secrets", Text::new("2"))
                .with("Age", Timestamp::new(now())),
        )
        .unwrap();

    assert_eq!(expected, got);
}

#[test]
fn service_account_configuration_test() {
    let cache = MemoryCache::from_objects([
        dynamic(&secret("builder-token-abc", TOKEN_SECRET_TYPE)),
        dynamic(&secret("registry", "kubernetes.io/dockerconfigjson")),
    ])
    .unwrap();
    let account = service_account("builder", &["builder-token-abc", "registry", "missing-token"], &["registry"]);

    let summary = ServiceAccountConfiguration::new(Some(&account))
        .with_cache(&cache)
        .create()
        .unwrap();

    let expected = Summary::new(
        "Configuration",
        vec![
            SummarySection::new("Image Pull Secrets", Text::new("registry")),
            SummarySection::new("Mountable Secrets", Text::new("builder-token-abc, registry, missing-token")),
            SummarySection::new("Tokens", Text::new("builder-token-abc")),
        ],
    );
    assert_eq!(expected, summary);
}

#[test]
fn service_account_configuration_no_secrets_test() {
    let options = Options::new(Arc::new(MemoryCache::default()));
    let account = service_account("default", &[], &[]);

    let summary = ServiceAccountHandler.configuration(&dynamic(&account), &options).unwrap();

    assert!(summary.sections.is_empty());
    assert_eq!("Configuration", summary.title);
}

#[test]
fn service_account_configuration_nil_test() {
    assert_eq!(Err(PrinterError::NilObject), ServiceAccountConfiguration::new(None).create());
}

#[test]
fn service_account_configuration_handler_test() {
    let options = Options::new(Arc::new(
        MemoryCache::from_objects([dynamic(&secret("default-token-x", TOKEN_SECRET_TYPE))]).unwrap(),
    ));
    let account = service_account("default", &["default-token-x"], &[]);

    let summary = ServiceAccountHandler.configuration(&dynamic(&account), &options).unwrap();

    assert_eq!(
        Some(&Component::Text(Text::new("default-token-x"))),
        summary.get("Tokens")
    );
}

struct UnavailableCache;

impl ObjectCache for UnavailableCache {
    fn get(&self, _: &CacheKey) -> Result<Option<DynamicObject>, CacheError> {
        Err(CacheError::Unavailable("cache is syncing".to_owned()))
    }

    fn list(&self, _: &CacheQuery) -> Result<Vec<DynamicObject>, CacheError> {
        Ok(Vec::new())
    }
}

#[test]
fn service_account_configuration_cache_error_test() {
    let account = service_account("builder", &["builder-token-abc"], &[]);

    assert_eq!(
        Err(PrinterError::Cache(CacheError::Unavailable("cache is syncing".to_owned()))),
        ServiceAccountConfiguration::new(Some(&account))
            .with_cache(&UnavailableCache)
            .create()
    );
}

#[test]
fn service_account_configuration_without_secrets_skips_cache_test() {
    let account = service_account("builder", &[], &[]);

    let summary = ServiceAccountConfiguration::new(Some(&account))
        .with_cache(&UnavailableCache)
        .create()
        .unwrap();

    assert!(summary.headers().is_empty());
}
