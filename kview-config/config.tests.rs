use super::*;

#[test]
fn from_yaml_defaults_test() {
    let config = Config::from_yaml("context: staging").unwrap();

    assert_eq!("staging", config.context);
    assert_eq!(DEFAULT_CONTENT_ROOT, config.content_root);
    assert!(config.pretty);
    assert_eq!("Pod", config.resolve_kind("po"));
}

#[test]
fn from_yaml_error_test() {
    assert!(matches!(
        Config::from_yaml("pretty: [1, 2]"),
        Err(ConfigError::SerializationError(_))
    ));
}

#[test]
fn resolve_kind_test() {
    let config = Config::default();

    assert_eq!("ReplicationController", config.resolve_kind("RC"));
    assert_eq!("ServiceAccount", config.resolve_kind("sa"));
    assert_eq!("Deployment", config.resolve_kind("Deployment"));
}

#[test]
fn to_yaml_sorted_aliases_test() {
    let yaml = Config::default().to_yaml().unwrap();

    let po = yaml.find("po: Pod").unwrap();
    let rc = yaml.find("rc: ReplicationController").unwrap();
    let sa = yaml.find("sa: ServiceAccount").unwrap();
    assert!(po < rc && rc < sa);
    assert_eq!(Config::default(), Config::from_yaml(&yaml).unwrap());
}

#[tokio::test]
async fn load_or_default_missing_file_test() {
    let path = std::env::temp_dir().join("kview-config-that-does-not-exist.yaml");
    let config = Config::load_or_default(Some(&path)).await.unwrap();

    assert_eq!(Config::default(), config);
}

#[tokio::test]
async fn load_file_test() {
    let path = std::env::temp_dir().join(format!("kview-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "content_root: /custom\npretty: false\n").unwrap();

    let config = Config::load_or_default(Some(&path)).await;
    std::fs::write(&path, "pretty: [1, 2]\n").unwrap();
    let malformed = Config::load(&path).await;
    std::fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!("/custom", config.content_root);
    assert!(!config.pretty);
    assert_eq!(DEFAULT_CONTEXT, config.context);
    assert!(matches!(malformed, Err(ConfigError::SerializationError(_))));
}
