use k8s_openapi::serde_json::{self, json};

use crate::{SummarySection, TableCol, TableRow};

use super::*;

fn time() -> DateTime<Utc> {
    DateTime::from_timestamp(1547211430, 0).unwrap()
}

#[test]
fn link_json_test() {
    let link: Component = Link::new("", "pod", "/content/overview/namespace/default/workloads/pods/pod").into();

    assert_eq!(
        json!({
            "type": "link",
            "config": { "label": "", "text": "pod", "ref": "/content/overview/namespace/default/workloads/pods/pod" }
        }),
        serde_json::to_value(&link).unwrap()
    );
}

#[test]
fn timestamp_json_test() {
    let timestamp: Component = Timestamp::new(time()).into();

    assert_eq!(
        json!({ "type": "timestamp", "config": { "timestamp": 1547211430 } }),
        serde_json::to_value(&timestamp).unwrap()
    );
}

#[test]
fn summary_json_test() {
    let summary: Component = Summary::new(
        "Configuration",
        vec![SummarySection::new("Priority", Text::new("1000000"))],
    )
    .into();

    assert_eq!(
        json!({
            "type": "summary",
            "config": {
                "title": "Configuration",
                "sections": [
                    { "header": "Priority", "content": { "type": "text", "config": { "value": "1000000" } } }
                ]
            }
        }),
        serde_json::to_value(&summary).unwrap()
    );
}

#[test]
fn table_json_test() {
    let mut table = Table::new("Pods", TableCol::from_names(&["Name", "Labels"]));
    let labels = Labels::new([("b".to_owned(), "2".to_owned()), ("a".to_owned(), "1".to_owned())].into());
    table
        .add(TableRow::new().with("Name", Text::new("pod")).with("Labels", labels))
        .unwrap();

    let text = serde_json::to_string(&Component::from(table)).unwrap();
    assert_eq!(
        concat!(
            r#"{"type":"table","config":{"title":"Pods","#,
            r#""columns":[{"name":"Name","accessor":"Name"},{"name":"Labels","accessor":"Labels"}],"#,
            r#""rows":[{"Labels":{"type":"labels","config":{"labels":{"a":"1","b":"2"}}},"#,
            r#""Name":{"type":"text","config":{"value":"pod"}}}]}}"#
        ),
        text
    );
}

#[test]
fn containers_test() {
    let mut containers = Containers::new();
    containers.add("nginx", "nginx:1.15");
    containers.add("kuard", "gcr.io/kuar-demo/kuard-amd64:1");

    let component = Component::from(containers);
    assert_eq!("containers", component.type_name());
    assert_eq!(
        json!({
            "type": "containers",
            "config": { "containers": [
                { "name": "nginx", "image": "nginx:1.15" },
                { "name": "kuard", "image": "gcr.io/kuar-demo/kuard-amd64:1" }
            ] }
        }),
        serde_json::to_value(&component).unwrap()
    );
}
