use super::*;

#[test]
fn new_navigation_test() {
    let nav = Navigation::new("title", "/path").unwrap();

    assert_eq!("/path", nav.path);
    assert_eq!("title", nav.title);
    assert!(nav.children.is_empty());
}

#[test]
fn new_navigation_empty_title_test() {
    assert_eq!(Err(ViewError::EmptyTitle), Navigation::new("", "/path"));
}

#[test]
fn with_children_test() {
    let child = Navigation::new("child", "/parent/child").unwrap();
    let nav = Navigation::new("parent", "/parent")
        .unwrap()
        .with_children(vec![child.clone()]);

    assert_eq!(vec![child], nav.children);
}

#[test]
fn overview_navigation_test() {
    let nav = overview_navigation(&PathBuilder::default(), "default").unwrap();

    assert_eq!("Overview", nav.title);
    assert_eq!("/content/overview/namespace/default", nav.path);

    let titles = nav.children.iter().map(|c| c.title.as_str()).collect::<Vec<_>>();
    assert_eq!(
        vec!["Workloads", "Discovery and Load Balancing", "Config and Storage", "RBAC"],
        titles
    );

    let workloads = &nav.children[0];
    assert_eq!("/content/overview/namespace/default/workloads", workloads.path);
    assert_eq!(8, workloads.children.len());

    let pods = workloads.children.iter().find(|c| c.title == "Pods").unwrap();
    assert_eq!("/content/overview/namespace/default/workloads/pods", pods.path);
    assert!(pods.children.is_empty());

    let accounts = nav.children[2]
        .children
        .iter()
        .find(|c| c.title == "Service Accounts")
        .unwrap();
    assert_eq!("/content/overview/namespace/default/config-and-storage/service-accounts", accounts.path);
}
