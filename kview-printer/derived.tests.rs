use k8s_openapi::api::core::v1::{PodSpec, PodStatus, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::chrono::DateTime;
use rstest::rstest;

use super::*;

fn status(ready: bool, restarts: i32) -> ContainerStatus {
    ContainerStatus {
        ready,
        restart_count: restarts,
        ..Default::default()
    }
}

fn resources(requests: &[(&str, &str)], limits: &[(&str, &str)]) -> Container {
    let to_map = |pairs: &[(&str, &str)]| {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), Quantity((*v).to_owned())))
            .collect::<BTreeMap<_, _>>()
    };

    Container {
        name: "c".to_owned(),
        resources: Some(ResourceRequirements {
            requests: Some(to_map(requests)),
            limits: Some(to_map(limits)),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[rstest]
#[case("0/0", vec![], 0)]
#[case("0/2", vec![], 2)]
#[case("0/1", vec![status(false, 0)], 1)]
#[case("1/2", vec![status(true, 0), status(false, 0)], 2)]
#[case("3/3", vec![status(true, 0), status(true, 1), status(true, 2)], 3)]
fn ready_ratio_test(#[case] expected: &str, #[case] statuses: Vec<ContainerStatus>, #[case] containers: usize) {
    assert_eq!(expected, ready_ratio(&statuses, containers));
}

#[test]
fn total_restarts_test() {
    assert_eq!(0, total_restarts(&[]));
    assert_eq!(7, total_restarts(&[status(true, 3), status(false, 4)]));
    assert_eq!(4_294_967_294, total_restarts(&[status(true, i32::MAX), status(true, i32::MAX)]));
}

#[test]
fn grace_period_test() {
    assert_eq!("30s", grace_period(30));
    assert_eq!("0s", grace_period(0));
}

#[test]
fn termination_test() {
    let time = Time(DateTime::from_timestamp(1547211430, 0).unwrap());
    let mut metadata = ObjectMeta::default();
    assert_eq!(None, termination(&metadata));

    metadata.deletion_timestamp = Some(time.clone());
    assert_eq!(
        Some(Termination {
            deleted_at: &time,
            grace_period: None
        }),
        termination(&metadata)
    );

    metadata.deletion_grace_period_seconds = Some(30);
    assert_eq!(Some(30), termination(&metadata).and_then(|t| t.grace_period));
}

#[test]
fn controller_of_test() {
    let owner = |name: &str, controller: Option<bool>| OwnerReference {
        kind: "ReplicaSet".to_owned(),
        name: name.to_owned(),
        controller,
        ..Default::default()
    };

    let mut metadata = ObjectMeta::default();
    assert_eq!(None, controller_of(&metadata));

    metadata.owner_references = Some(vec![owner("a", None), owner("b", Some(false))]);
    assert_eq!(None, controller_of(&metadata));

    metadata.owner_references = Some(vec![owner("a", None), owner("b", Some(true)), owner("c", Some(true))]);
    assert_eq!(Some("b"), controller_of(&metadata).map(|o| o.name.as_str()));
}

#[rstest]
#[case(QOS_BEST_EFFORT, vec![resources(&[], &[])])]
#[case(QOS_BEST_EFFORT, vec![resources(&[("cpu", "0")], &[("memory", "0")])])]
#[case(QOS_BURSTABLE, vec![resources(&[("cpu", "100m")], &[])])]
#[case(QOS_BURSTABLE, vec![resources(&[], &[("cpu", "1")])])]
#[case(QOS_GUARANTEED, vec![resources(&[("cpu", "1"), ("memory", "1Gi")], &[("cpu", "1000m"), ("memory", "1024Mi")])])]
#[case(QOS_BURSTABLE, vec![resources(&[("cpu", "500m"), ("memory", "1Gi")], &[("cpu", "1"), ("memory", "1Gi")])])]
#[case(QOS_BURSTABLE, vec![
    resources(&[("cpu", "1"), ("memory", "1Gi")], &[("cpu", "1"), ("memory", "1Gi")]),
    resources(&[], &[]),
])]
#[case(QOS_GUARANTEED, vec![
    resources(&[("cpu", "1"), ("memory", "1Gi")], &[("cpu", "1"), ("memory", "1Gi")]),
    resources(&[("cpu", "2"), ("memory", "2Gi")], &[("cpu", "2"), ("memory", "2Gi")]),
])]
#[case(QOS_BURSTABLE, vec![
    resources(&[("cpu", "1"), ("memory", "1Gi")], &[("cpu", "2"), ("memory", "1Gi")]),
    resources(&[("cpu", "2"), ("memory", "1Gi")], &[("cpu", "2"), ("memory", "1Gi")]),
])]
#[case(QOS_BURSTABLE, vec![resources(&[("cpu", "1"), ("memory", "lots")], &[("cpu", "1"), ("memory", "lots")])])]
fn compute_qos_class_test(#[case] expected: &str, #[case] containers: Vec<Container>) {
    assert_eq!(expected, compute_qos_class(containers.iter()));
}

#[test]
fn qos_class_test() {
    let mut pod = Pod {
        spec: Some(PodSpec {
            containers: vec![resources(&[], &[])],
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(None, qos_class(&pod));

    pod.status = Some(PodStatus {
        qos_class: Some(String::new()),
        ..Default::default()
    });
    assert_eq!(None, qos_class(&pod));

    pod.status = Some(PodStatus {
        qos_class: Some(QOS_GUARANTEED.to_owned()),
        ..Default::default()
    });
    assert_eq!(Some(QOS_GUARANTEED), qos_class(&pod));
}

#[test]
fn pod_qos_class_test() {
    let mut pod = Pod::default();
    assert_eq!(None, pod_qos_class(&pod));

    pod.spec = Some(PodSpec {
        containers: vec![resources(&[("cpu", "1")], &[("cpu", "1")])],
        init_containers: Some(vec![resources(&[], &[])]),
        ..Default::default()
    });
    assert_eq!(Some(QOS_BURSTABLE), pod_qos_class(&pod));

    pod.spec = Some(PodSpec {
        containers: vec![resources(&[], &[])],
        ..Default::default()
    });
    assert_eq!(Some(QOS_BEST_EFFORT), pod_qos_class(&pod));
}

#[test]
fn replica_ratio_test() {
    assert_eq!("0/1", replica_ratio(None, None));
    assert_eq!("2/3", replica_ratio(Some(2), Some(3)));
    assert_eq!("0/0", replica_ratio(None, Some(0)));
}

#[test]
fn pod_phase_counts_test() {
    let pod = |phase: Option<&str>| Pod {
        status: Some(PodStatus {
            phase: phase.map(String::from),
            ..Default::default()
        }),
        ..Default::default()
    };
    let pods = [
        pod(Some("Running")),
        pod(Some("Pending")),
        pod(None),
        pod(Some("Succeeded")),
        pod(Some("Failed")),
        pod(Some("Unknown")),
    ];

    let counts = PodPhaseCounts::from_pods(&pods);

    assert_eq!(
        PodPhaseCounts {
            running: 1,
            waiting: 2,
            succeeded: 1,
            failed: 1
        },
        counts
    );
    assert_eq!("1 Running / 2 Waiting / 1 Succeeded / 1 Failed", counts.to_string());
}
