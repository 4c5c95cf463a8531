use k8s_openapi::api::core::v1::Pod;
use kube::api::DynamicObject;
use kview_kube::PathBuilder;
use kview_view::{Summary, Table, TableCol, Text, Timestamp};

use super::{POD, SERVICE_ACCOUNT, common_cells, controlled_by, link_to, non_empty_text, parse};
use crate::derived::{grace_period, qos_class, ready_ratio, termination, total_restarts};
use crate::{Options, PrinterError, PrinterHandler};

#[cfg(test)]
#[path = "./pod.tests.rs"]
mod pod_tests;

const COLUMNS: [&str; 7] = ["Name", "Labels", "Ready", "Status", "Restarts", "Node", "Age"];

/// Renders `Pod` objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct PodHandler;

impl PodHandler {
    /// Builds the pods table, one row per pod in the input order.
    pub fn table(pods: &[Pod], paths: &PathBuilder) -> Result<Table, PrinterError> {
        let mut table = Table::new("Pods", TableCol::from_names(&COLUMNS));
        for pod in pods {
            let statuses = pod
                .status
                .as_ref()
                .and_then(|s| s.container_statuses.as_deref())
                .unwrap_or_default();
            let phase = pod.status.as_ref().and_then(|s| s.phase.clone()).unwrap_or_default();
            let node = pod.spec.as_ref().and_then(|s| s.node_name.clone()).unwrap_or_default();
            let containers = pod.spec.as_ref().map(|s| s.containers.len()).unwrap_or_default();

            let row = common_cells(&pod.metadata, POD, paths)?
                .with("Ready", Text::new(ready_ratio(statuses, containers)))
                .with("Status", Text::new(phase))
                .with("Restarts", Text::new(total_restarts(statuses).to_string()))
                .with("Node", Text::new(node));

            table.add(row)?;
        }

        Ok(table)
    }
}

impl PrinterHandler for PodHandler {
    fn list(&self, objects: &[DynamicObject], options: &Options) -> Result<Table, PrinterError> {
        let pods = objects
            .iter()
            .map(|o| parse::<Pod>(o, POD))
            .collect::<Result<Vec<_>, _>>()?;

        Self::table(&pods, &options.paths)
    }

    fn configuration(&self, object: &DynamicObject, options: &Options) -> Result<Summary, PrinterError> {
        let pod = parse::<Pod>(object, POD)?;
        PodConfiguration::new(Some(&pod)).with_paths(options.paths.clone()).create()
    }
}

/// Builds pod configuration summary.\
/// Creating the builder only captures the pod, the summary is computed by [`PodConfiguration::create`].
pub struct PodConfiguration<'a> {
    pod: Option<&'a Pod>,
    paths: PathBuilder,
}

impl<'a> PodConfiguration<'a> {
    /// Creates new [`PodConfiguration`] instance.
    pub fn new(pod: Option<&'a Pod>) -> Self {
        Self {
            pod,
            paths: PathBuilder::default(),
        }
    }

    /// Sets the [`PathBuilder`] used for links.
    pub fn with_paths(mut self, paths: PathBuilder) -> Self {
        self.paths = paths;
        self
    }

    /// Creates the configuration summary.\
    /// Sections for absent fields are omitted, the only error is a missing pod.
    pub fn create(&self) -> Result<Summary, PrinterError> {
        let Some(pod) = self.pod else {
            return Err(PrinterError::NilObject);
        };

        let spec = pod.spec.as_ref();
        let status = pod.status.as_ref();
        let mut summary = Summary::new("Configuration", Vec::new());

        summary.add_opt("Priority", spec.and_then(|s| s.priority).map(|p| Text::new(p.to_string())));
        summary.add_opt(
            "PriorityClassName",
            non_empty_text(spec.and_then(|s| s.priority_class_name.as_ref())).map(Text::new),
        );

        summary.add_opt("Start Time", status.and_then(|s| s.start_time.as_ref()).map(Timestamp::from));

        if let Some(termination) = termination(&pod.metadata) {
            summary.add("Status: Terminating", Timestamp::from(termination.deleted_at));
            summary.add_opt(
                "Termination Grace Period",
                termination.grace_period.map(|s| Text::new(grace_period(s))),
            );
        }

        summary.add_opt("Reason", non_empty_text(status.and_then(|s| s.reason.as_ref())).map(Text::new));
        summary.add_opt("Message", non_empty_text(status.and_then(|s| s.message.as_ref())).map(Text::new));

        summary.add_opt("Controlled By", controlled_by(&pod.metadata, &self.paths));

        summary.add_opt(
            "NominatedNodeName",
            non_empty_text(status.and_then(|s| s.nominated_node_name.as_ref())).map(Text::new),
        );
        summary.add_opt("QoS Class", qos_class(pod).map(Text::new));

        if let Some(account) = non_empty_text(spec.and_then(|s| s.service_account_name.as_ref())) {
            let namespace = pod.metadata.namespace.as_deref().unwrap_or_default();
            summary.add_opt(
                "Service Account",
                link_to(&self.paths, namespace, &SERVICE_ACCOUNT.into(), &account),
            );
        }

        Ok(summary)
    }
}
