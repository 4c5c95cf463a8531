use k8s_openapi::api::core::v1::{Pod, ReplicationController};
use kube::api::DynamicObject;
use kview_kube::{CacheQuery, ObjectCache, PathBuilder};
use kview_view::{Containers, Labels, Summary, Table, TableCol, Text};

use super::{POD, REPLICATION_CONTROLLER, common_cells, controlled_by, parse};
use crate::derived::{PodPhaseCounts, replica_ratio};
use crate::{Options, PrinterError, PrinterHandler};

#[cfg(test)]
#[path = "./replication_controller.tests.rs"]
mod replication_controller_tests;

const COLUMNS: [&str; 6] = ["Name", "Labels", "Status", "Age", "Containers", "Selector"];

/// Renders `ReplicationController` objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReplicationControllerHandler;

impl ReplicationControllerHandler {
    /// Builds the replication controllers table, one row per controller in the input order.
    pub fn table(controllers: &[ReplicationController], paths: &PathBuilder) -> Result<Table, PrinterError> {
        let mut table = Table::new("Replication Controllers", TableCol::from_names(&COLUMNS));
        for rc in controllers {
            let spec = rc.spec.as_ref();
            let ready = rc.status.as_ref().and_then(|s| s.ready_replicas);

            let mut containers = Containers::new();
            let template = spec.and_then(|s| s.template.as_ref()).and_then(|t| t.spec.as_ref());
            for container in template.map(|t| t.containers.as_slice()).unwrap_or_default() {
                containers.add(&container.name, container.image.as_deref().unwrap_or_default());
            }

            let row = common_cells(&rc.metadata, REPLICATION_CONTROLLER, paths)?
                .with("Status", Text::new(replica_ratio(ready, spec.and_then(|s| s.replicas))))
                .with("Containers", containers)
                .with("Selector", Labels::from(spec.and_then(|s| s.selector.as_ref())));

            table.add(row)?;
        }

        Ok(table)
    }
}

impl PrinterHandler for ReplicationControllerHandler {
    fn list(&self, objects: &[DynamicObject], options: &Options) -> Result<Table, PrinterError> {
        let controllers = objects
            .iter()
            .map(|o| parse::<ReplicationController>(o, REPLICATION_CONTROLLER))
            .collect::<Result<Vec<_>, _>>()?;

        Self::table(&controllers, &options.paths)
    }

    fn configuration(&self, object: &DynamicObject, options: &Options) -> Result<Summary, PrinterError> {
        let rc = parse::<ReplicationController>(object, REPLICATION_CONTROLLER)?;
        ReplicationControllerConfiguration::new(Some(&rc))
            .with_paths(options.paths.clone())
            .with_cache(options.cache.as_ref())
            .create()
    }
}

/// Builds replication controller configuration summary.
pub struct ReplicationControllerConfiguration<'a> {
    rc: Option<&'a ReplicationController>,
    paths: PathBuilder,
    cache: Option<&'a dyn ObjectCache>,
}

impl<'a> ReplicationControllerConfiguration<'a> {
    /// Creates new [`ReplicationControllerConfiguration`] instance.
    pub fn new(rc: Option<&'a ReplicationController>) -> Self {
        Self {
            rc,
            paths: PathBuilder::default(),
            cache: None,
        }
    }

    /// Sets the [`PathBuilder`] used for links.
    pub fn with_paths(mut self, paths: PathBuilder) -> Self {
        self.paths = paths;
        self
    }

    /// Sets the cache used to look up pods of the controller.\
    /// **Note** that without cache the `Pod Status` section is not rendered.
    pub fn with_cache(mut self, cache: &'a dyn ObjectCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Creates the configuration summary.
    pub fn create(&self) -> Result<Summary, PrinterError> {
        let Some(rc) = self.rc else {
            return Err(PrinterError::NilObject);
        };

        let spec = rc.spec.as_ref();
        let desired = spec.and_then(|s| s.replicas).unwrap_or(1);
        let current = rc.status.as_ref().map(|s| s.replicas).unwrap_or_default();
        let mut summary = Summary::new("Configuration", Vec::new());

        summary.add_opt("Controlled By", controlled_by(&rc.metadata, &self.paths));
        summary.add("Replica Status", Text::new(format!("Current {current} / Desired {desired}")));
        summary.add("Replicas", Text::new(format!("{desired} Desired")));

        if let Some(cache) = self.cache
            && let Some(selector) = spec.and_then(|s| s.selector.as_ref()).filter(|s| !s.is_empty())
        {
            let namespace = rc.metadata.namespace.as_deref().unwrap_or_default();
            let query = CacheQuery::new(namespace, POD).with_selector(selector.clone());
            let pods = cache
                .list(&query)?
                .iter()
                .map(|o| parse::<Pod>(o, POD))
                .collect::<Result<Vec<_>, _>>()?;

            summary.add("Pod Status", Text::new(PodPhaseCounts::from_pods(&pods).to_string()));
        }

        Ok(summary)
    }
}
