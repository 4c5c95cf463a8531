use kube::api::DynamicObject;
use kview_kube::Kind;
use kview_view::Component;
use std::collections::BTreeMap;

use crate::handlers::{POD, REPLICATION_CONTROLLER, SERVICE_ACCOUNT};
use crate::{Options, PodHandler, PrinterError, PrinterHandler, ReplicationControllerHandler, ServiceAccountHandler};

#[cfg(test)]
#[path = "./registry.tests.rs"]
mod registry_tests;

/// Maps resource kinds to their printer handlers.\
/// Handlers are registered once at startup, rendering only reads the map.
#[derive(Default)]
pub struct Registry {
    handlers: BTreeMap<Kind, Box<dyn PrinterHandler>>,
}

impl Registry {
    /// Creates new [`Registry`] instance with handlers for all built-in kinds.
    pub fn with_defaults() -> Self {
        let mut handlers: BTreeMap<Kind, Box<dyn PrinterHandler>> = BTreeMap::new();
        handlers.insert(POD.into(), Box::new(PodHandler));
        handlers.insert(REPLICATION_CONTROLLER.into(), Box::new(ReplicationControllerHandler));
        handlers.insert(SERVICE_ACCOUNT.into(), Box::new(ServiceAccountHandler));

        Self { handlers }
    }

    /// Binds `handler` to the `kind`.
    pub fn register(&mut self, kind: impl Into<Kind>, handler: impl PrinterHandler + 'static) -> Result<(), PrinterError> {
        let kind = kind.into();
        if self.handlers.contains_key(&kind) {
            return Err(PrinterError::DuplicateHandler(kind.into()));
        }

        self.handlers.insert(kind, Box::new(handler));
        Ok(())
    }

    /// Returns all kinds that have a handler, in sorted order.
    pub fn kinds(&self) -> Vec<&Kind> {
        self.handlers.keys().collect()
    }

    /// Returns `true` if there is a handler registered for the `kind`.
    pub fn contains(&self, kind: &Kind) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Renders configuration summary of the `object` using handler registered for its kind.
    pub fn render(&self, object: Option<&DynamicObject>, options: &Options) -> Result<Component, PrinterError> {
        let object = object.ok_or(PrinterError::InvalidInput("object"))?;
        let kind = Kind::from_object(object).ok_or(PrinterError::InvalidInput("kind"))?;
        let name = kview_common::non_empty(object.metadata.name.as_deref()).ok_or(PrinterError::InvalidInput("name"))?;
        let handler = self.handler(&kind)?;

        tracing::debug!(
            "Rendering {} {}/{}",
            kind,
            object.metadata.namespace.as_deref().unwrap_or_default(),
            name
        );

        Ok(handler.configuration(object, options)?.into())
    }

    /// Renders `objects` of the `kind` as a single table.\
    /// **Note** that the first object that cannot be rendered fails the whole list.
    pub fn render_list(&self, kind: &Kind, objects: &[DynamicObject], options: &Options) -> Result<Component, PrinterError> {
        let handler = self.handler(kind)?;
        if objects.is_empty() && handler.requires_items() {
            return Err(PrinterError::EmptyList(kind.to_string()));
        }

        if let Some(object) = objects
            .iter()
            .find(|o| Kind::from_object(o).is_some_and(|k| &k != kind))
        {
            return Err(PrinterError::InvalidObject(format!(
                "{}/{} is not a {}",
                object.metadata.namespace.as_deref().unwrap_or_default(),
                object.metadata.name.as_deref().unwrap_or_default(),
                kind
            )));
        }

        tracing::debug!("Rendering list of {} {} objects", objects.len(), kind);

        Ok(handler.list(objects, options)?.into())
    }

    fn handler(&self, kind: &Kind) -> Result<&dyn PrinterHandler, PrinterError> {
        self.handlers
            .get(kind)
            .map(|h| &**h)
            .ok_or_else(|| PrinterError::UnsupportedKind(kind.to_string()))
    }
}
