use kube::api::DynamicObject;
use kview_kube::Kind;
use kview_printer::{Options, PrinterError, Registry};
use kview_view::Component;

#[cfg(test)]
#[path = "./render.tests.rs"]
mod render_tests;

/// Renders configuration of every object that has a registered handler, in the input order.\
/// **Note** that objects of other kinds are only stored in the cache, e.g. secrets for service account tokens.
pub fn render_objects(registry: &Registry, objects: &[DynamicObject], options: &Options) -> Result<Vec<Component>, PrinterError> {
    let mut components = Vec::with_capacity(objects.len());
    for object in objects {
        if let Some(kind) = Kind::from_object(object)
            && !registry.contains(&kind)
        {
            tracing::debug!(
                "Skipping {} {}, no printer registered",
                kind,
                object.metadata.name.as_deref().unwrap_or_default()
            );
            continue;
        }

        components.push(registry.render(Some(object), options)?);
    }

    Ok(components)
}
