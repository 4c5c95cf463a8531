use kube::api::DynamicObject;
use kview_view::{Summary, Table};

use crate::{Options, PrinterError};

/// Renders objects of a single kind.
pub trait PrinterHandler: Send + Sync {
    /// Renders list of objects as a table, one row per object in the input order.
    fn list(&self, objects: &[DynamicObject], options: &Options) -> Result<Table, PrinterError>;

    /// Renders configuration summary of a single object.
    fn configuration(&self, object: &DynamicObject, options: &Options) -> Result<Summary, PrinterError>;

    /// Returns `true` if rendering an empty list is an error.
    fn requires_items(&self) -> bool {
        false
    }
}
