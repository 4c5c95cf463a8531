use kview_kube::{ObjectCache, PathBuilder};
use std::sync::Arc;

/// Settings shared by all handlers during a single render call.
#[derive(Clone)]
pub struct Options {
    pub cache: Arc<dyn ObjectCache>,
    pub paths: PathBuilder,
    pub context: String,
}

impl Options {
    /// Creates new [`Options`] instance with the default content root and context.
    pub fn new(cache: Arc<dyn ObjectCache>) -> Self {
        Self {
            cache,
            paths: PathBuilder::default(),
            context: "default".to_owned(),
        }
    }

    /// Sets the [`PathBuilder`] used for links.
    pub fn with_paths(mut self, paths: PathBuilder) -> Self {
        self.paths = paths;
        self
    }

    /// Sets the active context name.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}
