use kview_kube::{Category, PathBuilder};
use serde::Serialize;

use crate::ViewError;

#[cfg(test)]
#[path = "./navigation.tests.rs"]
mod navigation_tests;

/// Menu entry with nested entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub title: String,
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Navigation>,
}

impl Navigation {
    /// Creates new [`Navigation`] instance without children.
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Result<Self, ViewError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ViewError::EmptyTitle);
        }

        Ok(Self {
            title,
            path: path.into(),
            children: Vec::new(),
        })
    }

    /// Replaces children of the [`Navigation`] entry.
    pub fn with_children(mut self, children: Vec<Navigation>) -> Self {
        self.children = children;
        self
    }
}

/// Builds the overview menu for the `namespace`: one entry per category, each listing its resource kinds.
pub fn overview_navigation(paths: &PathBuilder, namespace: &str) -> Result<Navigation, ViewError> {
    let mut categories = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let children = category
            .resources()
            .map(|r| Navigation::new(r.title, paths.build_segment(namespace, Some(category), Some(r.plural), None)))
            .collect::<Result<Vec<_>, _>>()?;

        categories.push(
            Navigation::new(category.title(), paths.build_segment(namespace, Some(category), None, None))?
                .with_children(children),
        );
    }

    Ok(Navigation::new("Overview", paths.build_segment(namespace, None, None, None))?.with_children(categories))
}
