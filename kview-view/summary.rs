use serde::Serialize;

use crate::Component;

/// Single summary entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySection {
    pub header: String,
    pub content: Component,
}

impl SummarySection {
    /// Creates new [`SummarySection`] instance.
    pub fn new(header: impl Into<String>, content: impl Into<Component>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }
}

/// Titled list of sections, shown in the insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub title: String,
    pub sections: Vec<SummarySection>,
}

impl Summary {
    /// Creates new [`Summary`] instance.
    pub fn new(title: impl Into<String>, sections: Vec<SummarySection>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    /// Appends section.
    pub fn add(&mut self, header: impl Into<String>, content: impl Into<Component>) {
        self.sections.push(SummarySection::new(header, content));
    }

    /// Appends section if the `content` is present.
    pub fn add_opt(&mut self, header: impl Into<String>, content: Option<impl Into<Component>>) {
        if let Some(content) = content {
            self.add(header, content);
        }
    }

    /// Returns content of the first section with the `header`.
    pub fn get(&self, header: &str) -> Option<&Component> {
        self.sections.iter().find(|s| s.header == header).map(|s| &s.content)
    }

    /// Returns section headers in display order.
    pub fn headers(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.header.as_str()).collect()
    }
}
