use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::{Summary, Table};

#[cfg(test)]
#[path = "./component.tests.rs"]
mod component_tests;

/// Display node of the rendered view.\
/// Serializes as `{"type": "<variant>", "config": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "config", rename_all = "camelCase")]
pub enum Component {
    Table(Table),
    Summary(Summary),
    Link(Link),
    Labels(Labels),
    Text(Text),
    Timestamp(Timestamp),
    Containers(Containers),
}

impl Component {
    /// Returns the component type name as it appears on the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            Component::Table(_) => "table",
            Component::Summary(_) => "summary",
            Component::Link(_) => "link",
            Component::Labels(_) => "labels",
            Component::Text(_) => "text",
            Component::Timestamp(_) => "timestamp",
            Component::Containers(_) => "containers",
        }
    }
}

macro_rules! into_component {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Component {
                fn from(value: $variant) -> Self {
                    Component::$variant(value)
                }
            }
        )+
    };
}

into_component!(Table, Summary, Link, Labels, Text, Timestamp, Containers);

/// Link to other content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub text: String,
    #[serde(rename = "ref")]
    pub path: String,
}

impl Link {
    /// Creates new [`Link`] instance.
    pub fn new(label: impl Into<String>, text: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            path: path.into(),
        }
    }
}

/// Key/value labels, always in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub labels: BTreeMap<String, String>,
}

impl Labels {
    /// Creates new [`Labels`] instance.
    pub fn new(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }
}

impl From<Option<&BTreeMap<String, String>>> for Labels {
    fn from(value: Option<&BTreeMap<String, String>>) -> Self {
        Self::new(value.cloned().unwrap_or_default())
    }
}

/// Plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Text {
    pub value: String,
}

impl Text {
    /// Creates new [`Text`] instance.
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Point in time.\
/// **Note** that it is serialized as unix seconds, the consumer formats it (e.g. as age).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timestamp {
    #[serde(rename = "timestamp", serialize_with = "unix_seconds")]
    pub time: DateTime<Utc>,
}

impl Timestamp {
    /// Creates new [`Timestamp`] instance.
    pub fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl From<&Time> for Timestamp {
    fn from(value: &Time) -> Self {
        Self::new(value.0)
    }
}

fn unix_seconds<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(time.timestamp())
}

/// Container name and image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub name: String,
    pub image: String,
}

/// Ordered list of containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Containers {
    pub containers: Vec<Container>,
}

impl Containers {
    /// Creates new empty [`Containers`] instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds container to the list.
    pub fn add(&mut self, name: impl Into<String>, image: impl Into<String>) {
        self.containers.push(Container {
            name: name.into(),
            image: image.into(),
        });
    }
}
