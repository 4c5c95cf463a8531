use kube::api::DynamicObject;
use kube::core::TypeMeta;
use std::fmt::Display;

#[cfg(test)]
#[path = "./kind.tests.rs"]
mod kind_tests;

pub const CORE_VERSION: &str = "v1";

/// Resource kind identity together with its API group, e.g. `Pod` or `Deployment.apps`.\
/// **Note** that the API version is not part of the identity.
#[derive(Default, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kind {
    name: String,
    group: Option<usize>,
}

impl Kind {
    /// Creates new [`Kind`] instance.
    pub fn new(kind: &str, group: &str) -> Self {
        if group.is_empty() {
            kind.into()
        } else {
            format!("{kind}.{group}").into()
        }
    }

    /// Creates new [`Kind`] instance from `kind` and `api_version` string slices.
    pub fn from_api_version(kind: &str, api_version: &str) -> Self {
        match api_version.split_once('/') {
            Some((group, _)) => Self::new(kind, group),
            None => kind.into(),
        }
    }

    /// Creates new [`Kind`] instance from the object's type information.\
    /// Returns `None` if the object has no kind set.
    pub fn from_object(object: &DynamicObject) -> Option<Self> {
        object.types.as_ref().and_then(Self::from_type_meta)
    }

    /// Creates new [`Kind`] instance from the [`TypeMeta`].
    pub fn from_type_meta(types: &TypeMeta) -> Option<Self> {
        if types.kind.is_empty() {
            None
        } else {
            Some(Self::from_api_version(&types.kind, &types.api_version))
        }
    }

    /// Returns kind as string slice.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns kind's name.
    pub fn name(&self) -> &str {
        if let Some(group) = self.group {
            &self.name[..group]
        } else {
            &self.name
        }
    }

    /// Returns `true` if kind has group.
    pub fn has_group(&self) -> bool {
        self.group.is_some()
    }

    /// Returns kind's group.
    pub fn group(&self) -> &str {
        if let Some(group) = self.group {
            &self.name[group + 1..]
        } else {
            ""
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<String> for Kind {
    fn from(value: String) -> Self {
        let group = value.find('.');
        Self { name: value, group }
    }
}

impl From<&str> for Kind {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

impl From<Kind> for String {
    fn from(value: Kind) -> Self {
        value.name
    }
}
