use crate::Kind;

#[cfg(test)]
#[path = "./paths.tests.rs"]
mod paths_tests;

pub const DEFAULT_ROOT: &str = "/content/overview";

/// Possible errors from building content paths.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Required path segment is empty.
    #[error("path segment '{0}' cannot be empty")]
    InvalidInput(&'static str),

    /// Kind has no place in the content tree.
    #[error("kind '{0}' has no content path")]
    UnknownKind(String),
}

/// Group of resource kinds shown together in the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Workloads,
    DiscoveryAndLoadBalancing,
    ConfigAndStorage,
    Rbac,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Workloads,
        Self::DiscoveryAndLoadBalancing,
        Self::ConfigAndStorage,
        Self::Rbac,
    ];

    /// Returns category path segment.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Workloads => "workloads",
            Self::DiscoveryAndLoadBalancing => "discovery-and-load-balancing",
            Self::ConfigAndStorage => "config-and-storage",
            Self::Rbac => "rbac",
        }
    }

    /// Returns category display title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Workloads => "Workloads",
            Self::DiscoveryAndLoadBalancing => "Discovery and Load Balancing",
            Self::ConfigAndStorage => "Config and Storage",
            Self::Rbac => "RBAC",
        }
    }

    /// Returns all known resource paths that belong to this category.
    pub fn resources(self) -> impl Iterator<Item = &'static ResourcePath> {
        RESOURCE_PATHS.iter().filter(move |p| p.category == self)
    }
}

/// Place of a resource kind in the content tree.
#[derive(Debug, PartialEq)]
pub struct ResourcePath {
    pub kind: &'static str,
    pub category: Category,
    pub plural: &'static str,
    pub title: &'static str,
}

impl ResourcePath {
    const fn new(kind: &'static str, category: Category, plural: &'static str, title: &'static str) -> Self {
        Self {
            kind,
            category,
            plural,
            title,
        }
    }

    /// Finds [`ResourcePath`] for the specified `kind`, ignoring its group.
    pub fn find(kind: &Kind) -> Option<&'static ResourcePath> {
        RESOURCE_PATHS.iter().find(|p| p.kind == kind.name())
    }
}

static RESOURCE_PATHS: [ResourcePath; 16] = [
    ResourcePath::new("CronJob", Category::Workloads, "cron-jobs", "Cron Jobs"),
    ResourcePath::new("DaemonSet", Category::Workloads, "daemon-sets", "Daemon Sets"),
    ResourcePath::new("Deployment", Category::Workloads, "deployments", "Deployments"),
    ResourcePath::new("Job", Category::Workloads, "jobs", "Jobs"),
    ResourcePath::new("Pod", Category::Workloads, "pods", "Pods"),
    ResourcePath::new("ReplicaSet", Category::Workloads, "replica-sets", "Replica Sets"),
    ResourcePath::new(
        "ReplicationController",
        Category::Workloads,
        "replication-controllers",
        "Replication Controllers",
    ),
    ResourcePath::new("StatefulSet", Category::Workloads, "stateful-sets", "Stateful Sets"),
    ResourcePath::new("Ingress", Category::DiscoveryAndLoadBalancing, "ingresses", "Ingresses"),
    ResourcePath::new("Service", Category::DiscoveryAndLoadBalancing, "services", "Services"),
    ResourcePath::new("ConfigMap", Category::ConfigAndStorage, "config-maps", "Config Maps"),
    ResourcePath::new(
        "PersistentVolumeClaim",
        Category::ConfigAndStorage,
        "persistent-volume-claims",
        "Persistent Volume Claims",
    ),
    ResourcePath::new("Secret", Category::ConfigAndStorage, "secrets", "Secrets"),
    ResourcePath::new("ServiceAccount", Category::ConfigAndStorage, "service-accounts", "Service Accounts"),
    ResourcePath::new("Role", Category::Rbac, "roles", "Roles"),
    ResourcePath::new("RoleBinding", Category::Rbac, "role-bindings", "Role Bindings"),
];

/// Builds content paths: `<root>/namespace/<namespace>/<category>/<kind-plural>/<name>`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathBuilder {
    root: String,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl PathBuilder {
    /// Creates new [`PathBuilder`] instance.\
    /// **Note** that trailing slashes are removed from the `root`.
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        while root.ends_with('/') {
            root.pop();
        }

        Self { root }
    }

    /// Returns content root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Builds content path to the object of `kind` named `name` in the `namespace`.
    pub fn build(&self, namespace: &str, kind: &Kind, name: &str) -> Result<String, PathError> {
        if namespace.is_empty() {
            return Err(PathError::InvalidInput("namespace"));
        }

        if kind.name().is_empty() {
            return Err(PathError::InvalidInput("kind"));
        }

        if name.is_empty() {
            return Err(PathError::InvalidInput("name"));
        }

        let Some(path) = ResourcePath::find(kind) else {
            return Err(PathError::UnknownKind(kind.to_string()));
        };

        Ok(self.build_segment(namespace, Some(path.category), Some(path.plural), Some(name)))
    }

    /// Builds content path from raw segments, stopping at the first absent one.
    pub fn build_segment(
        &self,
        namespace: &str,
        category: Option<Category>,
        plural: Option<&str>,
        name: Option<&str>,
    ) -> String {
        let mut path = format!("{}/namespace/{}", self.root, namespace);
        let Some(category) = category else {
            return path;
        };

        path.push('/');
        path.push_str(category.segment());

        if let Some(plural) = plural {
            path.push('/');
            path.push_str(plural);

            if let Some(name) = name {
                path.push('/');
                path.push_str(name);
            }
        }

        path
    }
}
