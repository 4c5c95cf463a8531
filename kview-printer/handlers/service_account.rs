use k8s_openapi::api::core::v1::{Secret, ServiceAccount};
use kube::api::DynamicObject;
use kview_common::join_non_empty;
use kview_kube::{CacheKey, ObjectCache, PathBuilder};
use kview_view::{Summary, Table, TableCol, Text};

use super::{SECRET, SERVICE_ACCOUNT, common_cells, parse};
use crate::{Options, PrinterError, PrinterHandler};

#[cfg(test)]
#[path = "./service_account.tests.rs"]
mod service_account_tests;

pub const TOKEN_SECRET_TYPE: &str = "kubernetes.io/service-account-token";

const COLUMNS: [&str; 4] = ["Name", "Labels", "Secrets", "Age"];

/// Renders `ServiceAccount` objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct ServiceAccountHandler;

impl ServiceAccountHandler {
    /// Builds the service accounts table, one row per account in the input order.
    pub fn table(accounts: &[ServiceAccount], paths: &PathBuilder) -> Result<Table, PrinterError> {
        let mut table = Table::new("Service Accounts", TableCol::from_names(&COLUMNS));
        for account in accounts {
            let secrets = account.secrets.as_ref().map(Vec::len).unwrap_or_default();
            let row = common_cells(&account.metadata, SERVICE_ACCOUNT, paths)?.with("Secrets", Text::new(secrets.to_string()));

            table.add(row)?;
        }

        Ok(table)
    }
}

impl PrinterHandler for ServiceAccountHandler {
    fn list(&self, objects: &[DynamicObject], options: &Options) -> Result<Table, PrinterError> {
        let accounts = objects
            .iter()
            .map(|o| parse::<ServiceAccount>(o, SERVICE_ACCOUNT))
            .collect::<Result<Vec<_>, _>>()?;

        Self::table(&accounts, &options.paths)
    }

    fn configuration(&self, object: &DynamicObject, options: &Options) -> Result<Summary, PrinterError> {
        let account = parse::<ServiceAccount>(object, SERVICE_ACCOUNT)?;
        ServiceAccountConfiguration::new(Some(&account))
            .with_cache(options.cache.as_ref())
            .create()
    }
}

/// Builds service account configuration summary.
pub struct ServiceAccountConfiguration<'a> {
    account: Option<&'a ServiceAccount>,
    cache: Option<&'a dyn ObjectCache>,
}

impl<'a> ServiceAccountConfiguration<'a> {
    /// Creates new [`ServiceAccountConfiguration`] instance.
    pub fn new(account: Option<&'a ServiceAccount>) -> Self {
        Self { account, cache: None }
    }

    /// Sets the cache used to resolve token secrets.\
    /// **Note** that without cache the `Tokens` section is not rendered.
    pub fn with_cache(mut self, cache: &'a dyn ObjectCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Creates the configuration summary.
    pub fn create(&self) -> Result<Summary, PrinterError> {
        let Some(account) = self.account else {
            return Err(PrinterError::NilObject);
        };

        let secrets = account
            .secrets
            .iter()
            .flatten()
            .filter_map(|s| s.name.as_deref())
            .collect::<Vec<_>>();
        let pull_secrets = account.image_pull_secrets.iter().flatten().map(|s| s.name.as_str());

        let mut summary = Summary::new("Configuration", Vec::new());
        summary.add_opt("Image Pull Secrets", join_non_empty(pull_secrets).map(Text::new));
        summary.add_opt("Mountable Secrets", join_non_empty(&secrets).map(Text::new));

        if let Some(cache) = self.cache {
            let namespace = account.metadata.namespace.as_deref().unwrap_or_default();
            let tokens = token_secrets(cache, namespace, &secrets)?;
            summary.add_opt("Tokens", join_non_empty(tokens).map(Text::new));
        }

        Ok(summary)
    }
}

/// Returns names of the `secrets` that exist in the cache and hold service account tokens.
fn token_secrets(cache: &dyn ObjectCache, namespace: &str, secrets: &[&str]) -> Result<Vec<String>, PrinterError> {
    let mut tokens = Vec::new();
    for name in secrets {
        let Some(object) = cache.get(&CacheKey::new(namespace, SECRET, *name))? else {
            tracing::debug!("Secret {}/{} not found", namespace, name);
            continue;
        };

        let secret = parse::<Secret>(&object, SECRET)?;
        if secret.type_.as_deref() == Some(TOKEN_SECRET_TYPE) {
            tokens.push((*name).to_owned());
        }
    }

    Ok(tokens)
}
