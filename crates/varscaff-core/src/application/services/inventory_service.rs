//! Inventory Service - acquisition, normalization and detection.
//!
//! Tries each configured source in order until one produces a document,
//! decides its shape once, then hands it to the domain layer.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::InventorySource},
    domain::{self, CanonicalInventory, EnvironmentList, RawInventory},
    error::VarscaffResult,
};

/// A normalized inventory together with its detected environments.
#[derive(Debug, Clone)]
pub struct LoadedInventory {
    /// Name of the source that produced the document.
    pub source: &'static str,
    pub inventory: CanonicalInventory,
    pub environments: EnvironmentList,
}

/// Service for turning an inventory path into a [`LoadedInventory`].
pub struct InventoryService {
    sources: Vec<Box<dyn InventorySource>>,
}

impl InventoryService {
    /// Create a service that consults `sources` in order.
    pub fn new(sources: Vec<Box<dyn InventorySource>>) -> Self {
        Self { sources }
    }

    /// Acquire, normalize and detect in one go.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> VarscaffResult<LoadedInventory> {
        let (source, raw) = self.acquire(path)?;
        let inventory = domain::normalize(&raw)?;
        let environments = domain::detect(&inventory);

        info!(
            source,
            groups = inventory.len(),
            environments = environments.len(),
            "Inventory loaded"
        );

        Ok(LoadedInventory {
            source,
            inventory,
            environments,
        })
    }

    /// Ask each source in turn; the first document wins.
    pub fn acquire(&self, path: &Path) -> VarscaffResult<(&'static str, RawInventory)> {
        for source in &self.sources {
            match source.acquire(path)? {
                Some(document) => {
                    let raw = RawInventory::classify(document, &path.display().to_string())?;
                    debug!(source = source.name(), shape = raw.shape(), "Inventory acquired");
                    return Ok((source.name(), raw));
                }
                None => debug!(source = source.name(), "Source declined, trying next"),
            }
        }

        Err(ApplicationError::MissingCapability {
            capability: format!("no inventory source could read {}", path.display()),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::MockInventorySource,
        domain::{DetectionStrategy, DomainError},
        error::VarscaffError,
    };
    use serde_json::json;

    fn source(name: &'static str, document: Option<serde_json::Value>) -> MockInventorySource {
        let mut mock = MockInventorySource::new();
        mock.expect_name().return_const(name);
        mock.expect_acquire()
            .returning(move |_| Ok(document.clone()));
        mock
    }

    #[test]
    fn first_source_with_a_document_wins() {
        let listing = source(
            "listing",
            Some(json!({
                "_meta": {"hostvars": {}},
                "all": {"children": ["prod", "ungrouped"]},
                "prod": {"hosts": ["p1"]},
                "ungrouped": {},
            })),
        );
        let mut yaml = MockInventorySource::new();
        yaml.expect_name().return_const("yaml");
        yaml.expect_acquire().never();

        let service = InventoryService::new(vec![Box::new(listing), Box::new(yaml)]);
        let loaded = service.load(Path::new("inventory/hosts.yml")).unwrap();

        assert_eq!(loaded.source, "listing");
        assert_eq!(loaded.inventory.hosts_of("prod"), ["p1"]);
        // `all` is dropped by the flat path, so detection derives parentless groups
        assert_eq!(loaded.environments.names(), ["prod"]);
        assert_eq!(
            loaded.environments.strategy(),
            DetectionStrategy::ParentlessGroups
        );
    }

    #[test]
    fn declining_source_falls_through_to_the_next() {
        let listing = source("listing", None);
        let yaml = source(
            "yaml",
            Some(json!({"all": {"children": {"staging": {"hosts": {"s1": null}}}}})),
        );

        let service = InventoryService::new(vec![Box::new(listing), Box::new(yaml)]);
        let loaded = service.load(Path::new("hosts.yml")).unwrap();

        assert_eq!(loaded.source, "yaml");
        assert_eq!(loaded.environments.names(), ["staging"]);
    }

    #[test]
    fn every_source_declining_is_missing_capability() {
        let service = InventoryService::new(vec![Box::new(source("listing", None))]);
        let err = service.load(Path::new("hosts.yml")).unwrap_err();

        assert!(matches!(
            err,
            VarscaffError::Application(ApplicationError::MissingCapability { .. })
        ));
    }

    #[test]
    fn non_mapping_document_is_invalid_structure() {
        let service = InventoryService::new(vec![Box::new(source("yaml", Some(json!("text"))))]);
        let err = service.load(Path::new("hosts.yml")).unwrap_err();

        match err {
            VarscaffError::Domain(DomainError::InvalidStructure { origin, .. }) => {
                assert_eq!(origin, "hosts.yml");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn source_error_aborts_without_trying_others() {
        let mut broken = MockInventorySource::new();
        broken.expect_name().return_const("broken");
        broken.expect_acquire().returning(|_| {
            Err(ApplicationError::SourceUnreadable {
                path: "hosts.yml".into(),
                reason: "denied".into(),
            }
            .into())
        });
        let mut next = MockInventorySource::new();
        next.expect_name().return_const("next");
        next.expect_acquire().never();

        let service = InventoryService::new(vec![Box::new(broken), Box::new(next)]);
        assert!(service.load(Path::new("hosts.yml")).is_err());
    }
}
