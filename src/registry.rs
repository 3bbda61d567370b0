//! Schema registry
//!
//! Holds every registered schema revision, keyed by namespace and calendar
//! version. Contents are fixed at construction: either the schema documents
//! bundled into the binary, or a directory tree with the same
//! `<namespace>/<calendarVersion>.json` layout. Resolution is exact-match
//! only.

use include_dir::{include_dir, Dir};
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{MetadataError, Result};
use crate::schema::SchemaDocument;
use crate::version::VersionIdentifier;

/// Schema definitions compiled into the binary
static BUNDLED_SCHEMAS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/schemas");

/// Read-only registry of calendar-versioned schema documents
pub struct SchemaRegistry {
    /// namespace -> calendar version -> schema
    namespaces: HashMap<String, HashMap<String, SchemaDocument>>,
}

impl SchemaRegistry {
    /// Build the registry from the schema definitions bundled at compile time
    pub fn bundled() -> Result<Self> {
        let mut registry = Self {
            namespaces: HashMap::new(),
        };

        for namespace_dir in BUNDLED_SCHEMAS.dirs() {
            let Some(namespace) = namespace_dir.path().file_name().and_then(|n| n.to_str())
            else {
                continue;
            };
            for file in namespace_dir.files() {
                let Some(calendar_version) = calendar_stem(file.path()) else {
                    tracing::warn!(path = %file.path().display(), "skipping non-schema file");
                    continue;
                };
                let content = file.contents_utf8().ok_or_else(|| {
                    MetadataError::InvalidSchema(format!(
                        "bundled schema {} is not UTF-8",
                        file.path().display()
                    ))
                })?;
                registry.insert(namespace, &calendar_version, content)?;
            }
        }

        tracing::debug!(
            namespaces = registry.namespaces.len(),
            "loaded bundled schema registry"
        );
        Ok(registry)
    }

    /// Build the registry from a `<namespace>/<calendarVersion>.json` tree
    /// on the filesystem.
    pub fn from_directory(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut registry = Self {
            namespaces: HashMap::new(),
        };

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(calendar_version) = calendar_stem(path) else {
                continue;
            };
            let Some(namespace) = path
                .parent()
                .and_then(|p| p.strip_prefix(root).ok())
                .and_then(|p| p.to_str())
                .filter(|p| !p.is_empty())
            else {
                tracing::warn!(path = %path.display(), "schema file outside a namespace directory");
                continue;
            };

            let content = std::fs::read_to_string(path)?;
            registry.insert(namespace, &calendar_version, &content)?;
        }

        Ok(registry)
    }

    fn insert(&mut self, namespace: &str, calendar_version: &str, content: &str) -> Result<()> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let schema = SchemaDocument::from_value(&value)?;
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(calendar_version.to_string(), schema);
        Ok(())
    }

    /// Resolve a version identifier string to its schema
    pub fn resolve(&self, identifier: &str) -> Result<&SchemaDocument> {
        self.resolve_version(&VersionIdentifier::parse(identifier)?)
    }

    /// Resolve a parsed version identifier to its schema
    pub fn resolve_version(&self, version: &VersionIdentifier) -> Result<&SchemaDocument> {
        let versions = self.namespaces.get(&version.namespace).ok_or_else(|| {
            MetadataError::UnknownNamespace {
                namespace: version.namespace.clone(),
            }
        })?;

        versions.get(&version.calendar_version).ok_or_else(|| {
            MetadataError::UnknownCalendarVersion {
                namespace: version.namespace.clone(),
                version: version.calendar_version.clone(),
            }
        })
    }

    /// All registered namespaces, sorted
    pub fn namespaces(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.namespaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All calendar versions registered under a namespace, sorted ascending
    pub fn calendar_versions(&self, namespace: &str) -> Result<Vec<&str>> {
        let versions = self.namespaces.get(namespace).ok_or_else(|| {
            MetadataError::UnknownNamespace {
                namespace: namespace.to_string(),
            }
        })?;
        let mut calendars: Vec<_> = versions.keys().map(String::as_str).collect();
        calendars.sort_unstable();
        Ok(calendars)
    }

    /// Total number of registered schema revisions
    pub fn len(&self) -> usize {
        self.namespaces.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// `20210101.json` -> `20210101`; anything else is not a schema file
fn calendar_stem(path: &Path) -> Option<String> {
    if path.extension().map(|e| e != "json").unwrap_or(true) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.len() == 8 && stem.bytes().all(|b| b.is_ascii_digit()) {
        Some(stem.to_string())
    } else {
        None
    }
}
