//! Metadata engine
//!
//! The façade over the schema registry, canonical serializer, and content
//! hasher. Every operation is a stateless request/response: resolve the
//! version identifier, then act. Resolution failures propagate unchanged.

use serde_json::Value;

use crate::canonical::canonicalize;
use crate::digest::ContentDigest;
use crate::error::Result;
use crate::registry::SchemaRegistry;

/// Stateless coordinator for generate / parse / validate / verify operations
pub struct MetadataEngine {
    registry: SchemaRegistry,
}

impl MetadataEngine {
    /// Create an engine over an explicit registry
    pub fn new(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Create an engine over the bundled schema definitions
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(SchemaRegistry::bundled()?))
    }

    /// The registry this engine resolves against
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Validate `fields` against the resolved schema and return the
    /// canonical minified JSON string.
    pub fn generate(&self, identifier: &str, fields: &Value) -> Result<String> {
        let schema = self.registry.resolve(identifier)?;
        schema.check(fields)?;
        let rendered = canonicalize(fields, schema);
        tracing::debug!(identifier, bytes = rendered.len(), "generated metadata");
        Ok(rendered)
    }

    /// Deserialize `raw`, validate it against the resolved schema, and
    /// return the parsed document unchanged (not re-serialized).
    pub fn parse(&self, identifier: &str, raw: &str) -> Result<Value> {
        let schema = self.registry.resolve(identifier)?;
        let document: Value = serde_json::from_str(raw)?;
        schema.check(&document)?;
        Ok(document)
    }

    /// Whether `candidate` conforms exactly to the resolved schema.
    ///
    /// Schema mismatches are a normal `false`; only an unresolvable
    /// version identifier is an error.
    pub fn validate(&self, identifier: &str, candidate: &Value) -> Result<bool> {
        let schema = self.registry.resolve(identifier)?;
        Ok(schema.conforms(candidate))
    }

    /// Whether `fetched` hashes to exactly `declared_digest`.
    ///
    /// The comparison is case-sensitive against the bare lowercase hex
    /// digest form.
    pub fn verify_content(&self, declared_digest: &str, fetched: &[u8]) -> bool {
        let computed = ContentDigest::from_bytes(fetched);
        let verified = computed.as_str() == declared_digest;
        if !verified {
            tracing::debug!(
                declared = declared_digest,
                computed = computed.as_str(),
                "content digest mismatch"
            );
        }
        verified
    }
}
