//! Wonzimer Media Protocol SDK
//!
//! A client toolkit for the Wonzimer media marketplace protocol, centered
//! on its calendar-versioned metadata engine.
//!
//! ## Features
//!
//! - **Versioned Schemas**: metadata schema revisions are grouped by
//!   namespace and identified by 8-digit calendar versions
//!   (e.g. `wonzimer-20210101`)
//! - **Deterministic Serialization**: canonical minified JSON with
//!   schema-ordered keys, so identical documents hash identically
//! - **Content Addressing**: SHA256 digests bind off-chain media and
//!   metadata to their on-chain records
//! - **Media Verification**: re-fetches content and metadata and checks
//!   both against the digests recorded at mint time
//!
//! ## Architecture
//!
//! ```text
//! schemas/
//! ├── wonzimer/
//! │   ├── 20210101.json
//! │   └── 20210604.json
//! └── <namespace>/
//!     └── <calendarVersion>.json
//!
//! SchemaRegistry ── resolve ──▶ SchemaDocument
//!        │                            │
//! MetadataEngine ── validate ─────────┘
//!        │
//!        ├── generate ──▶ canonical bytes ──▶ ContentDigest
//!        └── verify_content ◀── fetched bytes
//! ```

pub mod addresses;
pub mod canonical;
pub mod config;
pub mod digest;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod media;
pub mod registry;
pub mod schema;
pub mod verify;
pub mod version;

pub use addresses::AddressBook;
pub use canonical::canonicalize;
pub use config::SdkConfig;
pub use digest::ContentDigest;
pub use engine::MetadataEngine;
pub use error::{MetadataError, Result, ValidationError};
pub use fetch::HttpFetcher;
pub use media::MediaData;
pub use registry::SchemaRegistry;
pub use schema::{FieldSpec, FieldType, SchemaDocument};
pub use verify::{verify_media, ContentFetcher, FetchError, MediaReader};
pub use version::VersionIdentifier;
