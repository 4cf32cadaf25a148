//! Core content layer for the Atrium backend.
//!
//! Everything HTTP-shaped lives in `atrium-server`; this crate owns the
//! pieces with real invariants:
//!
//! - the [`store::DocumentStore`] boundary and its adapters (in-memory and
//!   Postgres/JSONB),
//! - the generic [`repository::Repository`] that every resource type is a
//!   thin instantiation of,
//! - the per-resource [`update_policy::UpdatePolicy`] selection,
//! - cross-collection [`search`],
//! - read-time [`normalize`] coercions,
//! - [`stats`] and startup [`seed`]ing.

pub mod admin;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod repository;
pub mod search;
pub mod seed;
pub mod stats;
pub mod store;
pub mod update_policy;

pub use error::{StoreError, StoreResult};
pub use registry::ResourceKind;
pub use repository::Repository;
pub use store::{Document, DocumentStore, MemoryStore, PgStore, Query, Sort};
pub use update_policy::UpdatePolicy;
