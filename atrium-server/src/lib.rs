//! # Atrium Server
//!
//! Content-management backend for an institutional website.
//!
//! ## Overview
//!
//! Atrium Server exposes the public read API and the admin mutation API
//! for every content resource type:
//!
//! - **Programs, news, partnerships, events**: paginated, filterable
//!   listings plus detail reads
//! - **Team, FAQs, static content**: hand-curated ordered collections
//! - **Gallery**: image uploads with static serving
//! - **Contacts**: public form intake, admin triage
//! - **Search**: cross-collection substring search
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - a pluggable document store (Postgres/JSONB in production, in-memory
//!   for development and tests)
//! - JWT bearer tokens for the admin mutation gate
//! - tower-http for CORS, tracing and static file serving

pub mod auth;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod upload;

#[cfg(test)]
mod tests;

pub use errors::{AppError, AppResult};
pub use routes::build_router;
pub use state::AppState;
