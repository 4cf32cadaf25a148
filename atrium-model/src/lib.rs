//! Core data model definitions shared across Atrium crates.
//!
//! Every resource type served by the backend is defined here as a trio of
//! structs: the stored record, a `...Create` payload and an all-optional
//! `...Update` payload. Update payloads skip absent fields during
//! serialization so that "not provided" never reaches the store as an
//! explicit value.

pub mod api;
pub mod contact;
pub mod error;
pub mod event;
pub mod faq;
pub mod gallery;
pub mod news;
pub mod pagination;
pub mod partnership;
pub mod program;
pub mod search;
pub mod static_content;
pub mod stats;
pub mod team;
pub mod validate;

// Intentionally curated re-exports for downstream consumers.
pub use api::SuccessResponse;
pub use contact::{Contact, ContactCreate, ContactStatus, FormType};
pub use error::ValidationError;
pub use event::{Event, EventCreate, EventType, EventUpdate};
pub use faq::{Faq, FaqCategory, FaqCreate, FaqUpdate};
pub use gallery::{GalleryImage, GalleryImageCreate, GalleryImageUpdate};
pub use news::{News, NewsCategory, NewsCreate, NewsUpdate};
pub use pagination::Page;
pub use partnership::{
    Partnership, PartnershipCreate, PartnershipStatus, PartnershipType,
    PartnershipUpdate,
};
pub use program::{Program, ProgramCreate, ProgramStatus, ProgramUpdate};
pub use search::{SearchResponse, SearchResult};
pub use static_content::{
    StaticContent, StaticContentCreate, StaticContentUpdate,
};
pub use stats::{ExtendedStats, Stats, StatsConfig, StatsConfigUpdate};
pub use team::{TeamMember, TeamMemberCreate, TeamMemberUpdate};
