//! Resource-type registry.
//!
//! Eight resource types share one repository implementation; everything
//! that differs between them lives in this table: collection name,
//! logical id field, timestamp scheme, default sort, update policy and
//! the public list page size.

use crate::repository::{ResourceSpec, TimestampMode};
use crate::store::SortDirection;
use crate::update_policy::UpdatePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Program,
    News,
    Partnership,
    TeamMember,
    Event,
    GalleryImage,
    Faq,
    StaticContent,
    Contact,
}

impl ResourceKind {
    pub const fn spec(self) -> &'static ResourceSpec {
        match self {
            ResourceKind::Program => &PROGRAM,
            ResourceKind::News => &NEWS,
            ResourceKind::Partnership => &PARTNERSHIP,
            ResourceKind::TeamMember => &TEAM_MEMBER,
            ResourceKind::Event => &EVENT,
            ResourceKind::GalleryImage => &GALLERY_IMAGE,
            ResourceKind::Faq => &FAQ,
            ResourceKind::StaticContent => &STATIC_CONTENT,
            ResourceKind::Contact => &CONTACT,
        }
    }
}

const PROGRAM: ResourceSpec = ResourceSpec {
    collection: "programs",
    id_field: "id",
    timestamps: TimestampMode::CreatedAndUpdated,
    default_sort: Some(("createdAt", SortDirection::Descending)),
    update_policy: UpdatePolicy::IgnoreAbsent,
    refetch_on_noop: false,
    default_page_size: 50,
};

const NEWS: ResourceSpec = ResourceSpec {
    collection: "news",
    id_field: "id",
    timestamps: TimestampMode::CreatedAndUpdated,
    default_sort: Some(("date", SortDirection::Descending)),
    update_policy: UpdatePolicy::IgnoreAbsentAndEmptyStrings,
    refetch_on_noop: false,
    default_page_size: 10,
};

const PARTNERSHIP: ResourceSpec = ResourceSpec {
    collection: "partnerships",
    id_field: "id",
    timestamps: TimestampMode::CreatedAndUpdated,
    default_sort: Some(("partnerName", SortDirection::Ascending)),
    update_policy: UpdatePolicy::IgnoreAbsent,
    refetch_on_noop: false,
    default_page_size: 50,
};

const TEAM_MEMBER: ResourceSpec = ResourceSpec {
    collection: "team",
    id_field: "id",
    timestamps: TimestampMode::CreatedAndUpdated,
    default_sort: Some(("order", SortDirection::Ascending)),
    update_policy: UpdatePolicy::IgnoreAbsent,
    refetch_on_noop: false,
    default_page_size: 100,
};

const EVENT: ResourceSpec = ResourceSpec {
    collection: "events",
    id_field: "id",
    timestamps: TimestampMode::CreatedAndUpdated,
    default_sort: Some(("startDate", SortDirection::Descending)),
    update_policy: UpdatePolicy::IgnoreAbsentAndEmptyStrings,
    refetch_on_noop: false,
    default_page_size: 20,
};

const GALLERY_IMAGE: ResourceSpec = ResourceSpec {
    collection: "gallery",
    id_field: "id",
    timestamps: TimestampMode::UploadDate,
    default_sort: Some(("uploadDate", SortDirection::Descending)),
    update_policy: UpdatePolicy::IgnoreAbsent,
    // Gallery updates return the current record even when the store
    // reports zero modified fields. The other resources signal a no-op
    // instead; clients depend on both behaviors.
    refetch_on_noop: true,
    default_page_size: 30,
};

const FAQ: ResourceSpec = ResourceSpec {
    collection: "faqs",
    id_field: "id",
    timestamps: TimestampMode::CreatedAndUpdated,
    default_sort: Some(("order", SortDirection::Ascending)),
    update_policy: UpdatePolicy::IgnoreAbsent,
    refetch_on_noop: false,
    default_page_size: 500,
};

const STATIC_CONTENT: ResourceSpec = ResourceSpec {
    collection: "static_content",
    id_field: "key",
    timestamps: TimestampMode::CreatedAndUpdated,
    default_sort: None,
    update_policy: UpdatePolicy::IgnoreAbsent,
    refetch_on_noop: false,
    default_page_size: 100,
};

const CONTACT: ResourceSpec = ResourceSpec {
    collection: "contacts",
    id_field: "id",
    timestamps: TimestampMode::CreatedOnly,
    default_sort: Some(("createdAt", SortDirection::Descending)),
    update_policy: UpdatePolicy::IgnoreAbsent,
    refetch_on_noop: false,
    default_page_size: 1000,
};
