pub mod asset_path;
pub mod catalog;
pub mod contact;
pub mod gallery;
pub mod profile;
pub mod project;
pub mod scroll;

pub use asset_path::resolve_asset_path;
pub use catalog::{fallback_records, merge_project_lists, parse_project_payload, FALLBACK_PROJECTS};
pub use contact::{validate_contact, ContactValidation, MAX_MESSAGE_LENGTH};
pub use gallery::{Catalog, SelectionChange};
pub use profile::{compose_about_text, HEADSHOT_FALLBACK, OWNER_PROFILE};
pub use project::{normalize_project, Project, RawProject};
pub use scroll::{axis_for_viewport, step_distance, ScrollAxis};
