use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::asset_path::resolve_asset_path;

pub const CARD_PLACEHOLDER: &str = "./images/card_placeholder_bg.webp";
pub const SPOTLIGHT_PLACEHOLDER: &str = "./images/spotlight_placeholder_bg.webp";

pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";
pub const DEFAULT_SHORT_DESCRIPTION: &str = "Details coming soon.";
pub const DEFAULT_LONG_DESCRIPTION: &str = "Check back soon for a full project description.";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProject {
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub card_image: Option<String>,
    pub spotlight_image: Option<String>,
    pub url: Option<String>,
}

impl RawProject {
    // Non-string fields count as absent; a non-object yields an empty record.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            project_id: field("project_id"),
            project_name: field("project_name"),
            short_description: field("short_description"),
            long_description: field("long_description"),
            card_image: field("card_image"),
            spotlight_image: field("spotlight_image"),
            url: field("url"),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.project_id.as_deref().filter(|id| !id.is_empty())
    }
}

// All fields populated; an empty url means the project link is not live yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub project_name: String,
    pub short_description: String,
    pub long_description: String,
    pub card_image: String,
    pub spotlight_image: String,
    pub url: String,
}

impl Project {
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

const EMPTY_RECORD: RawProject = RawProject {
    project_id: None,
    project_name: None,
    short_description: None,
    long_description: None,
    card_image: None,
    spotlight_image: None,
    url: None,
};

pub fn normalize_project(raw: Option<&RawProject>, position: usize) -> Project {
    let record = raw.unwrap_or(&EMPTY_RECORD);
    let project_id = record
        .project_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("project_{}", position + 1));
    Project {
        project_id,
        project_name: text_or(&record.project_name, DEFAULT_PROJECT_NAME),
        short_description: text_or(&record.short_description, DEFAULT_SHORT_DESCRIPTION),
        long_description: text_or(&record.long_description, DEFAULT_LONG_DESCRIPTION),
        card_image: resolve_asset_path(record.card_image.as_deref(), CARD_PLACEHOLDER),
        spotlight_image: resolve_asset_path(record.spotlight_image.as_deref(), SPOTLIGHT_PLACEHOLDER),
        url: record.url.as_deref().map(str::trim).unwrap_or("").to_string(),
    }
}

fn text_or(value: &Option<String>, default: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => default.to_string(),
    }
}
