use std::collections::HashSet;

use serde_json::Value;

use crate::project::RawProject;

#[derive(Clone, Copy, Debug)]
pub struct FallbackProject {
    pub id: &'static str,
    pub name: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    pub card_image: &'static str,
    pub spotlight_image: &'static str,
    pub url: &'static str,
}

pub const FALLBACK_PROJECTS: &[FallbackProject] = &[
    FallbackProject {
        id: "project_ahmad_portfolio_scss",
        name: "Portfolio SCSS",
        short_description: "Responsive personal site themed with modular SCSS.",
        long_description: "Showcases my design system experiments using SCSS partials, mixins, and reusable components to keep styles scalable while presenting my work cleanly.",
        card_image: "./images/personal_site_card.webp",
        spotlight_image: "./images/personal_site_spotlight.webp",
        url: "https://github.com/Ahmed-Herzalla0/Portfolio-scss",
    },
    FallbackProject {
        id: "project_ahmad_bizgrow",
        name: "BizGrow Landing",
        short_description: "Marketing landing page with polished animations.",
        long_description: "Landing experience for a fictional SaaS brand featuring scroll-triggered reveals, reusable layout utilities, and performance-conscious asset loading.",
        card_image: "./images/commerce_card.webp",
        spotlight_image: "./images/commerce_spotlight.webp",
        url: "https://github.com/Ahmed-Herzalla0/BizGrow-Landing-Website",
    },
    FallbackProject {
        id: "project_ahmad_kasper",
        name: "Kasper Template",
        short_description: "PSD-to-HTML conversion targeting pixel precision.",
        long_description: "Translated the Kasper PSD into semantic HTML and CSS, focusing on component structure, typography scales, and responsive behaviour without frameworks.",
        card_image: "./images/social_media_card.webp",
        spotlight_image: "./images/social_media_spotlight.webp",
        url: "https://github.com/Ahmed-Herzalla0/Kasper",
    },
    FallbackProject {
        id: "project_ahmad_logic_circuit",
        name: "Logic Circuit Basics",
        short_description: "Digital logic exercises with simulation files.",
        long_description: "Collection of combinational and sequential circuit designs that explore timers, multiplexers, and counters while documenting implementation trade-offs.",
        card_image: "./images/calculator_card.webp",
        spotlight_image: "./images/calculator_spotlight.webp",
        url: "https://github.com/Ahmed-Herzalla0/Basic-Logic-circut-main",
    },
    FallbackProject {
        id: "project_ahmad_elzero_playground",
        name: "Elzero Challenges",
        short_description: "Front-end practice solutions from Elzero Web School.",
        long_description: "A living archive of UI exercises, layout drills, and DOM manipulations completed while following Elzero Web School training content.",
        card_image: "./images/blog_card.webp",
        spotlight_image: "./images/blog_spotlight.webp",
        url: "https://github.com/Ahmed-Herzalla0/Elzero",
    },
    FallbackProject {
        id: "project_ahmad_leon_agency",
        name: "Leon Agency Template",
        short_description: "Creative agency landing built from a PSD brief.",
        long_description: "Implements a clean agency experience emphasising grid alignment, scroll rhythm, and reusable hero sections derived from the Leon PSD design.",
        card_image: "./images/music_app_card.webp",
        spotlight_image: "./images/music_app_spotlight.webp",
        url: "https://github.com/Ahmed-Herzalla0/Leon-PSD-Agency-Template",
    },
];

pub fn fallback_records() -> Vec<RawProject> {
    FALLBACK_PROJECTS
        .iter()
        .map(|entry| RawProject {
            project_id: Some(entry.id.to_string()),
            project_name: Some(entry.name.to_string()),
            short_description: Some(entry.short_description.to_string()),
            long_description: Some(entry.long_description.to_string()),
            card_image: Some(entry.card_image.to_string()),
            spotlight_image: Some(entry.spotlight_image.to_string()),
            url: Some(entry.url.to_string()),
        })
        .collect()
}

pub fn parse_project_payload(text: &str) -> Vec<RawProject> {
    let Ok(value) = serde_json::from_str::<Value>(text) else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items.iter().map(RawProject::from_value).collect()
}

// Fetched records keep their order and win id collisions; an empty merge
// still yields the first fallback record so the gallery is never empty.
pub fn merge_project_lists(fetched: Vec<RawProject>, fallback: &[RawProject]) -> Vec<RawProject> {
    let mut merged = fetched;
    let mut seen: HashSet<String> = merged
        .iter()
        .filter_map(|record| record.id())
        .map(str::to_string)
        .collect();
    for record in fallback {
        match record.id() {
            Some(id) if seen.contains(id) => {}
            Some(id) => {
                seen.insert(id.to_string());
                merged.push(record.clone());
            }
            None => merged.push(record.clone()),
        }
    }
    if merged.is_empty() {
        if let Some(first) = fallback.first() {
            merged.push(first.clone());
        }
    }
    merged
}
