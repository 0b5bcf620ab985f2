use std::collections::HashMap;

use crate::project::{normalize_project, Project, RawProject};

// previous == current when the active entry is re-selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<String>,
    pub current: String,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<Project>,
    index_by_id: HashMap<String, usize>,
    active: Option<String>,
}

impl Catalog {
    pub fn from_records(records: Vec<RawProject>) -> Self {
        let mut entries = Vec::with_capacity(records.len());
        let mut index_by_id = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            let project = normalize_project(Some(record), position);
            index_by_id.insert(project.project_id.clone(), position);
            entries.push(project);
        }
        let active = entries.first().map(|project| project.project_id.clone());
        Self {
            entries,
            index_by_id,
            active,
        }
    }

    pub fn select(&mut self, id: &str) -> Option<SelectionChange> {
        if !self.index_by_id.contains_key(id) {
            return None;
        }
        let previous = self.active.replace(id.to_string());
        Some(SelectionChange {
            previous,
            current: id.to_string(),
        })
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.index_by_id.get(id).map(|&index| &self.entries[index])
    }

    pub fn entries(&self) -> &[Project] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
