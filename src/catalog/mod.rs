//! # Tool Catalog
//!
//! The immutable set of tools getoai knows how to install. Built once at start-up
//! and handed by reference to the orchestrator and the commands.
//!
//! Lookups are exact by name. `search` matches name or description
//! case-insensitively, and `suggest` produces "Did you mean" candidates for
//! misspelled names.

mod entries;

use std::collections::BTreeMap;

use crate::schemas::tools::{Category, ToolRecord};

const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone)]
pub struct Catalog {
    tools: BTreeMap<String, ToolRecord>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_tools(entries::builtin_tools())
    }

    /// Later records replace earlier ones with the same name.
    pub fn from_tools(tools: impl IntoIterator<Item = ToolRecord>) -> Self {
        Catalog {
            tools: tools.into_iter().map(|t| (t.name.clone(), t)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ToolRecord> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// All tools sorted by name.
    pub fn list(&self) -> Vec<&ToolRecord> {
        self.tools.values().collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&ToolRecord> {
        self.tools
            .values()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Tools whose name or description contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&ToolRecord> {
        let needle = query.trim().to_lowercase();
        self.tools
            .values()
            .filter(|t| {
                t.name.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Close matches for an unknown tool name, best first.
    pub fn suggest(&self, name: &str) -> Vec<&str> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return Vec::new();
        }
        let threshold = (wanted.chars().count() / 3).max(2);

        let mut scored: Vec<(usize, &str)> = self
            .tools
            .keys()
            .filter_map(|candidate| {
                if candidate.contains(&wanted) || wanted.contains(candidate.as_str()) {
                    return Some((0, candidate.as_str()));
                }
                let distance = edit_distance(&wanted, candidate);
                (distance <= threshold).then_some((distance, candidate.as_str()))
            })
            .collect();
        scored.sort();
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.tools.len()
    }
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut current = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        previous = current;
    }
    previous[b.len()]
}
