//! Grouping of a flat suggestion list for presentation
//!
//! Groups appear in the order their names are first encountered, and each
//! group keeps its suggestions in arrival order. Every suggestion also gets a
//! running index across all groups, which is what selection addresses.

use super::Suggestion;

/// Heading used for suggestions without a (non-blank) group name
pub const DEFAULT_GROUP_NAME: &str = "Suggestions";

/// A named group of suggestions
#[derive(Debug, Clone)]
pub struct SuggestionGroup {
    pub name: String,
    /// `(flat index, suggestion)` pairs in arrival order
    pub items: Vec<(usize, Suggestion)>,
}

/// Suggestions partitioned into groups
#[derive(Debug, Clone, Default)]
pub struct GroupedSuggestions {
    pub groups: Vec<SuggestionGroup>,
}

impl GroupedSuggestions {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of suggestions across groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Suggestion at a flat presentation index
    pub fn get(&self, index: usize) -> Option<&Suggestion> {
        self.iter().find(|(i, _)| *i == index).map(|(_, s)| s)
    }

    /// All suggestions in presentation order with their flat index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Suggestion)> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter().map(|(i, s)| (*i, s)))
    }

    /// Group names in presentation order
    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }
}

/// Partition suggestions into groups keyed by their effective group name
pub fn group_suggestions(suggestions: &[Suggestion]) -> GroupedSuggestions {
    let mut groups: Vec<SuggestionGroup> = Vec::new();

    for suggestion in suggestions {
        let name = suggestion.effective_group();
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.items.push((0, suggestion.clone())),
            None => groups.push(SuggestionGroup {
                name: name.to_string(),
                items: vec![(0, suggestion.clone())],
            }),
        }
    }

    // Number in presentation order, not input order
    let mut index = 0;
    for group in &mut groups {
        for item in &mut group.items {
            item.0 = index;
            index += 1;
        }
    }

    GroupedSuggestions { groups }
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod grouping_tests;
