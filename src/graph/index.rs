// src/graph/index.rs
//! Bijection between page names and dense node ids.

use std::collections::HashMap;

/// Maps page names to ids in `[0, N)` and back.
///
/// Ids are handed out in first-occurrence order and never reassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl PageIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, assigning the next one if it is new.
    pub fn get_or_insert(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    #[must_use]
    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    #[must_use]
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names.iter().map(String::as_str).enumerate()
    }
}
