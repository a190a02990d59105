//! Selection containers with pure transitions.
//!
//! Each transition takes `&self` and returns the next value, leaving the
//! original untouched, so a screen can keep history or compare states.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SymptomId;

/// Multi-select set of symptoms, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomSelection(Vec<SymptomId>);

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    pub fn toggle(&self, id: SymptomId) -> Self {
        let mut next = self.0.clone();
        match next.iter().position(|selected| *selected == id) {
            Some(index) => {
                next.remove(index);
            }
            None => next.push(id),
        }
        Self(next)
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    pub fn contains(&self, id: SymptomId) -> bool {
        self.0.contains(&id)
    }

    pub fn ids(&self) -> &[SymptomId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Single-select holder: at most one value, replaced on each selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SingleSelection<T>(Option<T>);

impl<T> Default for SingleSelection<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: Copy + PartialEq> SingleSelection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was selected with `value`.
    pub fn select(&self, value: T) -> Self {
        Self(Some(value))
    }

    pub fn cleared(&self) -> Self {
        Self(None)
    }

    pub fn selected(&self) -> Option<T> {
        self.0
    }

    pub fn is_selected(&self, value: T) -> bool {
        self.0 == Some(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}
