//! Single-entity selection.
//!
//! At most one entity is selected at a time. Selecting another entity replaces
//! the previous selection in one assignment.

use crate::scene::Scene;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: Option<String>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, deselecting whatever was selected before.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The raw selection reference, without checking the scene.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// The selection if it still names an entity in `scene`.
    ///
    /// A reference to a missing entity reads as no selection.
    pub fn resolve<'a>(&'a self, scene: &Scene) -> Option<&'a str> {
        self.selected.as_deref().filter(|id| scene.contains(id))
    }
}
