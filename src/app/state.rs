//! Application state - the `CollageCanvas` struct definition.

use crate::image_library::ImageLibrary;
use crate::input::InteractionState;
use crate::input::coords::CanvasOrigin;
use crate::render::{FrameView, RenderStyle};
use crate::scene::Scene;
use crate::selection::SelectionManager;
use crate::types::{Bounds, CollageEntity};
use crate::viewport::ViewportManager;

/// The canvas: scene, selection, interaction state and export flag, owned in
/// one place.
pub struct CollageCanvas {
    pub(crate) scene: Scene,
    pub(crate) selection: SelectionManager,
    pub(crate) input_state: InteractionState,
    pub(crate) viewport: ViewportManager,
    /// Screen offset of the canvas surface inside the host window
    pub(crate) origin: CanvasOrigin,
    /// Decoded images keyed by `src`
    pub(crate) library: ImageLibrary,
    pub(crate) style: RenderStyle,
    /// True only while an export is running
    pub(crate) exporting: bool,
}

impl CollageCanvas {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn entities(&self) -> &[CollageEntity] {
        self.scene.entities()
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.input_state
    }

    pub fn viewport(&self) -> &ViewportManager {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportManager {
        &mut self.viewport
    }

    pub fn origin(&self) -> CanvasOrigin {
        self.origin
    }

    pub fn set_origin(&mut self, origin: CanvasOrigin) {
        self.origin = origin;
    }

    pub fn library(&self) -> &ImageLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut ImageLibrary {
        &mut self.library
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// The selected entity id, if it still exists in the scene.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.resolve(&self.scene)
    }

    /// Whether `id` should be drawn as selected. Always false while exporting.
    pub fn is_selected(&self, id: &str) -> bool {
        !self.exporting && self.selected_id() == Some(id)
    }

    /// Select an entity programmatically and raise it to the top.
    ///
    /// Returns false if no entity has this id.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.scene.raise_to_top(id) {
            return false;
        }
        self.selection.select(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Bounds of `id` as currently displayed, including any live gesture.
    pub fn displayed_bounds(&self, id: &str) -> Option<Bounds> {
        let entity = self.scene.get(id)?;
        if self.input_state.entity_id() == Some(id) {
            Some(self.input_state.live_bounds(entity.bounds()))
        } else {
            Some(entity.bounds())
        }
    }

    pub(crate) fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            selected: self.selected_id(),
            decorations_visible: !self.exporting,
            interaction: &self.input_state,
        }
    }
}
