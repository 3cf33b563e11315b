//! Application lifecycle - construction and host window events.

use super::CollageCanvas;
use crate::error::CollageResult;
use crate::image_library::ImageLibrary;
use crate::input::InteractionState;
use crate::input::coords::CanvasOrigin;
use crate::render::{RenderStyle, render_frame};
use crate::scene::Scene;
use crate::selection::SelectionManager;
use crate::settings::Settings;
use crate::viewport::ViewportManager;
use image::RgbaImage;
use tracing::info;

impl CollageCanvas {
    pub fn new(viewport: ViewportManager) -> Self {
        Self::with_style(viewport, RenderStyle::default())
    }

    /// Canvas using the colours from `settings`.
    pub fn from_settings(settings: &Settings, viewport: ViewportManager) -> Self {
        Self::with_style(viewport, RenderStyle::from_settings(settings))
    }

    fn with_style(viewport: ViewportManager, style: RenderStyle) -> Self {
        let size = viewport.current();
        info!(width = size.width, height = size.height, "Canvas created");

        Self {
            scene: Scene::new(),
            selection: SelectionManager::new(),
            input_state: InteractionState::default(),
            viewport,
            origin: CanvasOrigin::default(),
            library: ImageLibrary::new(),
            style,
            exporting: false,
        }
    }

    /// Forward a host window resize. Returns true if the viewport changed.
    pub fn handle_window_resize(&mut self, width: u32, height: u32) -> bool {
        self.viewport.handle_window_resize(width, height)
    }

    /// Render the current frame with selection decorations.
    pub fn render(&self) -> CollageResult<RgbaImage> {
        render_frame(
            &self.scene,
            &self.library,
            self.viewport.current(),
            &self.frame_view(),
            &self.style,
        )
    }
}
