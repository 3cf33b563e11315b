//! Viewport tracking - the pixel size of the rendering surface.
//!
//! The surface follows the host window. Hosts forward window resize
//! notifications to [`ViewportManager::handle_window_resize`], which updates the
//! size synchronously and notifies registered listeners.

use tracing::debug;

/// Renderable surface size in integer pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const ZERO: Viewport = Viewport {
        width: 0,
        height: 0,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero-area viewport is "not yet ready to render".
    pub fn is_ready(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

type ResizeListener = Box<dyn FnMut(Viewport)>;

/// Owns the current viewport and the listeners interested in its changes.
pub struct ViewportManager {
    viewport: Viewport,
    listeners: Vec<ResizeListener>,
}

impl ViewportManager {
    /// Manager bound to a host window of the given size.
    pub fn for_window(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            listeners: Vec::new(),
        }
    }

    /// Manager with no host window: reports a zero-size viewport.
    pub fn detached() -> Self {
        Self {
            viewport: Viewport::ZERO,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> Viewport {
        self.viewport
    }

    pub fn is_ready(&self) -> bool {
        self.viewport.is_ready()
    }

    /// Register a callback run after every size change.
    pub fn subscribe(&mut self, listener: impl FnMut(Viewport) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply a host window resize. Returns true if the size changed.
    pub fn handle_window_resize(&mut self, width: u32, height: u32) -> bool {
        let next = Viewport::new(width, height);
        if next == self.viewport {
            return false;
        }

        debug!(
            from_width = self.viewport.width,
            from_height = self.viewport.height,
            width,
            height,
            "Viewport resized"
        );
        self.viewport = next;
        for listener in &mut self.listeners {
            listener(next);
        }
        true
    }

    /// The host window went away; fall back to a zero-size viewport.
    pub fn detach(&mut self) {
        self.handle_window_resize(0, 0);
    }
}

impl Default for ViewportManager {
    fn default() -> Self {
        Self::detached()
    }
}

impl std::fmt::Debug for ViewportManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportManager")
            .field("viewport", &self.viewport)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
