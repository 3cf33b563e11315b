//! Frame rendering.
//!
//! A frame is a pure function of the scene, the decoded images, the viewport
//! and the transient interaction state. Entities are drawn in scene order so
//! the last one ends up on top; the selection border and resize handles are
//! drawn above everything when decorations are visible.

use crate::constants::{HANDLE_SIZE, SELECTION_BORDER_WIDTH};
use crate::error::{CollageError, CollageResult};
use crate::image_library::ImageLibrary;
use crate::input::InteractionState;
use crate::profile_scope;
use crate::scene::Scene;
use crate::settings::Settings;
use crate::types::{Bounds, Handle};
use crate::viewport::Viewport;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::trace;

/// Colours used for the canvas and the selection chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub background: Rgba<u8>,
    pub selection_color: Rgba<u8>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl RenderStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            background: Rgba(settings.background_color),
            selection_color: Rgba(settings.selection_color),
        }
    }
}

/// Transient state that affects a frame without being part of the scene.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    /// Resolved selection (already checked against the scene)
    pub selected: Option<&'a str>,
    /// False while exporting
    pub decorations_visible: bool,
    pub interaction: &'a InteractionState,
}

/// Render the scene into a new RGBA frame the size of the viewport.
pub fn render_frame(
    scene: &Scene,
    library: &ImageLibrary,
    viewport: Viewport,
    view: &FrameView<'_>,
    style: &RenderStyle,
) -> CollageResult<RgbaImage> {
    profile_scope!("render_frame");

    if !viewport.is_ready() {
        return Err(CollageError::ViewportNotReady {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let mut frame = RgbaImage::from_pixel(viewport.width, viewport.height, style.background);
    let mut chrome = None;

    for entity in scene.iter() {
        let bounds = if view.interaction.entity_id() == Some(entity.id.as_str()) {
            view.interaction.live_bounds(entity.bounds())
        } else {
            entity.bounds()
        };

        match library.get(&entity.src) {
            Some(image) => draw_image(&mut frame, image, bounds),
            None => trace!(id = %entity.id, src = %entity.src, "Image not loaded, skipping"),
        }

        if view.decorations_visible && view.selected == Some(entity.id.as_str()) {
            chrome = Some(bounds);
        }
    }

    if let Some(bounds) = chrome {
        draw_selection(&mut frame, bounds, style.selection_color);
    }

    Ok(frame)
}

/// Draw `image` scaled into `bounds`.
///
/// Work is bounded by the frame: entities outside it are skipped and an entity
/// that is only partly visible has just its visible part resampled.
fn draw_image(frame: &mut RgbaImage, image: &RgbaImage, bounds: Bounds) {
    if !bounds.is_finite() {
        return;
    }

    let left = f64::from(bounds.x.round());
    let top = f64::from(bounds.y.round());
    let width = f64::from(bounds.width.round().max(1.0));
    let height = f64::from(bounds.height.round().max(1.0));

    let x0 = left.max(0.0);
    let y0 = top.max(0.0);
    let x1 = (left + width).min(f64::from(frame.width()));
    let y1 = (top + height).min(f64::from(frame.height()));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let fully_visible = x0 == left && y0 == top && x1 == left + width && y1 == top + height;
    if fully_visible {
        let size = (width as u32, height as u32);
        if image.dimensions() == size {
            imageops::overlay(frame, image, left as i64, top as i64);
        } else {
            let scaled = imageops::resize(image, size.0, size.1, FilterType::Triangle);
            imageops::overlay(frame, &scaled, left as i64, top as i64);
        }
        return;
    }

    let visible = RgbaImage::from_fn((x1 - x0) as u32, (y1 - y0) as u32, |x, y| {
        let u = (x0 + f64::from(x) + 0.5 - left) / width;
        let v = (y0 + f64::from(y) + 0.5 - top) / height;
        imageops::sample_bilinear(image, u as f32, v as f32).unwrap_or(Rgba([0, 0, 0, 0]))
    });
    imageops::overlay(frame, &visible, x0 as i64, y0 as i64);
}

fn draw_selection(frame: &mut RgbaImage, bounds: Bounds, color: Rgba<u8>) {
    let left = bounds.x.round() as i64;
    let top = bounds.y.round() as i64;
    let right = bounds.right().round() as i64;
    let bottom = bounds.bottom().round() as i64;
    let stroke = SELECTION_BORDER_WIDTH as i64;

    fill_rect(frame, left, top, right, top + stroke, color);
    fill_rect(frame, left, bottom - stroke, right, bottom, color);
    fill_rect(frame, left, top, left + stroke, bottom, color);
    fill_rect(frame, right - stroke, top, right, bottom, color);

    let half = (HANDLE_SIZE / 2.0).round() as i64;
    let white = Rgba([255, 255, 255, 255]);
    for handle in Handle::all() {
        let anchor = handle.anchor_point(bounds);
        let cx = anchor.x.round() as i64;
        let cy = anchor.y.round() as i64;
        fill_rect(frame, cx - half, cy - half, cx + half, cy + half, color);
        fill_rect(frame, cx - half + stroke, cy - half + stroke, cx + half - stroke, cy + half - stroke, white);
    }
}

/// Fill the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the frame.
fn fill_rect(frame: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
    let (width, height) = (frame.width() as i64, frame.height() as i64);
    let x0 = x0.clamp(0, width);
    let x1 = x1.clamp(0, width);
    let y0 = y0.clamp(0, height);
    let y1 = y1.clamp(0, height);

    for y in y0..y1 {
        for x in x0..x1 {
            frame.put_pixel(x as u32, y as u32, color);
        }
    }
}
