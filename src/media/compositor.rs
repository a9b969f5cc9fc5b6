// SPDX-License-Identifier: MPL-2.0
//! Booth compositor shared by the live preview and the export.
//!
//! Both paths draw the same scene: the background stretched over the whole
//! canvas, then the photo clipped to the circular frame. They differ only in
//! the canvas size and in how the recorded offset is interpreted:
//!
//! - the preview canvas is as wide as the on-screen editor, so the offset is
//!   used as-is and the photo is scaled down by `preview / output`;
//! - the export canvas has the fixed output size, so the photo is drawn at
//!   `natural * zoom` and the offset is multiplied by `output / preview`.

use crate::config::{OUTPUT_HEIGHT, OUTPUT_WIDTH};
use crate::domain::booth::{
    place_photo, preview_to_output_ratio, to_output_offset, FrameGeometry, Offset, Placement,
    Zoom,
};
use crate::media::export::{ExportKind, ExportedImage};
use crate::media::image::ImageData;
use tiny_skia::{FillRule, FilterQuality, Mask, PathBuilder, Pixmap, PixmapPaint, Transform};

/// Everything needed to draw the booth once.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub background: &'a ImageData,
    pub photo: Option<&'a ImageData>,
    pub geometry: FrameGeometry,
    pub zoom: Zoom,
    /// Offset in preview pixels, relative to the frame center.
    pub offset: Offset,
}

/// Canvas size plus the photo scale and offset already expressed in that
/// canvas' pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub photo_scale: f32,
    pub offset: Offset,
}

impl Viewport {
    /// Viewport of the fixed-size export canvas.
    ///
    /// `preview_width` is the width the editor was rendered at while the
    /// offset was recorded; zero means it was never measured.
    #[must_use]
    pub fn export(zoom: Zoom, offset: Offset, preview_width: f32) -> Self {
        let ratio = preview_to_output_ratio(OUTPUT_WIDTH as f32, preview_width);
        Self {
            width: OUTPUT_WIDTH,
            height: OUTPUT_HEIGHT,
            photo_scale: zoom.value(),
            offset: to_output_offset(offset, ratio),
        }
    }

    /// Viewport of an on-screen preview `width` logical pixels wide.
    ///
    /// The height keeps the output aspect ratio.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn preview(zoom: Zoom, offset: Offset, width: f32) -> Self {
        let width = width.max(0.0);
        let shrink = width / OUTPUT_WIDTH as f32;
        let height = width * OUTPUT_HEIGHT as f32 / OUTPUT_WIDTH as f32;
        Self {
            width: width.round() as u32,
            height: height.round() as u32,
            photo_scale: zoom.value() * shrink,
            offset,
        }
    }
}

/// Draws `scene` into a new pixmap of the viewport's size.
///
/// Returns `None` when the viewport has no area, in which case there is no
/// drawing surface and nothing is drawn.
#[must_use]
pub fn render(scene: &Scene<'_>, viewport: &Viewport) -> Option<Pixmap> {
    let mut canvas = render_backdrop(scene.background, viewport.width, viewport.height)?;
    draw_photo(&mut canvas, scene, viewport);
    Some(canvas)
}

/// Stretches `background` over a new `width` x `height` pixmap.
#[must_use]
pub fn render_backdrop(background: &ImageData, width: u32, height: u32) -> Option<Pixmap> {
    let mut canvas = Pixmap::new(width, height)?;
    draw_stretched(&mut canvas, background, &smooth_paint());
    Some(canvas)
}

/// Draws the photo of `scene`, clipped to the frame, over `canvas`.
fn draw_photo(canvas: &mut Pixmap, scene: &Scene<'_>, viewport: &Viewport) {
    let Some(photo) = scene.photo else {
        return;
    };

    let circle = scene
        .geometry
        .circle(viewport.width as f32, viewport.height as f32);
    let Some(clip) = circle_mask(viewport, circle.center_x, circle.center_y, circle.radius)
    else {
        log::debug!("Frame circle has no area; photo skipped");
        return;
    };

    let placement = place_photo(
        circle,
        photo.width(),
        photo.height(),
        viewport.photo_scale,
        viewport.offset,
    );
    draw_placed(canvas, photo, &placement, &smooth_paint(), &clip);
}

fn smooth_paint() -> PixmapPaint {
    PixmapPaint {
        quality: FilterQuality::Bicubic,
        ..PixmapPaint::default()
    }
}

/// Renders the export: composite when a photo is present, background alone
/// otherwise.
///
/// Returns `None` when no drawing surface could be created.
#[must_use]
pub fn render_export(scene: &Scene<'_>, preview_width: f32) -> Option<ExportedImage> {
    let viewport = Viewport::export(scene.zoom, scene.offset, preview_width);
    let kind = if scene.photo.is_some() {
        ExportKind::Composite
    } else {
        ExportKind::BackgroundOnly
    };

    render(scene, &viewport).map(|pixmap| ExportedImage::from_pixmap(kind, &pixmap))
}

/// Renders the on-screen preview at `preview_width` logical pixels.
#[must_use]
pub fn render_preview(scene: &Scene<'_>, preview_width: f32) -> Option<Pixmap> {
    render(
        scene,
        &Viewport::preview(scene.zoom, scene.offset, preview_width),
    )
}

/// Stretched background of a preview `preview_width` logical pixels wide.
///
/// The result only depends on the background and the width, so it can be
/// kept and passed to [`render_preview_on`] while the photo moves.
#[must_use]
pub fn render_preview_backdrop(background: &ImageData, preview_width: f32) -> Option<Pixmap> {
    let viewport = Viewport::preview(Zoom::default(), Offset::ZERO, preview_width);
    render_backdrop(background, viewport.width, viewport.height)
}

/// Renders the preview by drawing only the photo over a kept backdrop.
///
/// Falls back to a full render when `backdrop` was made for another width.
#[must_use]
pub fn render_preview_on(
    backdrop: &Pixmap,
    scene: &Scene<'_>,
    preview_width: f32,
) -> Option<Pixmap> {
    let viewport = Viewport::preview(scene.zoom, scene.offset, preview_width);
    if (backdrop.width(), backdrop.height()) != (viewport.width, viewport.height) {
        return render(scene, &viewport);
    }
    let mut canvas = backdrop.clone();
    draw_photo(&mut canvas, scene, &viewport);
    Some(canvas)
}

fn draw_stretched(canvas: &mut Pixmap, image: &ImageData, paint: &PixmapPaint) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    if image.dimensions() == (canvas.width(), canvas.height()) {
        // Already canvas-sized: copy pixels instead of resampling.
        let exact = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..*paint
        };
        canvas.draw_pixmap(0, 0, image.pixmap().as_ref(), &exact, Transform::identity(), None);
        return;
    }
    let sx = canvas.width() as f32 / image.width() as f32;
    let sy = canvas.height() as f32 / image.height() as f32;
    canvas.draw_pixmap(
        0,
        0,
        image.pixmap().as_ref(),
        paint,
        Transform::from_scale(sx, sy),
        None,
    );
}

fn draw_placed(
    canvas: &mut Pixmap,
    image: &ImageData,
    placement: &Placement,
    paint: &PixmapPaint,
    clip: &Mask,
) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    let sx = placement.width / image.width() as f32;
    let sy = placement.height / image.height() as f32;
    let transform = Transform::from_scale(sx, sy).post_translate(placement.x, placement.y);
    canvas.draw_pixmap(0, 0, image.pixmap().as_ref(), paint, transform, Some(clip));
}

fn circle_mask(viewport: &Viewport, cx: f32, cy: f32, radius: f32) -> Option<Mask> {
    let path = PathBuilder::from_circle(cx, cy, radius)?;
    let mut mask = Mask::new(viewport.width, viewport.height)?;
    mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
    Some(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booth::Circle;
    use crate::media::image::ImageData;

    const BG: [u8; 4] = [0, 0, 255, 255];
    const PHOTO: [u8; 4] = [255, 0, 0, 255];

    fn solid(width: u32, height: u32, color: [u8; 4]) -> ImageData {
        let pixels: Vec<u8> = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        ImageData::from_rgba(width, height, &pixels).expect("valid solid image")
    }

    fn pixel(image: &ExportedImage, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * image.width + x) * 4) as usize;
        [
            image.rgba[i],
            image.rgba[i + 1],
            image.rgba[i + 2],
            image.rgba[i + 3],
        ]
    }

    fn output_circle() -> Circle {
        FrameGeometry::BOOTH.circle(OUTPUT_WIDTH as f32, OUTPUT_HEIGHT as f32)
    }

    #[test]
    fn export_is_always_output_sized() {
        let background = solid(64, 32, BG);
        let photo = solid(40, 30, PHOTO);
        for preview_width in [0.0, 120.0, 512.0, 1999.0] {
            let scene = Scene {
                background: &background,
                photo: Some(&photo),
                geometry: FrameGeometry::BOOTH,
                zoom: Zoom::new(2.0),
                offset: Offset::new(7.0, -3.0),
            };
            let exported = render_export(&scene, preview_width).expect("surface");
            assert_eq!((exported.width, exported.height), (OUTPUT_WIDTH, OUTPUT_HEIGHT));
            assert_eq!(exported.rgba.len(), (OUTPUT_WIDTH * OUTPUT_HEIGHT * 4) as usize);
        }
    }

    #[test]
    fn background_only_export_matches_background_everywhere() {
        let background = solid(16, 16, BG);
        let scene = Scene {
            background: &background,
            photo: None,
            geometry: FrameGeometry::BOOTH,
            zoom: Zoom::default(),
            offset: Offset::ZERO,
        };

        let exported = render_export(&scene, 300.0).expect("surface");
        assert_eq!(exported.kind, ExportKind::BackgroundOnly);
        for chunk in exported.rgba.chunks_exact(4) {
            assert_eq!(chunk, BG);
        }
    }

    #[test]
    fn photo_is_clipped_to_the_circle() {
        let background = solid(8, 8, BG);
        // Large enough at 3x to overflow the frame in every direction.
        let photo = solid(100, 100, PHOTO);
        let scene = Scene {
            background: &background,
            photo: Some(&photo),
            geometry: FrameGeometry::BOOTH,
            zoom: Zoom::new(3.0),
            offset: Offset::ZERO,
        };

        let exported = render_export(&scene, 512.0).expect("surface");
        assert_eq!(exported.kind, ExportKind::Composite);

        let circle = output_circle();
        let (cx, cy) = (circle.center_x as u32, circle.center_y as u32);
        assert_eq!(pixel(&exported, cx, cy), PHOTO);
        // Inside the photo's square but outside the circle.
        let corner = (circle.radius * 0.85) as u32;
        assert_eq!(pixel(&exported, cx + corner, cy - corner), BG);
        assert_eq!(pixel(&exported, 5, 5), BG);
    }

    #[test]
    fn preview_offset_is_scaled_into_output_space() {
        let background = solid(8, 8, BG);
        // Scaled to 20x20 output pixels: small enough to sit fully in the frame.
        let photo = solid(10, 10, PHOTO);
        let scene = Scene {
            background: &background,
            photo: Some(&photo),
            geometry: FrameGeometry::BOOTH,
            zoom: Zoom::new(2.0),
            offset: Offset::new(20.0, 0.0),
        };

        // Preview half as wide as the output: 20 preview px become 40 output px.
        let exported = render_export(&scene, 256.0).expect("surface");
        let circle = output_circle();
        let cy = circle.center_y as u32;
        let shifted_center = (circle.center_x + 40.0) as u32;
        assert_eq!(pixel(&exported, shifted_center, cy), PHOTO);
        assert_eq!(pixel(&exported, circle.center_x as u32, cy), BG);
    }

    #[test]
    fn zero_width_preview_keeps_offset_unscaled() {
        let viewport = Viewport::export(Zoom::default(), Offset::new(10.0, 10.0), 0.0);
        assert_eq!(viewport.offset, Offset::new(10.0, 10.0));
    }

    #[test]
    fn preview_viewport_shrinks_photo_not_offset() {
        let viewport = Viewport::preview(Zoom::new(2.0), Offset::new(5.0, 6.0), 256.0);
        assert_eq!((viewport.width, viewport.height), (256, 256));
        assert_eq!(viewport.photo_scale, 1.0);
        assert_eq!(viewport.offset, Offset::new(5.0, 6.0));
    }

    #[test]
    fn empty_surface_is_a_silent_no_op() {
        let background = solid(8, 8, BG);
        let scene = Scene {
            background: &background,
            photo: None,
            geometry: FrameGeometry::BOOTH,
            zoom: Zoom::default(),
            offset: Offset::ZERO,
        };
        assert!(render_preview(&scene, 0.0).is_none());
    }

    #[test]
    fn kept_backdrop_renders_like_a_full_preview() {
        let background = solid(64, 32, BG);
        let photo = solid(30, 20, PHOTO);
        let scene = Scene {
            background: &background,
            photo: Some(&photo),
            geometry: FrameGeometry::BOOTH,
            zoom: Zoom::new(1.5),
            offset: Offset::new(-6.0, 4.0),
        };

        let backdrop = render_preview_backdrop(&background, 200.0).expect("backdrop");
        let fast = render_preview_on(&backdrop, &scene, 200.0).expect("preview");
        let full = render_preview(&scene, 200.0).expect("preview");
        assert_eq!(fast.data(), full.data());
    }

    #[test]
    fn backdrop_of_another_width_is_not_reused() {
        let background = solid(8, 8, BG);
        let scene = Scene {
            background: &background,
            photo: None,
            geometry: FrameGeometry::BOOTH,
            zoom: Zoom::default(),
            offset: Offset::ZERO,
        };

        let backdrop = render_preview_backdrop(&background, 100.0).expect("backdrop");
        let preview = render_preview_on(&backdrop, &scene, 150.0).expect("preview");
        assert_eq!((preview.width(), preview.height()), (150, 150));
    }

    #[test]
    fn preview_and_export_agree_on_photo_position() {
        let background = solid(8, 8, BG);
        let photo = solid(10, 10, PHOTO);
        let scene = Scene {
            background: &background,
            photo: Some(&photo),
            geometry: FrameGeometry::BOOTH,
            zoom: Zoom::new(2.0),
            offset: Offset::new(10.0, 0.0),
        };

        let preview = render_preview(&scene, 256.0).expect("preview surface");
        let preview_circle = FrameGeometry::BOOTH.circle(256.0, 256.0);
        // Photo is 10 preview px wide, centered 10 px right of the frame center.
        let px = (preview_circle.center_x + 10.0) as u32;
        let py = preview_circle.center_y as u32;
        let color = preview
            .pixel(px, py)
            .expect("inside preview")
            .demultiply();
        assert_eq!(
            [color.red(), color.green(), color.blue(), color.alpha()],
            PHOTO
        );
    }
}
