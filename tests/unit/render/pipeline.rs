use super::*;

use crate::{RowSampling, ShapeKind};

fn one_step(shape: ShapeKind, scale: u32) -> RenderConfig {
    RenderConfig::for_shape(shape)
        .with_sweep(1, 1, 1)
        .with_scale_factor(scale)
}

fn dark_pixels(frame: &FrameRGBA) -> usize {
    frame.pixels_rgb().filter(|c| c.intensity() < 128).count()
}

#[test]
fn white_two_by_two_stays_white() {
    let img = SourceImage::filled(2, 2, Rgb8::WHITE);
    let frame = render_frame(&img, &one_step(ShapeKind::Circle, 1), 1).unwrap();
    assert_eq!((frame.width, frame.height), (2, 2));
    assert!(frame.pixels_rgb().all(|c| c == Rgb8::WHITE));
}

#[test]
fn canvas_is_exactly_scaled() {
    let img = SourceImage::filled(7, 3, Rgb8::BLACK);
    for scale in [1, 2, 3] {
        for shape in ShapeKind::ALL {
            let frame = render_frame(&img, &one_step(shape, scale), 2).unwrap();
            assert_eq!((frame.width, frame.height), (7 * scale, 3 * scale));
            assert_eq!(frame.data.len(), (7 * scale * 3 * scale * 4) as usize);
        }
    }
}

#[test]
fn dark_source_leaves_ink_for_every_shape() {
    let img = SourceImage::filled(24, 24, Rgb8::new(20, 20, 20));
    for shape in ShapeKind::ALL {
        let frame = render_frame(&img, &one_step(shape, 1), 4).unwrap();
        assert!(dark_pixels(&frame) > 0, "{shape}");
    }
}

#[test]
fn larger_steps_draw_fewer_scanlines() {
    let img = SourceImage::filled(32, 32, Rgb8::WHITE);
    let cfg = one_step(ShapeKind::ParallelLines, 1).with_ink(InkMode::Black);
    let dense = render_frame(&img, &cfg, 2).unwrap();
    let sparse = render_frame(&img, &cfg, 8).unwrap();
    assert!(dark_pixels(&dense) > dark_pixels(&sparse));
    // Row 0 is always drawn, row 1 never is when the step is 8 and thickness is 1.
    assert_eq!(sparse.pixel_rgb(10, 0), Some(Rgb8::BLACK));
    assert_eq!(sparse.pixel_rgb(10, 3), Some(Rgb8::WHITE));
}

#[test]
fn black_ink_ignores_source_color() {
    let img = SourceImage::filled(16, 16, Rgb8::new(40, 200, 40));
    let cfg = one_step(ShapeKind::Square, 1).with_ink(InkMode::Black);
    let frame = render_frame(&img, &cfg, 3).unwrap();
    assert!(frame.pixels_rgb().all(|c| c == Rgb8::WHITE || c == Rgb8::BLACK));
    assert!(frame.pixels_rgb().any(|c| c == Rgb8::BLACK));
}

#[test]
fn grayscale_frames_have_equal_channels() {
    let img = SourceImage::from_fn(12, 12, |x, y| Rgb8::new((x * 20) as u8, 30, (y * 20) as u8));
    for shape in ShapeKind::ALL {
        let cfg = one_step(shape, 2).with_grayscale(true);
        let frame = render_frame(&img, &cfg, 3).unwrap();
        assert!(frame.pixels_rgb().all(Rgb8::is_gray), "{shape}");
    }
}

#[test]
fn render_is_idempotent() {
    let img = SourceImage::from_fn(10, 8, |x, y| Rgb8::new((x * 25) as u8, (y * 30) as u8, 60));
    for shape in ShapeKind::ALL {
        let cfg = one_step(shape, 2).with_row_sampling(RowSampling::ScaleFactor);
        let a = render_frame(&img, &cfg, 3).unwrap();
        let b = render_frame(&img, &cfg, 3).unwrap();
        assert_eq!(a, b, "{shape}");
    }
}

#[test]
fn zero_step_and_bad_config_are_rejected() {
    let img = SourceImage::filled(4, 4, Rgb8::BLACK);
    assert!(
        render_frame(&img, &one_step(ShapeKind::Circle, 1), 0)
            .unwrap_err()
            .is_config()
    );
    assert!(
        render_frame(&img, &one_step(ShapeKind::Circle, 0), 1)
            .unwrap_err()
            .is_config()
    );
}

#[test]
fn empty_image_is_a_config_error() {
    let img = SourceImage::from_rgb(image::RgbImage::new(0, 3));
    assert!(
        render_frame(&img, &one_step(ShapeKind::Circle, 1), 1)
            .unwrap_err()
            .is_config()
    );
}
