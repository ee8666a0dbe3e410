use super::*;

#[test]
fn intensity_truncates_average() {
    assert_eq!(Rgb8::new(1, 1, 2).intensity(), 1);
    assert_eq!(Rgb8::new(255, 255, 254).intensity(), 254);
    assert_eq!(Rgb8::WHITE.intensity(), 255);
}

#[test]
fn to_gray_is_gray() {
    let c = Rgb8::new(200, 10, 40).to_gray();
    assert!(c.is_gray());
    assert_eq!(c.r, 83);
}

#[test]
fn scaled_canvas_multiplies_exactly() {
    let s = CanvasSize::scaled(3, 5, 4).unwrap();
    assert_eq!((s.width, s.height), (12, 20));
    assert_eq!(s.center(), (6, 10));
    assert_eq!(s.rgba_len(), 12 * 20 * 4);
}

#[test]
fn scaled_canvas_rejects_empty_and_overflow() {
    assert!(CanvasSize::scaled(0, 5, 1).unwrap_err().is_config());
    assert!(CanvasSize::scaled(u32::MAX, 1, 2).unwrap_err().is_config());
}

#[test]
fn contains_is_half_open() {
    let s = CanvasSize {
        width: 4,
        height: 2,
    };
    assert!(s.contains(0, 0));
    assert!(s.contains(3, 1));
    assert!(!s.contains(4, 1));
    assert!(!s.contains(0, 2));
    assert!(!s.contains(-1, 0));
}

#[test]
fn fps_validation_and_duration() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(10, 0).is_err());
    let fps = Fps::default();
    assert!((fps.frame_duration_secs() - 0.1).abs() < 1e-12);
    assert!((fps.frames_to_secs(25) - 2.5).abs() < 1e-9);
}

#[test]
fn frame_keys_order_image_major() {
    let a = FrameKey {
        image_index: 0,
        step: 20,
    };
    let b = FrameKey {
        image_index: 1,
        step: 5,
    };
    assert!(a < b);
}
