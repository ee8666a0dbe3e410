use super::*;

fn frame(data: Vec<u8>, premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data,
        premultiplied,
    }
}

#[test]
fn pixel_rgb_bounds_and_values() {
    let f = frame(vec![1, 2, 3, 255, 4, 5, 6, 255], true);
    assert_eq!(f.pixel_rgb(1, 0), Some(Rgb8::new(4, 5, 6)));
    assert_eq!(f.pixel_rgb(2, 0), None);
    assert_eq!(f.pixel_rgb(0, 1), None);
    assert_eq!(f.pixels_rgb().count(), 2);
}

#[test]
fn premultiplied_pixels_are_demultiplied() {
    let f = frame(vec![64, 0, 0, 128, 0, 0, 0, 0], true);
    assert_eq!(f.pixel_rgb(0, 0), Some(Rgb8::new(128, 0, 0)));
    assert_eq!(f.pixel_rgb(1, 0), Some(Rgb8::BLACK));

    let straight = frame(vec![64, 0, 0, 128, 0, 0, 0, 0], false);
    assert_eq!(straight.pixel_rgb(0, 0), Some(Rgb8::new(64, 0, 0)));
}

#[test]
fn to_rgba_image_keeps_dimensions() {
    let f = frame(vec![10, 20, 30, 255, 40, 50, 60, 255], true);
    let img = f.to_rgba_image().unwrap();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(1, 0).0, [40, 50, 60, 255]);
    assert!(frame(vec![0; 4], true).to_rgba_image().is_none());
}
