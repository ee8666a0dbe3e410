use super::*;

fn gradient() -> SourceImage {
    SourceImage::from_fn(3, 2, |x, y| Rgb8::new((x * 100) as u8, (y * 100) as u8, 7))
}

#[test]
fn divides_by_scale_and_floors() {
    let img = gradient();
    let s = PixelSampler::new(&img, 2, false);
    assert_eq!(s.source_coord(0, 0), (0, 0));
    assert_eq!(s.source_coord(1, 1), (0, 0));
    assert_eq!(s.source_coord(2, 3), (1, 1));
    assert_eq!(s.sample(5, 2), Rgb8::new(200, 100, 7));
}

#[test]
fn clamps_any_coordinate_into_range() {
    let img = gradient();
    let s = PixelSampler::new(&img, 3, false);
    for x in [-1000, -1, 0, 8, 9, 10_000] {
        for y in [-5, 0, 5, 6, 99] {
            let (sx, sy) = s.source_coord(x, y);
            assert!(sx < img.width() && sy < img.height());
            let _ = s.sample(x, y);
        }
    }
    assert_eq!(s.source_coord(-1, -1), (0, 0));
    assert_eq!(s.source_coord(10_000, 10_000), (2, 1));
}

#[test]
fn grayscale_returns_equal_channels() {
    let img = gradient();
    let s = PixelSampler::new(&img, 1, true);
    for y in 0..2 {
        for x in 0..3 {
            let c = s.sample(x, y);
            assert!(c.is_gray(), "{c:?}");
            assert_eq!(c.r, img.pixel(x as u32, y as u32).unwrap().intensity());
        }
    }
}

#[test]
fn empty_image_samples_as_background() {
    let img = SourceImage::from_rgb(image::RgbImage::new(0, 3));
    let s = PixelSampler::new(&img, 2, false);
    assert_eq!(img.pixel(0, 0), None);
    assert_eq!(s.sample(0, 0), Rgb8::WHITE);
    assert_eq!(s.sample(-7, 40), Rgb8::WHITE);
}
