use super::*;

use crate::Fps;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "rippleframe_png_{tag}_{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn white(w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: vec![255; (w * h * 4) as usize],
        premultiplied: true,
    }
}

fn key(step: u32) -> FrameKey {
    FrameKey {
        image_index: 0,
        step,
    }
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(frame_file_name(0), "frame_0000.png");
    assert_eq!(frame_file_name(42), "frame_0042.png");
    assert_eq!(frame_file_name(12345), "frame_12345.png");
}

#[test]
fn writes_one_png_per_frame() {
    let dir = temp_dir("write");
    let mut sink = PngSequenceSink::new(PngSequenceOpts::new(&dir));
    sink.begin(SinkConfig {
        width: 3,
        height: 2,
        fps: Fps::default(),
        audio: None,
    })
    .unwrap();
    sink.push_frame(0, key(1), &white(3, 2)).unwrap();
    sink.push_frame(1, key(2), &white(3, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    let img = image::open(dir.join("frame_0001.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rejects_size_mismatch_and_reordering() {
    let dir = temp_dir("reject");
    let mut sink = PngSequenceSink::new(PngSequenceOpts::new(&dir));
    sink.begin(SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
        audio: None,
    })
    .unwrap();
    assert!(sink.push_frame(0, key(1), &white(3, 2)).is_err());
    sink.push_frame(1, key(1), &white(2, 2)).unwrap();
    assert!(sink.push_frame(1, key(2), &white(2, 2)).is_err());
    sink.abort();
    assert!(!dir.join("frame_0001.png").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn audio_is_rejected() {
    let dir = temp_dir("audio");
    let mut sink = PngSequenceSink::new(PngSequenceOpts::new(&dir));
    let err = sink
        .begin(SinkConfig {
            width: 2,
            height: 2,
            fps: Fps::default(),
            audio: Some(crate::encode::sink::AudioInputConfig {
                path: PathBuf::from("track.wav"),
            }),
        })
        .unwrap_err();
    assert!(err.is_config());
    assert!(!dir.exists());
}
