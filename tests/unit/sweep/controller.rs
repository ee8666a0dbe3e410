use super::*;

use crate::{Rgb8, ShapeKind};

fn gradient(w: u32, h: u32) -> SourceImage {
    SourceImage::from_fn(w, h, |x, y| {
        let v = ((x * 255) / w.max(1)) as u8;
        Rgb8::new(v, (y * 17 % 256) as u8, 255 - v)
    })
}

#[test]
fn sweep_produces_frames_per_image_in_order() {
    let images = vec![gradient(8, 8), gradient(6, 10)];
    let cfg = RenderConfig::default().with_sweep(2, 6, 2);
    let seq = run_sweep(&images, &cfg).unwrap();
    let keys: Vec<_> = seq.keys().map(|k| (k.image_index, k.step)).collect();
    assert_eq!(
        keys,
        vec![(0, 2), (0, 4), (0, 6), (1, 2), (1, 4), (1, 6)]
    );
    let (_, last) = seq.get(5).unwrap();
    assert_eq!((last.width, last.height), (12, 20));
}

#[test]
fn invalid_config_renders_nothing() {
    let images = vec![gradient(4, 4)];
    let cfg = RenderConfig::default().with_sweep(10, 5, 1);
    assert!(run_sweep(&images, &cfg).unwrap_err().is_config());
}

#[test]
fn empty_image_list_is_rejected() {
    let cfg = RenderConfig::default();
    assert!(run_sweep(&[], &cfg).unwrap_err().is_config());
}

#[test]
fn parallel_matches_sequential() {
    let images = vec![gradient(12, 9), gradient(9, 12)];
    for shape in ShapeKind::ALL {
        let cfg = RenderConfig::for_shape(shape).with_sweep(1, 7, 3);
        let (seq, seq_stats) = run_sweep_with(&images, &cfg, &SweepThreading::default()).unwrap();
        let threading = SweepThreading {
            parallel: true,
            chunk_size: 2,
            threads: Some(3),
        };
        let (par, par_stats) = run_sweep_with(&images, &cfg, &threading).unwrap();
        assert_eq!(seq, par, "shape {shape}");
        assert_eq!(seq_stats, par_stats);
    }
}

#[test]
fn stats_count_frames() {
    let images = vec![gradient(4, 4); 3];
    let cfg = RenderConfig::default().with_sweep(1, 4, 1);
    let (seq, stats) = run_sweep_with(&images, &cfg, &SweepThreading::default()).unwrap();
    assert_eq!(
        stats,
        SweepStats {
            images: 3,
            steps_per_image: 4,
            frames_total: 12
        }
    );
    assert_eq!(seq.len(), 12);
}

#[test]
fn zero_threads_is_rejected() {
    let images = vec![gradient(4, 4)];
    let threading = SweepThreading {
        parallel: true,
        chunk_size: 4,
        threads: Some(0),
    };
    let err = run_sweep_with(&images, &RenderConfig::default(), &threading).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn zero_chunk_size_is_normalized() {
    assert_eq!(normalized_chunk_size(0), 1);
    assert_eq!(normalized_chunk_size(16), 16);
}

#[test]
fn render_failure_reports_image_and_step() {
    let images = vec![gradient(4, 4)];
    let cfg = RenderConfig::default();
    let bad = FrameKey {
        image_index: 3,
        step: 7,
    };
    for threading in [SweepThreading::default(), SweepThreading::parallel()] {
        let renderer = ChunkRenderer::new(&images, &cfg, &threading).unwrap();
        let ok = FrameKey {
            image_index: 0,
            step: 5,
        };
        let later_bad = FrameKey {
            image_index: 9,
            step: 11,
        };
        let err = renderer.render(&[ok, bad, later_bad]).unwrap_err();
        match err {
            RippleError::Render {
                image_index, step, ..
            } => assert_eq!((image_index, step), (3, 7)),
            other => panic!("expected a render failure, got {other}"),
        }
    }
}
