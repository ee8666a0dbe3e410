use super::*;

use crate::encode::sink::InMemorySink;
use crate::{FrameRGBA, Rgb8, run_sweep};

fn checker(w: u32, h: u32) -> SourceImage {
    SourceImage::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb8::BLACK
        } else {
            Rgb8::gray(200)
        }
    })
}

#[test]
fn streams_same_frames_as_sweep() {
    let images = vec![checker(6, 6), checker(6, 6)];
    let cfg = RenderConfig::default().with_sweep(1, 5, 2);
    let mut sink = InMemorySink::new();
    let stats = render_to_sink(&images, &cfg, &AnimationOpts::default(), &mut sink).unwrap();
    assert_eq!(stats.frames_total, 6);
    assert!(sink.is_finished());

    let expected = run_sweep(&images, &cfg).unwrap();
    assert_eq!(sink.frames(), expected.into_frames().as_slice());
    let sink_cfg = sink.config().unwrap();
    assert_eq!((sink_cfg.width, sink_cfg.height), (12, 12));
    assert_eq!(sink_cfg.fps, Fps { num: 10, den: 1 });
}

#[test]
fn mixed_sizes_are_rejected_before_begin() {
    let images = vec![checker(4, 4), checker(4, 5)];
    let mut sink = InMemorySink::new();
    let err = render_to_sink(
        &images,
        &RenderConfig::default(),
        &AnimationOpts::default(),
        &mut sink,
    )
    .unwrap_err();
    assert!(err.is_config());
    assert!(sink.config().is_none());
}

#[test]
fn audio_path_is_forwarded() {
    let images = vec![checker(2, 2)];
    let opts = AnimationOpts {
        audio: Some(PathBuf::from("song.mp3")),
        ..AnimationOpts::default()
    };
    let mut sink = InMemorySink::new();
    render_to_sink(&images, &RenderConfig::default(), &opts, &mut sink).unwrap();
    let audio = sink.config().and_then(|c| c.audio).map(|a| a.path);
    assert_eq!(audio, Some(PathBuf::from("song.mp3")));
}

struct FailingSink {
    accept: usize,
    seen: usize,
    aborted: bool,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> RippleResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _index: u64, _key: FrameKey, _frame: &FrameRGBA) -> RippleResult<()> {
        if self.seen == self.accept {
            return Err(RippleError::encode("disk full"));
        }
        self.seen += 1;
        Ok(())
    }

    fn end(&mut self) -> RippleResult<()> {
        Ok(())
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}

#[test]
fn sink_failure_aborts_the_animation() {
    let images = vec![checker(4, 4)];
    let cfg = RenderConfig::default().with_sweep(1, 10, 1);
    let mut sink = FailingSink {
        accept: 3,
        seen: 0,
        aborted: false,
    };
    let err = render_to_sink(&images, &cfg, &AnimationOpts::default(), &mut sink).unwrap_err();
    assert!(matches!(err, RippleError::Encode(_)));
    assert!(sink.aborted);
    assert_eq!(sink.seen, 3);
}
