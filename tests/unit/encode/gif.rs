use super::*;

#[test]
fn delay_is_one_over_fps() {
    assert_eq!(
        frame_delay(Fps { num: 10, den: 1 }).numer_denom_ms(),
        Delay::from_numer_denom_ms(100, 1).numer_denom_ms()
    );
    let (n, d) = frame_delay(Fps { num: 30000, den: 1001 }).numer_denom_ms();
    assert!(((n as f64 / d as f64) - 33.3667).abs() < 0.01);
}

#[test]
fn begin_rejects_zero_fps() {
    let dir = std::env::temp_dir().join(format!("rippleframe_gif_fps_{}", std::process::id()));
    let mut sink = GifSink::new(GifSinkOpts::new(dir.join("x.gif")));
    let err = sink
        .begin(SinkConfig {
            width: 2,
            height: 2,
            fps: Fps { num: 0, den: 1 },
            audio: None,
        })
        .unwrap_err();
    assert!(err.is_config());
}

#[test]
fn end_without_begin_fails() {
    let mut sink = GifSink::new(GifSinkOpts::new("never.gif"));
    assert!(sink.end().is_err());
}

#[test]
fn audio_is_rejected_before_the_file_is_created() {
    let dir = std::env::temp_dir().join(format!("rippleframe_gif_audio_{}", std::process::id()));
    let path = dir.join("silent.gif");
    let _ = std::fs::remove_file(&path);
    let mut sink = GifSink::new(GifSinkOpts::new(&path));
    let err = sink
        .begin(SinkConfig {
            width: 2,
            height: 2,
            fps: Fps::default(),
            audio: Some(crate::encode::sink::AudioInputConfig {
                path: PathBuf::from("track.mp3"),
            }),
        })
        .unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("track.mp3"));
    assert!(!path.exists());
}
