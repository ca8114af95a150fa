// SPDX-License-Identifier: MPL-2.0
use iced_hero::background::decoder::{BackgroundDecoder, DecoderEvent};
use iced_hero::background::{self, Background, LoadState, PlaybackEvent, SourceList};
use iced_hero::error::MediaErrorCode;
use std::time::Duration;
use tempfile::tempdir;

#[tokio::test]
async fn unavailable_video_leaves_hero_not_ready_with_code_four() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let sources = SourceList::new(dir.path().join("background-video.mp4"), "");

    let mut decoder = BackgroundDecoder::new(sources.clone(), true);
    let event = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
        .await
        .expect("decoder should report promptly")
        .expect("decoder should report an event");
    assert!(matches!(event, DecoderEvent::Error(_)));

    let mut hero_video = Background::new(sources, true);
    hero_video.update(background::Message::Playback(PlaybackEvent::from(event)));

    assert!(!hero_video.is_ready());
    match hero_video.load_state() {
        LoadState::Failed(err) => {
            assert_eq!(err.code, Some(MediaErrorCode::SourceNotSupported));
            assert_eq!(err.message(), "Video failed to load. Error code: 4");
        }
        other => panic!("expected failed load, got {other:?}"),
    }
}

#[test]
fn load_classification_happens_once() {
    let mut hero_video = Background::new(SourceList::new("hero.mp4", ""), false);
    hero_video.update(background::Message::Playback(PlaybackEvent::Loaded {
        source: "hero.mp4".to_string(),
        width: 1920,
        height: 1080,
    }));
    assert!(hero_video.is_ready());

    hero_video.update(background::Message::Playback(PlaybackEvent::Failed(
        iced_hero::error::VideoError::new(MediaErrorCode::Decode, "corrupt packet"),
    )));
    assert_eq!(hero_video.load_state(), &LoadState::Ready);
}

#[test]
fn blank_sources_are_skipped() {
    let sources = SourceList::new("", "  ");
    assert!(sources.is_empty());

    let sources = SourceList::new("local.mp4", "https://example.com/hero.mp4");
    let remote: Vec<bool> = sources.iter().map(|source| source.is_remote()).collect();
    assert_eq!(remote, vec![false, true]);
}

#[test]
fn source_without_decodable_frames_shows_code_three() {
    let mut hero_video = Background::new(SourceList::new("silent.mp4", ""), true);
    let decode_failure = DecoderEvent::Error(iced_hero::error::VideoError::new(
        MediaErrorCode::Decode,
        "silent.mp4: no decodable video frames",
    ));
    hero_video.update(background::Message::Playback(PlaybackEvent::from(
        decode_failure,
    )));

    assert!(!hero_video.is_ready());
    assert!(hero_video.frame().is_none());
    let message = hero_video
        .load_state()
        .error()
        .map(|err| err.message())
        .expect("failure is recorded");
    assert_eq!(message, "Video failed to load. Error code: 3");
}
