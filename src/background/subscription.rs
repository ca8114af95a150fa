// SPDX-License-Identifier: MPL-2.0
//! Iced subscription bridging the background decoder to the UI loop.

use super::decoder::{BackgroundDecoder, CommandSender, DecoderEvent};
use super::source::SourceList;
use crate::error::VideoError;
use iced::futures::SinkExt;
use iced::stream;
use iced::widget::image;

/// Identity of one playback session.
///
/// The subscription keeps running as long as the session is unchanged;
/// a different session tears the decoder down and starts a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoSession {
    pub sources: SourceList,
    pub autoplay: bool,
}

/// Messages emitted by the playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackEvent {
    /// The decoder is running; commands go through this sender.
    Started(CommandSender),

    /// A source delivered its first decoded frame.
    Loaded {
        source: String,
        width: u32,
        height: u32,
    },

    /// A new frame is ready for display.
    Frame(image::Handle),

    /// Loading or decoding failed.
    Failed(VideoError),
}

impl From<DecoderEvent> for PlaybackEvent {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::Loaded {
                source,
                width,
                height,
            } => PlaybackEvent::Loaded {
                source,
                width,
                height,
            },
            DecoderEvent::FrameReady(frame) => PlaybackEvent::Frame(image::Handle::from_rgba(
                frame.width,
                frame.height,
                frame.rgba_data,
            )),
            DecoderEvent::Error(err) => PlaybackEvent::Failed(err),
        }
    }
}

/// Creates the background video subscription for `session`.
///
/// Dropping the subscription drops the decoder handle, which stops the
/// decoder thread.
pub fn video_playback(session: VideoSession) -> iced::Subscription<PlaybackEvent> {
    iced::Subscription::run_with_id(
        session.clone(),
        stream::channel(4, move |mut output| async move {
            let mut decoder = BackgroundDecoder::new(session.sources, session.autoplay);
            let _ = output
                .send(PlaybackEvent::Started(decoder.command_sender()))
                .await;

            while let Some(event) = decoder.recv_event().await {
                if output.send(PlaybackEvent::from(event)).await.is_err() {
                    break;
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::decoder::DecodedFrame;
    use crate::error::MediaErrorCode;

    #[test]
    fn decoder_errors_become_failures() {
        let err = VideoError::new(MediaErrorCode::Network, "connection reset");
        match PlaybackEvent::from(DecoderEvent::Error(err.clone())) {
            PlaybackEvent::Failed(received) => assert_eq!(received, err),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn decoder_load_becomes_loaded() {
        let event = PlaybackEvent::from(DecoderEvent::Loaded {
            source: "hero.mp4".to_string(),
            width: 1920,
            height: 1080,
        });
        assert!(matches!(
            event,
            PlaybackEvent::Loaded { width: 1920, height: 1080, .. }
        ));
    }

    #[test]
    fn frames_become_image_handles() {
        let event = PlaybackEvent::from(DecoderEvent::FrameReady(DecodedFrame {
            rgba_data: vec![255; 2 * 2 * 4],
            width: 2,
            height: 2,
        }));
        assert!(matches!(event, PlaybackEvent::Frame(_)));
    }

    #[test]
    fn sessions_differ_by_sources_and_autoplay() {
        let base = VideoSession {
            sources: SourceList::new("a.mp4", ""),
            autoplay: true,
        };
        let other_source = VideoSession {
            sources: SourceList::new("b.mp4", ""),
            ..base.clone()
        };
        let paused = VideoSession {
            autoplay: false,
            ..base.clone()
        };
        assert_ne!(base, other_source);
        assert_ne!(base, paused);
    }
}
