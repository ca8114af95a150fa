// SPDX-License-Identifier: MPL-2.0
//! Full-window background video.
//!
//! The video loops muted behind the hero. Users can only toggle between
//! playing and paused. Loading is classified exactly once: the first
//! success (a decoded frame) or failure reported by the decoder moves
//! [`LoadState`] out of `Loading`, and later reports do not change it.

pub mod decoder;
pub mod source;
pub mod subscription;

pub use decoder::{CommandSender, DecoderCommand};
pub use source::{SourceList, VideoSource};
pub use subscription::{video_playback, PlaybackEvent, VideoSession};

use crate::error::VideoError;
use iced::widget::image;
use iced::Subscription;
use std::time::Duration;

/// Spinner redraw period while loading.
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Spinner rotation per tick, in radians.
const SPINNER_STEP: f32 = 0.1;

/// Outcome of loading the video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(VideoError),
}

impl LoadState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    #[must_use]
    pub fn error(&self) -> Option<&VideoError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Whether the video is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

impl PlaybackState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        }
    }

    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    fn command(self) -> DecoderCommand {
        match self {
            PlaybackState::Playing => DecoderCommand::Play,
            PlaybackState::Paused => DecoderCommand::Pause,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Playback(PlaybackEvent),
    TogglePlayback,
    SpinnerTick,
}

/// Background video state.
#[derive(Debug)]
pub struct Background {
    session: VideoSession,
    load: LoadState,
    playback: PlaybackState,
    frame: Option<image::Handle>,
    commands: Option<CommandSender>,
    spinner_rotation: f32,
}

impl Background {
    #[must_use]
    pub fn new(sources: SourceList, autoplay: bool) -> Self {
        let playback = if autoplay {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        };
        Self {
            session: VideoSession { sources, autoplay },
            load: LoadState::Loading,
            playback,
            frame: None,
            commands: None,
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.load.is_ready()
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Playback(event) => self.handle_playback(event),
            Message::TogglePlayback => {
                self.playback = self.playback.toggled();
                tracing::debug!(playing = self.playback.is_playing(), "video toggled");
                self.send_playback_command();
            }
            Message::SpinnerTick => {
                self.spinner_rotation =
                    (self.spinner_rotation + SPINNER_STEP) % std::f32::consts::TAU;
            }
        }
    }

    fn handle_playback(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::Started(commands) => {
                self.commands = Some(commands);
                // The toggle may have flipped before the decoder came up.
                if self.playback.is_playing() != self.session.autoplay {
                    self.send_playback_command();
                }
            }
            PlaybackEvent::Loaded {
                source,
                width,
                height,
            } => {
                if self.load == LoadState::Loading {
                    tracing::info!(%source, width, height, "background video ready");
                    self.load = LoadState::Ready;
                }
            }
            PlaybackEvent::Frame(handle) => {
                self.frame = Some(handle);
            }
            PlaybackEvent::Failed(err) => {
                if self.load == LoadState::Loading {
                    tracing::warn!(message = %err.message(), detail = %err.detail, "background video unavailable");
                    self.load = LoadState::Failed(err);
                } else {
                    tracing::debug!(detail = %err.detail, "background video error after load");
                }
            }
        }
    }

    fn send_playback_command(&self) {
        if let Some(commands) = &self.commands {
            if let Err(err) = commands.send(self.playback.command()) {
                tracing::debug!(detail = %err.detail, "video command dropped");
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let playback = video_playback(self.session.clone()).map(Message::Playback);
        if self.load == LoadState::Loading {
            Subscription::batch([
                playback,
                iced::time::every(SPINNER_TICK).map(|_| Message::SpinnerTick),
            ])
        } else {
            playback
        }
    }
}
