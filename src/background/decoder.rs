// SPDX-License-Identifier: MPL-2.0
//! Looping, muted background video decoder using FFmpeg.
//!
//! Decoding runs on a blocking thread and delivers RGBA frames through a
//! bounded channel. Only the video stream is read; audio is never decoded.
//! At end of stream the input is rewound and playback continues.

use super::source::{SourceList, VideoSource};
use crate::error::{MediaErrorCode, VideoError};
use std::sync::Once;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

static FFMPEG_INIT: Once = Once::new();

/// Poll interval of the decoder thread while paused.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Initializes FFmpeg once per process.
pub fn init_ffmpeg() -> Result<(), VideoError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(VideoError::unclassified(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }
        ffmpeg_next::format::network::init();

        // SAFETY: av_log_set_level only updates a global log threshold.
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// A decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Commands sent to the decoder thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCommand {
    Play,
    Pause,
}

/// Events sent from the decoder thread.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// The first frame of `source` has been delivered.
    Loaded {
        source: String,
        width: u32,
        height: u32,
    },

    /// Loading or decoding failed; no further events follow.
    Error(VideoError),
}

/// Cloneable handle for sending commands to a running decoder.
#[derive(Clone)]
pub struct CommandSender(mpsc::UnboundedSender<DecoderCommand>);

impl CommandSender {
    pub fn send(&self, command: DecoderCommand) -> Result<(), VideoError> {
        self.0
            .send(command)
            .map_err(|_| VideoError::unclassified("decoder task is not running"))
    }
}

impl std::fmt::Debug for CommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CommandSender")
            .field(&!self.0.is_closed())
            .finish()
    }
}

/// Background decoder running on a blocking thread.
pub struct BackgroundDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl BackgroundDecoder {
    /// Spawns the decoder thread for `sources`.
    ///
    /// When `autoplay` is false only the first frame is decoded until a
    /// [`DecoderCommand::Play`] arrives.
    pub fn new(sources: SourceList, autoplay: bool) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        // Two frames of buffering keep memory bounded when the UI lags.
        let (event_tx, event_rx) = mpsc::channel(2);

        tokio::task::spawn_blocking(move || {
            if let Err(err) = Self::decoder_loop_blocking(&sources, autoplay, command_rx, &event_tx)
            {
                tracing::warn!(code = ?err.code, detail = %err.detail, "background video failed");
                let _ = event_tx.blocking_send(DecoderEvent::Error(err));
            }
        });

        Self {
            command_tx,
            event_rx,
        }
    }

    /// Handle the UI keeps to drive playback.
    pub fn command_sender(&self) -> CommandSender {
        CommandSender(self.command_tx.clone())
    }

    /// Receives the next event; `None` once the decoder thread has exited.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        sources: &SourceList,
        autoplay: bool,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: &mpsc::Sender<DecoderEvent>,
    ) -> Result<(), VideoError> {
        init_ffmpeg()?;

        let OpenedInput {
            source,
            mut ictx,
            stream_index,
            mut decoder,
            mut scaler,
            time_base_secs,
        } = open_first(sources)?;
        let remote = source.is_remote();
        let width = decoder.width();
        let height = decoder.height();
        let mut frames = FrameSink::new(event_tx, source.to_string());

        let mut is_playing = autoplay;
        let mut playback_start_time = autoplay.then(Instant::now);
        let mut first_pts: Option<f64> = None;
        // While paused, still decode one poster frame.
        let mut decode_single_frame = !autoplay;

        loop {
            if event_tx.is_closed() {
                break;
            }
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    if !is_playing {
                        is_playing = true;
                        playback_start_time = Some(Instant::now());
                        first_pts = None;
                    }
                }
                Ok(DecoderCommand::Pause) => {
                    is_playing = false;
                    playback_start_time = None;
                    first_pts = None;
                }
                Err(mpsc::error::TryRecvError::Disconnected) => break,
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !is_playing && !decode_single_frame {
                std::thread::sleep(IDLE_POLL);
                continue;
            }

            let mut frame_decoded = false;
            for (stream, packet) in ictx.packets() {
                if stream.index() != stream_index {
                    continue;
                }

                if let Err(e) = decoder.send_packet(&packet) {
                    tracing::debug!(error = %e, "packet send failed");
                    continue;
                }

                let mut decoded_frame = ffmpeg_next::frame::Video::empty();
                if decoder.receive_frame(&mut decoded_frame).is_err() {
                    continue;
                }

                let mut rgb_frame = ffmpeg_next::frame::Video::empty();
                if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                    tracing::debug!(error = %e, "scaling failed");
                    continue;
                }

                let pts_secs = decoded_frame
                    .timestamp()
                    .map_or(0.0, |pts| pts as f64 * time_base_secs);

                // Frame pacing: wait until the frame is due.
                if let Some(start_time) = playback_start_time {
                    let first = *first_pts.get_or_insert(pts_secs);
                    let target_time =
                        start_time + Duration::from_secs_f64((pts_secs - first).max(0.0));
                    let now = Instant::now();
                    if target_time > now {
                        std::thread::sleep(target_time - now);
                    }
                }

                let frame = DecodedFrame {
                    rgba_data: extract_rgba_data(&rgb_frame),
                    width,
                    height,
                };
                if !frames.deliver(frame) {
                    return Ok(());
                }

                frame_decoded = true;
                decode_single_frame = false;
                break;
            }

            if frame_decoded {
                continue;
            }

            if !frames.delivered_any() {
                return Err(VideoError::new(
                    MediaErrorCode::Decode,
                    format!("{source}: no decodable video frames"),
                ));
            }

            // End of stream: rewind and keep looping.
            ictx.seek(0, ..0).map_err(|e| {
                let detail = format!("rewind failed: {e}");
                VideoError::new(VideoError::classify(&detail, remote), detail)
            })?;
            decoder.flush();
            if is_playing {
                playback_start_time = Some(Instant::now());
            }
            first_pts = None;
            tracing::trace!("background video looped");
        }

        Ok(())
    }
}

impl std::fmt::Debug for BackgroundDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundDecoder")
            .field("running", &!self.command_tx.is_closed())
            .finish()
    }
}

/// Forwards frames to the UI and reports the load once the first frame
/// has gone out, so a source that opens but never decodes is a failure.
struct FrameSink<'a> {
    event_tx: &'a mpsc::Sender<DecoderEvent>,
    source: String,
    delivered: u64,
}

impl<'a> FrameSink<'a> {
    fn new(event_tx: &'a mpsc::Sender<DecoderEvent>, source: String) -> Self {
        Self {
            event_tx,
            source,
            delivered: 0,
        }
    }

    /// Sends `frame`; `false` once the receiver is gone.
    fn deliver(&mut self, frame: DecodedFrame) -> bool {
        let (width, height) = (frame.width, frame.height);
        if self
            .event_tx
            .blocking_send(DecoderEvent::FrameReady(frame))
            .is_err()
        {
            return false;
        }

        self.delivered += 1;
        if self.delivered == 1 {
            let loaded = DecoderEvent::Loaded {
                source: self.source.clone(),
                width,
                height,
            };
            return self.event_tx.blocking_send(loaded).is_ok();
        }
        true
    }

    fn delivered_any(&self) -> bool {
        self.delivered > 0
    }
}

struct OpenedInput {
    source: VideoSource,
    ictx: ffmpeg_next::format::context::Input,
    stream_index: usize,
    decoder: ffmpeg_next::codec::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    time_base_secs: f64,
}

/// Opens the first candidate that yields a decodable video stream.
fn open_first(sources: &SourceList) -> Result<OpenedInput, VideoError> {
    let mut failures = Vec::new();
    for source in sources.iter() {
        match open_source(source) {
            Ok(opened) => {
                tracing::info!(source = %source, "background video opened");
                return Ok(opened);
            }
            Err(detail) => {
                tracing::warn!(source = %source, error = %detail, "video source unavailable");
                failures.push(format!("{source}: {detail}"));
            }
        }
    }

    let detail = if failures.is_empty() {
        "no video source configured".to_string()
    } else {
        failures.join("; ")
    };
    Err(VideoError::new(MediaErrorCode::SourceNotSupported, detail))
}

fn open_source(source: &VideoSource) -> Result<OpenedInput, String> {
    if let VideoSource::File(path) = source {
        if !path.exists() {
            return Err("file not found".to_string());
        }
    }

    let ictx = ffmpeg_next::format::input(source.input())
        .map_err(|e| format!("failed to open video: {e}"))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| "no video stream found".to_string())?;
    let stream_index = input.index();
    let time_base = input.time_base();
    let time_base_secs = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

    let decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| format!("failed to create codec context: {e}"))?
        .decoder()
        .video()
        .map_err(|e| format!("failed to create video decoder: {e}"))?;

    let scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        decoder.width(),
        decoder.height(),
        ffmpeg_next::format::Pixel::RGBA,
        decoder.width(),
        decoder.height(),
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| format!("failed to create scaler: {e}"))?;

    Ok(OpenedInput {
        source: source.clone(),
        ictx,
        stream_index,
        decoder,
        scaler,
        time_base_secs,
    })
}

/// Copies RGBA rows out of a frame, dropping the stride padding.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row_start = y * stride;
        let row_end = row_start + width * 4;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }

    rgba_bytes
}
