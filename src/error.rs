// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Content Error: {0}")]
    Content(String),
    #[error("Video Error: {0}")]
    Video(#[from] VideoError),
    #[error("Window Error: {0}")]
    Window(String),
}

/// Media error codes reported by the background video pipeline.
///
/// The numbering follows the HTML media element's `MediaError.code` so the
/// messages users see stay stable and comparable across hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorCode {
    /// Fetching the media was aborted.
    Aborted = 1,
    /// A network error interrupted the download.
    Network = 2,
    /// The media was fetched but could not be decoded.
    Decode = 3,
    /// None of the candidate sources could be opened.
    SourceNotSupported = 4,
}

impl MediaErrorCode {
    /// Numeric code as shown to users.
    #[must_use]
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for MediaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failure to load or play the background video.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{}", self.message())]
pub struct VideoError {
    /// Classified error code, when the failure could be classified.
    pub code: Option<MediaErrorCode>,
    /// Technical detail from the decoder, kept for logs.
    pub detail: String,
}

impl VideoError {
    #[must_use]
    pub fn new(code: MediaErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            detail: detail.into(),
        }
    }

    /// A failure with no error code attached.
    #[must_use]
    pub fn unclassified(detail: impl Into<String>) -> Self {
        Self {
            code: None,
            detail: detail.into(),
        }
    }

    /// Human-readable message shown in the error overlay.
    #[must_use]
    pub fn message(&self) -> String {
        match self.code {
            Some(code) => format!("Video failed to load. Error code: {code}"),
            None => "Video file not found or cannot be loaded".to_string(),
        }
    }

    /// Classifies a raw decoder message into a media error code.
    ///
    /// Interrupted reads map to `Aborted`, network-ish failures on remote
    /// sources map to `Network`, stream and codec problems map to `Decode`,
    /// and anything else maps to `SourceNotSupported`.
    #[must_use]
    pub fn classify(detail: &str, remote: bool) -> MediaErrorCode {
        let lower = detail.to_lowercase();
        if lower.contains("exit requested") || lower.contains("interrupted") {
            return MediaErrorCode::Aborted;
        }
        if remote
            && (lower.contains("connection")
                || lower.contains("timed out")
                || lower.contains("network")
                || lower.contains("resolve"))
        {
            return MediaErrorCode::Network;
        }
        if lower.contains("decode")
            || lower.contains("codec")
            || lower.contains("packet")
            || lower.contains("scaling")
        {
            return MediaErrorCode::Decode;
        }
        MediaErrorCode::SourceNotSupported
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Window(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
