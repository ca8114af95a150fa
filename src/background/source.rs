// SPDX-License-Identifier: MPL-2.0
//! Candidate sources for the background video.

use std::fmt;
use std::path::{Path, PathBuf};

/// One place the background video can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VideoSource {
    File(PathBuf),
    Url(String),
}

impl VideoSource {
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, VideoSource::Url(_))
    }

    /// Input string handed to the demuxer.
    #[must_use]
    pub fn input(&self) -> &Path {
        match self {
            VideoSource::File(path) => path,
            VideoSource::Url(url) => Path::new(url.as_str()),
        }
    }
}

impl fmt::Display for VideoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoSource::File(path) => write!(f, "{}", path.display()),
            VideoSource::Url(url) => f.write_str(url),
        }
    }
}

/// Ordered candidates, tried first to last until one opens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceList(Vec<VideoSource>);

impl SourceList {
    /// Local file first, then the remote fallback.
    ///
    /// Blank entries are skipped, so the list may end up empty; opening an
    /// empty list fails like a list where no candidate opens.
    #[must_use]
    pub fn new(local: impl Into<PathBuf>, fallback_url: &str) -> Self {
        let local = local.into();
        let mut sources = Vec::with_capacity(2);
        if !local.as_os_str().is_empty() {
            sources.push(VideoSource::File(local));
        }
        let fallback_url = fallback_url.trim();
        if !fallback_url.is_empty() {
            sources.push(VideoSource::Url(fallback_url.to_string()));
        }
        Self(sources)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VideoSource> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_file_is_tried_before_fallback() {
        let sources = SourceList::new("hero.mp4", "https://example.com/hero.mp4");
        let ordered: Vec<&VideoSource> = sources.iter().collect();
        assert_eq!(
            ordered,
            vec![
                &VideoSource::File(PathBuf::from("hero.mp4")),
                &VideoSource::Url("https://example.com/hero.mp4".to_string()),
            ]
        );
        assert!(!ordered[0].is_remote());
        assert!(ordered[1].is_remote());
    }

    #[test]
    fn blank_candidates_are_skipped() {
        let sources = SourceList::new("", "  ");
        assert!(sources.is_empty());
    }

    #[test]
    fn display_shows_location() {
        let source = VideoSource::Url("https://example.com/v.mp4".to_string());
        assert_eq!(source.to_string(), "https://example.com/v.mp4");
        assert_eq!(source.input(), Path::new("https://example.com/v.mp4"));
    }
}
