// SPDX-License-Identifier: MPL-2.0
//! Fixed content shown by the hero: headlines, news, navigation and social
//! links.
//!
//! Everything here is static configuration. Rotators receive the headline
//! and news lists; the navigation bar and social row render their lists
//! as-is.

use crate::error::Result;
use crate::rotator::{ContentItem, ContentList, RichText, Segment};

/// Destination opened when an item is activated.
///
/// Holds either an absolute URL, a site-relative path (`/about/`) or the
/// `#` placeholder, exactly as authored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link(String);

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.0
    }

    /// Resolves the link against `base_url`.
    ///
    /// Absolute `http(s)` URLs are returned unchanged, site-relative paths
    /// are joined to the base, and empty or `#` placeholders resolve to
    /// nothing.
    #[must_use]
    pub fn resolve(&self, base_url: &str) -> Option<String> {
        let href = self.0.trim();
        if href.is_empty() || href.starts_with('#') {
            return None;
        }
        if href.starts_with("http://") || href.starts_with("https://") {
            return Some(href.to_string());
        }
        let base = base_url.trim_end_matches('/');
        if href.starts_with('/') {
            Some(format!("{base}{href}"))
        } else {
            Some(format!("{base}/{href}"))
        }
    }
}

/// Icons available to the navigation bar and social row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Search,
    Fingerprint,
    DnaHelix,
    Dice,
    GivingBack,
    ThoughtLeadership,
    Careers,
    Contact,
    LinkedIn,
    XTwitter,
    Facebook,
}

/// One entry of the vertical navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub link: Link,
    pub icon: Icon,
}

/// One social profile link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub link: Link,
    pub icon: Icon,
}

/// Local background video, relative to the data directory.
pub const BACKGROUND_VIDEO_FILE: &str = "background-video.mp4";

/// Remote video tried when the local file cannot be opened.
pub const FALLBACK_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Base URL that site-relative links resolve against.
pub const SITE_BASE_URL: &str = "https://www.prometrika.com";

/// Link behind the logo.
pub const HOME_LINK: &str = "/";

/// Every list the hero renders, built once at startup.
#[derive(Debug, Clone)]
pub struct HeroContent {
    pub headlines: ContentList<RichText>,
    pub news: ContentList<String>,
    pub navigation: Vec<NavEntry>,
    pub social: Vec<SocialLink>,
}

impl HeroContent {
    /// The built-in site content.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            headlines: headlines()?,
            news: news()?,
            navigation: navigation(),
            social: social_links(),
        })
    }
}

/// Headline slides cycled by the hero.
pub fn headlines() -> Result<ContentList<RichText>> {
    ContentList::new(vec![
        ContentItem::new(
            1,
            vec![
                Segment::accent("INNOVATIVE"),
                Segment::plain("CLINICAL DEVELOPMENT"),
                Segment::accent("SOLUTIONS"),
            ],
        ),
        ContentItem::new(
            2,
            vec![
                Segment::accent("DRIVEN BY"),
                Segment::plain("OUR"),
                Segment::accent("PASSION"),
                Segment::plain("FOR THE HUMAN ASPECT OF OUR WORK"),
            ],
        ),
        ContentItem::new(
            3,
            vec![
                Segment::accent("COMPASSION"),
                Segment::plain("FOR THE PEOPLE WHOSE"),
                Segment::accent("LIVES"),
                Segment::plain("HAVE BEEN"),
                Segment::accent("IMPROVED."),
            ],
        ),
    ])
}

/// News items cycled by the ticker.
pub fn news() -> Result<ContentList<String>> {
    const ITEMS: [(u32, &str, &str); 5] = [
        (
            1,
            "July 2025 Newsletter [Volume 15]",
            "https://www.prometrika.com/about/news-highlights/july-2025-newsletter-volume-15/",
        ),
        (
            2,
            "White Paper: A Small CRO's Approach to Global Clinical Trial Execution",
            "https://www.prometrika.com/about/news-highlights/white-paper-a-small-cros-approach-to-global-clinical-trial-execution/",
        ),
        (
            3,
            "Prometrika Proudly Sponsors MassBio's 2025 Rare Disease Day Forum",
            "https://www.prometrika.com/about/news-highlights/prometrika-proudly-sponsors-massbios-2025-rare-disease-day-forum/",
        ),
        (
            4,
            "December 2024 Newsletter [Volume 14]",
            "https://www.prometrika.com/about/news-highlights/december-2024-newsletter-volume-14/",
        ),
        (
            5,
            "PROMETRIKA Partners With Medidata on Use of RTSM in Complex Trials",
            "https://www.prometrika.com/about/news-highlights/prometrika-partners-with-medidata-on-use-of-rtsm-in-complex-trials/",
        ),
    ];

    ContentList::new(
        ITEMS
            .iter()
            .map(|(id, title, url)| {
                ContentItem::new(*id, (*title).to_string()).with_target(Link::new(*url))
            })
            .collect(),
    )
}

/// Entries of the vertical navigation bar, top to bottom.
#[must_use]
pub fn navigation() -> Vec<NavEntry> {
    fn entry(id: &'static str, title: &'static str, href: &str, icon: Icon) -> NavEntry {
        NavEntry {
            id,
            title,
            link: Link::new(href),
            icon,
        }
    }

    vec![
        entry("1000", "Search", "#", Icon::Search),
        entry("1395", "About", "/about/", Icon::Fingerprint),
        entry("8862", "Services", "/services/", Icon::DnaHelix),
        entry("8874", "Experience", "/experience/", Icon::Dice),
        entry("9706", "Giving Back", "/giving-back/", Icon::GivingBack),
        entry(
            "11053",
            "Thought Leadership",
            "/thought-leadership/",
            Icon::ThoughtLeadership,
        ),
        entry("8887", "Careers", "/careers/", Icon::Careers),
        entry("1404", "Contact", "/contact/", Icon::Contact),
    ]
}

/// Social profiles shown in the top bar.
#[must_use]
pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "LinkedIn",
            link: Link::new("http://www.linkedin.com/company/prometrika-llc"),
            icon: Icon::LinkedIn,
        },
        SocialLink {
            label: "X (Twitter)",
            link: Link::new("https://twitter.com/PrometrikaCRO"),
            icon: Icon::XTwitter,
        },
        SocialLink {
            label: "Facebook",
            link: Link::new("https://www.facebook.com/prometrikallc"),
            icon: Icon::Facebook,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_links_resolve_unchanged() {
        let link = Link::new("https://twitter.com/PrometrikaCRO");
        assert_eq!(
            link.resolve(SITE_BASE_URL).as_deref(),
            Some("https://twitter.com/PrometrikaCRO")
        );
    }

    #[test]
    fn relative_links_join_the_base() {
        assert_eq!(
            Link::new("/about/").resolve("https://example.com/").as_deref(),
            Some("https://example.com/about/")
        );
        assert_eq!(
            Link::new("careers/").resolve("https://example.com").as_deref(),
            Some("https://example.com/careers/")
        );
    }

    #[test]
    fn placeholder_links_resolve_to_nothing() {
        assert_eq!(Link::new("#").resolve(SITE_BASE_URL), None);
        assert_eq!(Link::new("").resolve(SITE_BASE_URL), None);
    }

    #[test]
    fn hero_content_lists_are_populated() {
        assert_eq!(headlines().expect("headlines").len(), 3);
        let news = news().expect("news");
        assert_eq!(news.len(), 5);
        assert!(news.iter().all(|item| item.target.is_some()));
        assert_eq!(navigation().len(), 8);
        assert_eq!(social_links().len(), 3);
    }

    #[test]
    fn builtin_bundle_matches_the_lists() {
        let content = HeroContent::builtin().expect("builtin content");
        assert_eq!(content.headlines, headlines().expect("headlines"));
        assert_eq!(content.navigation, navigation());
    }

    #[test]
    fn every_headline_has_an_accent() {
        let headlines = headlines().expect("headlines");
        for item in headlines.iter() {
            assert!(item.display.iter().any(|segment| segment.emphasized));
        }
    }

    #[test]
    fn navigation_ids_are_unique() {
        let entries = navigation();
        let mut ids: Vec<&str> = entries.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }
}
