// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::background;
use crate::content::Link;
use crate::rotator;
use crate::ui::menu;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Headline(rotator::Message),
    Ticker(rotator::Message),
    Background(background::Message),
    Menu(menu::Message),
    /// A navigation entry, social icon or the logo was pressed.
    OpenLink(Link),
    /// The window was resized to this width.
    Resized(f32),
    /// Redraw tick while a fade is animating.
    Frame(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_HERO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional local video file replacing the configured one.
    pub video: Option<PathBuf>,
}
