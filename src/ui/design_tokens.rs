// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by every hero component.

## Organization

- **Palette**: Brand and base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_hero::ui::design_tokens::{opacity, palette};
use iced::Color;

let overlay = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
assert!(overlay.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Brand yellow: headline accents, ticker pill, loading spinner.
    pub const ACCENT: Color = Color::from_rgb(
        0xF4 as f32 / 255.0,
        0xB8 as f32 / 255.0,
        0x27 as f32 / 255.0,
    );

    /// Dark ink used on the accent surface.
    pub const INK: Color = Color::from_rgb(
        0x31 as f32 / 255.0,
        0x2F as f32 / 255.0,
        0x48 as f32 / 255.0,
    );

    /// Navigation bar background.
    pub const NAV: Color = Color::from_rgb(
        0x74 as f32 / 255.0,
        0x6D as f32 / 255.0,
        0xA5 as f32 / 255.0,
    );

    /// Navigation entry under the pointer.
    pub const NAV_HOVER: Color = Color::from_rgb(
        0x2F as f32 / 255.0,
        0x2D as f32 / 255.0,
        0x41 as f32 / 255.0,
    );

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.4;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const HOVER_DIM: f32 = 0.65;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 14.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 40.0;
    pub const SPINNER: f32 = 48.0;

    /// Width of the vertical navigation bar.
    pub const NAV_WIDTH: f32 = 140.0;

    /// Height of the top bar holding the logo and social row.
    pub const TOP_BAR_HEIGHT: f32 = 88.0;

    pub const LOGO_MARK: f32 = 44.0;

    /// Ticker pill dimensions.
    pub const TICKER_HEIGHT: f32 = 44.0;
    pub const TICKER_MAX_WIDTH: f32 = 925.0;
    pub const TICKER_ARROW: f32 = 30.0;

    pub const VIDEO_TOGGLE: f32 = 44.0;
    pub const MENU_BUTTON: f32 = 44.0;

    /// Maximum width of the headline block.
    pub const HEADLINE_MAX_WIDTH: f32 = 820.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Headline on wide windows.
    pub const HEADLINE: f32 = 56.0;

    /// Headline below the compact breakpoint.
    pub const HEADLINE_COMPACT: f32 = 34.0;

    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 11.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Upward offset of the headline at the start of a fade-in.
    pub const HEADLINE_RISE: f32 = 16.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    assert!(typography::HEADLINE > typography::HEADLINE_COMPACT);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
