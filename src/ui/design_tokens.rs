// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the workbench chrome: toolbar, prompts, dialogs and
//! toasts. The image itself is never styled.
//!
//! ```
//! use image_processor::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! assert!(spacing::MD > spacing::XS);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Secondary text on the camera hint and the empty canvas.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

/// Alpha levels for backdrops and hover tints.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

/// Gaps and paddings, on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Width of the error dialog and parameter prompts.
    pub const DIALOG_WIDTH: f32 = 380.0;
    /// Width of a numeric text field inside a prompt.
    pub const NUMBER_INPUT_WIDTH: f32 = 96.0;
}

pub mod typography {
    /// Dialog and prompt titles.
    pub const TITLE_SM: f32 = 18.0;
    /// Toolbar labels, prompt fields, toasts.
    pub const BODY: f32 = 14.0;
    /// Error details and the camera hint.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    /// Flat toolbar buttons.
    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Toasts.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Modal cards, which sit above everything but toasts.
    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_STRONG);
    assert!(typography::CAPTION < typography::BODY && typography::BODY < typography::TITLE_SM);
    // Prompt rows hold a label and a number field side by side.
    assert!(sizing::DIALOG_WIDTH > 2.0 * sizing::NUMBER_INPUT_WIDTH);
};
