// SPDX-License-Identifier: MPL-2.0
//! Modal overlay.

use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, Stack};
use iced::Element;

/// Draws `dialog` centered above `base`.
///
/// The backdrop swallows every pointer event, so `base` cannot be
/// interacted with until the dialog is gone. `on_backdrop` is emitted when
/// the dimmed area is clicked, if given.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_backdrop: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let backdrop = mouse_area(center(opaque(dialog)).style(styles::overlay::backdrop));
    let backdrop = match on_backdrop {
        Some(message) => backdrop.on_press(message),
        None => backdrop,
    };

    Stack::new().push(base).push(opaque(backdrop)).into()
}
