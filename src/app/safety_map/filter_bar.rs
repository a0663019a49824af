// SPDX-License-Identifier: GPL-3.0-only

//! Category filter chips

use crate::app::state::Message;
use crate::constants::ui;
use crate::selection::{FilterTag, Selection};
use cosmic::Element;
use cosmic::iced::Alignment;
use cosmic::widget;

/// One chip per filter tag; active chips use the suggested style
pub(super) fn filter_bar(selection: &Selection) -> Element<'static, Message> {
    let spacing = cosmic::theme::spacing();

    FilterTag::ALL
        .iter()
        .fold(widget::row().spacing(spacing.space_xxs), |row, tag| {
            let content = widget::row()
                .push(
                    widget::icon::from_name(tag.icon_name())
                        .size(ui::FILTER_ICON_SIZE)
                        .icon(),
                )
                .push(widget::text(tag.display_name()))
                .spacing(4)
                .align_y(Alignment::Center);

            let class = if selection.is_active(*tag) {
                cosmic::theme::Button::Suggested
            } else {
                cosmic::theme::Button::Standard
            };

            row.push(
                widget::button::custom(content)
                    .on_press(Message::ToggleCategory(*tag))
                    .class(class),
            )
        })
        .into()
}
