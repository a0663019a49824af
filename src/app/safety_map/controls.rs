// SPDX-License-Identifier: GPL-3.0-only

//! Radius picker, map/list switch and the open-map button

use crate::app::state::Message;
use crate::constants::SearchRadius;
use crate::fl;
use crate::safety_map::ViewMode;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

pub(super) fn controls<'a>(
    radius_options: &'a [String],
    radius: SearchRadius,
    view_mode: ViewMode,
) -> Element<'a, Message> {
    let spacing = cosmic::theme::spacing();

    let radius_dropdown = widget::dropdown(radius_options, Some(radius.index()), Message::SelectRadius);

    let mode_switch = ViewMode::ALL
        .iter()
        .fold(widget::row().spacing(spacing.space_xxxs), |row, mode| {
            let button = widget::button::icon(widget::icon::from_name(mode.icon_name()))
                .on_press(Message::SetViewMode(*mode))
                .class(if *mode == view_mode {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Icon
                });
            row.push(button)
        });

    widget::row()
        .push(widget::text(fl!("radius-label")))
        .push(radius_dropdown)
        .push(widget::horizontal_space().width(Length::Fill))
        .push(mode_switch)
        .push(widget::horizontal_space().width(spacing.space_s))
        .push(widget::button::standard(fl!("open-map")).on_press(Message::OpenMap))
        .spacing(spacing.space_xs)
        .align_y(Alignment::Center)
        .into()
}
