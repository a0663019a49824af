// SPDX-License-Identifier: GPL-3.0-only

//! Map view summary
//!
//! The map itself renders in the browser. This panel describes what the
//! page will show and offers to open it.

use crate::app::state::Message;
use crate::constants::{format_distance, map, ui};
use crate::fl;
use crate::safety_map::SafetyMapState;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

pub(super) fn map_panel(state: &SafetyMapState) -> Element<'_, Message> {
    let spacing = cosmic::theme::spacing();
    let center = state.center();

    let mut markers = widget::column().spacing(spacing.space_xxs);
    for place in state.visible_places() {
        markers = markers.push(
            widget::row()
                .push(
                    widget::icon::from_name(place.category.icon_name())
                        .size(ui::FILTER_ICON_SIZE)
                        .icon(),
                )
                .push(widget::text(place.name.as_str()).size(ui::DETAIL_TEXT_SIZE))
                .push(widget::horizontal_space().width(Length::Fill))
                .push(
                    widget::text(format_distance(state.display_distance_km(place)))
                        .size(ui::DETAIL_TEXT_SIZE),
                )
                .spacing(spacing.space_xxs)
                .align_y(Alignment::Center),
        );
    }

    let summary = widget::column()
        .push(
            widget::row()
                .push(
                    widget::icon::from_name("mark-location-symbolic")
                        .size(ui::LIST_ICON_SIZE)
                        .icon(),
                )
                .push(
                    widget::text(fl!("map-center", center = center.to_string()))
                        .size(ui::TITLE_TEXT_SIZE)
                        .font(cosmic::font::bold()),
                )
                .spacing(spacing.space_xs)
                .align_y(Alignment::Center),
        )
        .push(
            widget::text(fl!(
                "map-radius",
                radius = state.radius().display_name()
            ))
            .size(ui::DETAIL_TEXT_SIZE),
        )
        .push(
            widget::text(fl!("places-shown", count = state.visible_count()))
                .size(ui::DETAIL_TEXT_SIZE),
        )
        .push(widget::vertical_space().height(spacing.space_xs))
        .push(markers)
        .push(widget::vertical_space().height(spacing.space_s))
        .push(
            widget::row()
                .push(widget::button::suggested(fl!("open-map")).on_press(Message::OpenMap))
                .push(widget::horizontal_space().width(Length::Fill))
                .push(
                    widget::text(map::TILE_ATTRIBUTION)
                        .size(11)
                        .class(cosmic::theme::Text::Accent),
                )
                .align_y(Alignment::Center),
        )
        .spacing(spacing.space_xxs);

    widget::container(summary)
        .padding(spacing.space_s)
        .width(Length::Fill)
        .class(cosmic::theme::Container::Card)
        .into()
}
