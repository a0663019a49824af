// SPDX-License-Identifier: GPL-3.0-only

//! List view of the visible places

use crate::app::state::Message;
use crate::constants::{format_distance, ui};
use crate::fl;
use crate::map_document::{directions_url, tel_url};
use crate::places::Place;
use crate::safety_map::SafetyMapState;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

pub(super) fn place_list(state: &SafetyMapState) -> Element<'_, Message> {
    let spacing = cosmic::theme::spacing();

    let mut list = widget::column().spacing(spacing.space_xs);
    let mut empty = true;
    for place in state.visible_places() {
        empty = false;
        list = list.push(place_card(state, place));
    }

    if empty {
        return widget::container(widget::text(fl!("no-places")))
            .center_x(Length::Fill)
            .padding(spacing.space_l)
            .into();
    }

    widget::scrollable(list).height(Length::Fill).into()
}

fn place_card<'a>(state: &SafetyMapState, place: &'a Place) -> Element<'a, Message> {
    let spacing = cosmic::theme::spacing();

    let distance = fl!(
        "distance-away",
        distance = format_distance(state.display_distance_km(place))
    );

    let details = widget::column()
        .push(
            widget::text(place.name.as_str())
                .size(ui::TITLE_TEXT_SIZE)
                .font(cosmic::font::bold()),
        )
        .push(widget::text(place.address.as_str()).size(ui::DETAIL_TEXT_SIZE))
        .push(
            widget::text(distance)
                .size(ui::DETAIL_TEXT_SIZE)
                .class(cosmic::theme::Text::Accent),
        )
        .spacing(2)
        .width(Length::Fill);

    let mut actions = widget::row().spacing(spacing.space_xxs);
    if let Some(phone) = &place.phone {
        actions = actions.push(
            widget::button::standard(fl!("call"))
                .leading_icon(widget::icon::from_name("call-start-symbolic"))
                .on_press(Message::LaunchUrl(tel_url(phone))),
        );
    }
    actions = actions.push(
        widget::button::standard(fl!("get-directions"))
            .on_press(Message::LaunchUrl(directions_url(state.center(), place.coordinate()))),
    );

    let card = widget::row()
        .push(
            widget::icon::from_name(place.category.icon_name())
                .size(ui::LIST_ICON_SIZE)
                .icon(),
        )
        .push(details)
        .push(actions)
        .spacing(spacing.space_s)
        .align_y(Alignment::Center);

    widget::container(card)
        .padding(spacing.space_s)
        .width(Length::Fill)
        .class(cosmic::theme::Container::Card)
        .into()
}
