// SPDX-License-Identifier: GPL-3.0-only

//! Safety map screen
//!
//! Layout, top to bottom:
//! - Title with the location status
//! - Category filter bar (filter_bar module)
//! - Radius picker and map/list switch (controls module)
//! - Map panel or place list, depending on the view mode

mod controls;
mod filter_bar;
mod map_panel;
mod place_list;

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::fl;
use crate::safety_map::{SafetyMapState, ViewMode};
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    pub(crate) fn build_safety_map<'a>(&'a self, state: &'a SafetyMapState) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();

        let status = if self.session.is_locating() {
            fl!("location-searching")
        } else if state.location().is_some() {
            fl!("location-found")
        } else {
            fl!("location-default-area")
        };

        let title_row = widget::row()
            .push(
                widget::text(fl!("menu-safety-map"))
                    .size(20)
                    .font(cosmic::font::bold()),
            )
            .push(widget::horizontal_space().width(Length::Fill))
            .push(
                widget::text(status)
                    .size(ui::DETAIL_TEXT_SIZE)
                    .class(cosmic::theme::Text::Accent),
            )
            .align_y(Alignment::Center);

        let content = match state.view_mode() {
            ViewMode::Map => map_panel::map_panel(state),
            ViewMode::List => place_list::place_list(state),
        };

        widget::column()
            .push(title_row)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(filter_bar::filter_bar(state.selection()))
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(controls::controls(
                &self.radius_dropdown_options,
                state.radius(),
                state.view_mode(),
            ))
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
