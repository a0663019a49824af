// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Picks the screen to show:
//! - Home menu (home module)
//! - Safety map (safety_map module)

use crate::app::state::{AppModel, Message, Page};
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    pub fn view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let content = match (self.page, self.session.state()) {
            (Page::SafetyMap, Some(state)) => self.build_safety_map(state),
            _ => self.build_home(),
        };

        widget::container(content)
            .padding([spacing.space_s, spacing.space_m])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
