// SPDX-License-Identifier: GPL-3.0-only

//! Travel safety menu shown on the home page

use crate::app::state::{AppModel, MenuEntry, Message};
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

/// Tiles per menu row
const MENU_COLUMNS: usize = 2;

impl MenuEntry {
    pub fn label(&self) -> String {
        match self {
            MenuEntry::LocalEmergencies => fl!("menu-local-emergencies"),
            MenuEntry::SafetyMap => fl!("menu-safety-map"),
            MenuEntry::EmergencyCard => fl!("menu-emergency-card"),
            MenuEntry::CrisisWatch => fl!("menu-crisis-watch"),
            MenuEntry::LiveLink => fl!("menu-live-link"),
            MenuEntry::QuickNotes => fl!("menu-quick-notes"),
            MenuEntry::GuardianAi => fl!("menu-guardian-ai"),
        }
    }
}

impl AppModel {
    pub(crate) fn build_home(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let mut grid = widget::column().spacing(ui::MENU_SPACING);
        for entries in MenuEntry::ALL.chunks(MENU_COLUMNS) {
            let row = entries
                .iter()
                .fold(widget::row().spacing(ui::MENU_SPACING), |row, entry| {
                    row.push(menu_tile(*entry))
                });
            grid = grid.push(row);
        }

        widget::column()
            .push(
                widget::text(fl!("app-title"))
                    .size(24)
                    .font(cosmic::font::bold()),
            )
            .push(widget::text(fl!("home-subtitle")).size(ui::DETAIL_TEXT_SIZE))
            .push(widget::vertical_space().height(spacing.space_m))
            .push(grid)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
    }
}

fn menu_tile(entry: MenuEntry) -> Element<'static, Message> {
    let content = widget::column()
        .push(
            widget::icon::from_name(entry.icon_name())
                .size(ui::MENU_ICON_SIZE)
                .icon(),
        )
        .push(widget::text(entry.label()).size(ui::TITLE_TEXT_SIZE))
        .spacing(6)
        .align_x(Alignment::Center);

    let tile = widget::button::custom(
        widget::container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(ui::MENU_TILE_WIDTH))
    .height(Length::Fixed(ui::MENU_TILE_HEIGHT))
    .class(if entry == MenuEntry::LocalEmergencies {
        cosmic::theme::Button::Destructive
    } else {
        cosmic::theme::Button::Standard
    });

    // Inert entries stay visible but unclickable
    if entry.is_inert() {
        tile.into()
    } else {
        tile.on_press(Message::MenuSelected(entry)).into()
    }
}
