// SPDX-License-Identifier: MPL-2.0

//! Settings drawer view

use crate::app::state::{AppModel, ContextPage, Message};
use crate::constants::{app_info, ui};
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    ///
    /// Shows appearance, safety map defaults and location options.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            Some(self.config.app_theme.index()),
            Message::SetAppTheme,
        );

        let radius_dropdown = widget::dropdown(
            &self.radius_dropdown_options,
            Some(self.config.default_radius.index()),
            Message::SetDefaultRadius,
        );

        let view_mode_index = crate::safety_map::ViewMode::ALL
            .iter()
            .position(|mode| *mode == self.config.default_view_mode);
        let view_mode_dropdown = widget::dropdown(
            &self.view_mode_dropdown_options,
            view_mode_index,
            Message::SetDefaultViewMode,
        );

        let location_toggle = widget::toggler(self.config.location_enabled)
            .on_toggle(|_| Message::ToggleLocationEnabled);

        // Version info string
        let version_info = if app_info::is_flatpak() {
            format!("Version {} (Flatpak)", app_info::version())
        } else {
            format!("Version {}", app_info::version())
        };

        let settings_column: Element<'_, Message> = widget::column()
            .push(
                widget::text(fl!("settings-appearance"))
                    .size(ui::TITLE_TEXT_SIZE)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("settings-default-radius"))
                    .size(ui::TITLE_TEXT_SIZE)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(radius_dropdown)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("settings-default-view"))
                    .size(ui::TITLE_TEXT_SIZE)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(view_mode_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::row()
                    .push(
                        widget::text(fl!("settings-use-location"))
                            .size(ui::TITLE_TEXT_SIZE)
                            .font(cosmic::font::bold()),
                    )
                    .push(widget::horizontal_space().width(Length::Fill))
                    .push(location_toggle)
                    .align_y(Alignment::Center),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(
                widget::text(fl!(
                    "settings-location-hint",
                    center = self.config.fallback_center.to_string()
                ))
                .size(ui::DETAIL_TEXT_SIZE),
            )
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!(
                    "settings-emergency-number",
                    number = self.config.emergency_number.clone()
                ))
                .size(ui::DETAIL_TEXT_SIZE),
            )
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(version_info)
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings-title"))
    }
}
