// SPDX-License-Identifier: MPL-2.0

//! Main application module for Travel Guardian
//!
//! This module contains the application state, message handling, UI rendering,
//! and the location subscription of the safety map screen.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, Page, etc.)
//! - `home`: Travel safety menu
//! - `safety_map`: Filter bar, controls, map panel and place list
//! - `session`: Safety map mount sessions
//! - `settings`: Settings drawer UI
//! - `view`: Main view rendering
//! - `update`: Message handling

mod handlers;
mod home;
mod safety_map;
mod session;
pub mod settings;
mod state;
mod update;
mod view;

use crate::config::Config;
use crate::constants::{SearchRadius, app_info};
use crate::fl;
use crate::location::{self, GeoClueProvider};
use crate::places::seeded_places;
use crate::safety_map::ViewMode;
use cosmic::app::context_drawer;
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use session::MapSession;
pub use state::{AppModel, ContextPage, MenuEntry, Message, Page};
use tracing::info;

const APP_ICON: &[u8] = include_bytes!(
    "../../resources/icons/hicolor/scalable/apps/io.github.travelguardian.Guardian.svg"
);

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = app_info::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), app_info::REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        let (config_handler, config) = Config::load();

        let places = seeded_places();
        info!(count = places.len(), "Places loaded");

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            page: Page::default(),
            places: places.into(),
            session: MapSession::default(),
            radius_dropdown_options: SearchRadius::ALL
                .iter()
                .map(SearchRadius::display_name)
                .collect(),
            theme_dropdown_options: vec![
                fl!("theme-system"),
                fl!("theme-dark"),
                fl!("theme-light"),
            ],
            view_mode_dropdown_options: ViewMode::ALL
                .iter()
                .map(|mode| mode.display_name().to_string())
                .collect(),
        };

        let theme_task = cosmic::command::set_theme(app.config.app_theme.theme());

        (app, theme_task)
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        let mut elements = Vec::with_capacity(3);

        if self.page != Page::Home {
            elements.push(
                widget::button::icon(widget::icon::from_name("window-close-symbolic"))
                    .on_press(Message::Navigate(Page::Home))
                    .into(),
            );
        }

        elements.push(
            widget::button::icon(widget::icon::from_name("help-about-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::About))
                .into(),
        );
        elements.push(
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        );

        elements
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        Subscription::batch([config_sub, self.location_subscription()])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

impl AppModel {
    /// One location attempt per safety map session
    ///
    /// The subscription only exists while the screen is mounted. When the
    /// screen unmounts the runtime drops the stream, which cancels a pending
    /// GeoClue request.
    fn location_subscription(&self) -> Subscription<Message> {
        use cosmic::iced::futures::SinkExt;

        let Some(session) = self.session.location_request() else {
            return Subscription::none();
        };
        let timeout = self.config.location_timeout();

        Subscription::run_with_id(
            ("location", session),
            cosmic::iced::stream::channel(1, move |mut output| async move {
                info!(session, "Location subscription started");

                let provider = GeoClueProvider::new(app_info::APP_ID);
                let location = location::acquire(&provider, timeout).await;

                if output
                    .send(Message::LocationResolved { session, location })
                    .await
                    .is_err()
                {
                    info!(session, "Location result dropped - channel closed");
                    return;
                }

                // Stay alive until unmount so the attempt is not restarted
                std::future::pending::<()>().await;
            }),
        )
    }
}
