// SPDX-License-Identifier: GPL-3.0-only

//! Terminal-based safety map
//!
//! Renders the safety map screen in the terminal: a filter bar, a canvas with
//! the radius circle and place markers (or a place list), and a status bar.
//! The location attempt runs in the background for as long as the screen is
//! open and is cancelled when it closes.

use crate::config::Config;
use crate::constants::{SearchRadius, app_info, format_distance, ui};
use crate::geo::Coordinate;
use crate::location::{FixedProvider, GeoClueProvider, LocationProvider, LocationTask};
use crate::map_document::{TileSource, default_output_dir};
use crate::places::seeded_places;
use crate::safety_map::{SafetyMapState, ViewMode};
use crate::selection::{FilterTag, Selection};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, List, ListItem, Paragraph, Widget,
        canvas::{Canvas, Circle},
    },
};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Where the terminal screen gets its position from
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TerminalOptions {
    /// Use this position instead of asking the location service
    pub location: Option<Coordinate>,
    /// Skip location acquisition entirely
    pub no_location: bool,
}

/// Run the terminal safety map
pub fn run(options: TerminalOptions) -> Result<(), Box<dyn std::error::Error>> {
    let (_, config) = Config::load();

    // Location runs on its own runtime; the UI loop stays synchronous
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let mut app = TerminalApp::new(&config);
    if let Some(provider) = select_provider(&options, &config) {
        app.location = Some(LocationTask::spawn_on(
            runtime.handle(),
            provider,
            config.location_timeout(),
        ));
        app.status_message = "Finding your location...".to_string();
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn select_provider(options: &TerminalOptions, config: &Config) -> Option<Arc<dyn LocationProvider>> {
    if let Some(position) = options.location {
        return Some(Arc::new(FixedProvider::granted(position)));
    }
    if options.no_location || !config.location_enabled {
        info!("Location disabled, using default center");
        return None;
    }
    Some(Arc::new(GeoClueProvider::new(app_info::APP_ID)))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TerminalApp,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.poll_location();

        terminal.draw(|f| app.draw(f))?;

        if event::poll(Duration::from_millis(ui::TERMINAL_POLL_MS))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for_key(key.code, key.modifiers)
            && !app.apply(action)
        {
            break;
        }
    }

    Ok(())
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle(FilterTag),
    CycleRadius,
    SetView(ViewMode),
    OpenMap,
    ToggleHelp,
    Quit,
}

fn action_for_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        // Ctrl+C to quit
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(digit @ '0'..='5') => {
            let index = digit.to_digit(10)? as usize;
            FilterTag::ALL.get(index).copied().map(Action::Toggle)
        }
        KeyCode::Char('r') => Some(Action::CycleRadius),
        KeyCode::Char('m') => Some(Action::SetView(ViewMode::Map)),
        KeyCode::Char('l') => Some(Action::SetView(ViewMode::List)),
        KeyCode::Char('o') => Some(Action::OpenMap),
        KeyCode::Char('h') => Some(Action::ToggleHelp),
        _ => None,
    }
}

struct TerminalApp {
    state: SafetyMapState,
    tiles: TileSource,
    /// Pending location attempt; dropped (and aborted) with the app
    location: Option<LocationTask>,
    show_help: bool,
    status_message: String,
}

impl TerminalApp {
    fn new(config: &Config) -> Self {
        let state = SafetyMapState::new(seeded_places())
            .with_radius(config.default_radius)
            .with_view_mode(config.default_view_mode)
            .with_fallback_center(config.fallback_center);

        Self {
            state,
            tiles: config.tile_source(),
            location: None,
            show_help: false,
            status_message: build_status_message(),
        }
    }

    /// Apply an action; returns `false` when the screen should close
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::Toggle(tag) => {
                self.state.toggle_category(tag);
            }
            Action::CycleRadius => {
                let radius = self.state.radius().next();
                self.state.set_radius(radius);
                self.status_message = format!("Radius: {}", radius);
            }
            Action::SetView(mode) => self.state.set_view_mode(mode),
            Action::OpenMap => self.open_map(),
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.status_message = if self.show_help {
                    build_help_message()
                } else {
                    build_status_message()
                };
            }
        }
        true
    }

    fn poll_location(&mut self) {
        let Some(task) = self.location.as_mut() else {
            return;
        };
        let Some(outcome) = task.try_take() else {
            return;
        };

        self.status_message = match outcome {
            Some(position) => {
                self.state.resolve_location(position);
                format!("Location: {}", position)
            }
            None => "Location unavailable, showing the default area".to_string(),
        };
        self.location = None;
    }

    fn open_map(&mut self) {
        let document = self.state.map_document(&self.tiles);
        match document.write_html(&default_output_dir()) {
            Ok(path) => {
                if let Err(e) = open::that_detached(&path) {
                    error!(error = %e, "Failed to open map page");
                }
                self.status_message = format!("Map: {}", path.display());
            }
            Err(e) => {
                error!(error = %e, "Failed to write map page");
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [header_area, filter_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(Paragraph::new(self.header_line()), header_area);
        frame.render_widget(Paragraph::new(filter_line(self.state.selection())), filter_area);

        match self.state.view_mode() {
            ViewMode::Map => self.draw_map(frame, body_area),
            ViewMode::List => self.draw_list(frame, body_area),
        }

        frame.render_widget(
            StatusBar {
                message: &self.status_message,
            },
            status_area,
        );
    }

    fn header_line(&self) -> Line<'static> {
        let location = match (self.state.location(), &self.location) {
            (Some(_), _) => "your location",
            (None, Some(_)) => "locating...",
            (None, None) => "default area",
        };

        Line::from(vec![
            Span::styled(
                " Safety Map ",
                Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  {} | radius {} | {} places | {}",
                self.state.center(),
                self.state.radius(),
                self.state.visible_count(),
                location
            )),
        ])
    }

    fn draw_map(&self, frame: &mut Frame, area: Rect) {
        let center = self.state.center();
        let radius_km = f64::from(self.state.radius().km());
        let bound = radius_km * 1.25;

        let markers: Vec<(f64, f64, &'static str)> = self
            .state
            .visible_places()
            .map(|place| {
                let (east, north) = center.offset_km(&place.coordinate());
                (east, north, place.category.glyph())
            })
            .collect();

        let canvas = Canvas::default()
            .block(Block::bordered().title(" Map (o: open in browser) "))
            .x_bounds([-bound, bound])
            .y_bounds([-bound, bound])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: radius_km,
                    color: Color::Red,
                });
                ctx.print(0.0, 0.0, Span::styled("+", Style::default().fg(Color::Cyan)));
                for (east, north, glyph) in &markers {
                    ctx.print(
                        *east,
                        *north,
                        Span::styled(
                            *glyph,
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .state
            .visible_places()
            .map(|place| {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{:>2} ", place.category.glyph()),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(place.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(format!(
                            "  {} away",
                            format_distance(self.state.display_distance_km(place))
                        )),
                    ]),
                    Line::from(format!("   {}", place.address)),
                ];
                if let Some(phone) = &place.phone {
                    lines.push(Line::from(format!("   {}", phone)));
                }
                ListItem::new(lines)
            })
            .collect();

        let block = Block::bordered().title(" Places ");
        if items.is_empty() {
            frame.render_widget(
                Paragraph::new("No places match the selected filters").block(block),
                area,
            );
        } else {
            frame.render_widget(List::new(items).block(block), area);
        }
    }
}

/// Filter chips with their key numbers; active chips are highlighted
fn filter_line(selection: &Selection) -> Line<'static> {
    let spans = FilterTag::ALL
        .iter()
        .enumerate()
        .flat_map(|(index, tag)| {
            let style = if selection.is_active(*tag) {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            [
                Span::styled(format!("[{}] {}", index, tag.display_name()), style),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn build_status_message() -> String {
    "'0-5' filter | 'r' radius | 'm'/'l' map/list | 'o' open map | 'h' help | 'q' quit".to_string()
}

fn build_help_message() -> String {
    let radii = SearchRadius::ALL
        .iter()
        .map(SearchRadius::display_name)
        .collect::<Vec<_>>()
        .join("/");
    format!(
        "0: All | 1-5: Hospital/Police/Pharmacy/Diplomatic/ATM | r: Radius ({}) | m: Map | l: List | o: Open map | q/Ctrl+C: Quit",
        radii
    )
}

/// Status bar widget
struct StatusBar<'a> {
    message: &'a str,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ');
                cell.set_bg(Color::DarkGray);
            }
        }

        // Truncate on a character boundary
        let text: String = self.message.chars().take(area.width as usize).collect();

        buf.set_string(
            area.x,
            area.y,
            text,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::Category;

    fn app() -> TerminalApp {
        TerminalApp::new(&Config::default())
    }

    #[test]
    fn test_digit_keys_map_to_filter_tags() {
        assert_eq!(
            action_for_key(KeyCode::Char('0'), KeyModifiers::NONE),
            Some(Action::Toggle(FilterTag::All))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('5'), KeyModifiers::NONE),
            Some(Action::Toggle(FilterTag::Category(Category::Atm)))
        );
        assert_eq!(action_for_key(KeyCode::Char('6'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            action_for_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(action_for_key(KeyCode::Char('q'), KeyModifiers::NONE), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Char('c'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_apply_toggles_and_radius() {
        let mut app = app();
        assert!(app.apply(Action::Toggle(FilterTag::Category(Category::Police))));
        assert_eq!(app.state.visible_count(), 0);

        assert!(app.apply(Action::CycleRadius));
        assert_eq!(app.state.radius(), SearchRadius::Five);

        assert!(app.apply(Action::SetView(ViewMode::List)));
        assert_eq!(app.state.view_mode(), ViewMode::List);

        assert!(!app.apply(Action::Quit));
    }

    #[test]
    fn test_poll_location_resolves_once() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let here = Coordinate::new(38.75, -9.15);

        let mut app = app();
        app.location = Some(LocationTask::spawn_on(
            runtime.handle(),
            Arc::new(FixedProvider::granted(here)),
            Duration::from_secs(5),
        ));

        for _ in 0..200 {
            app.poll_location();
            if app.location.is_none() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert!(app.location.is_none());
        assert_eq!(app.state.center(), here);
        assert!(app.status_message.starts_with("Location:"));
    }

    #[test]
    fn test_denied_location_keeps_default_center() {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let mut app = app();
        app.location = Some(LocationTask::spawn_on(
            runtime.handle(),
            Arc::new(FixedProvider::denied()),
            Duration::from_secs(5),
        ));

        for _ in 0..200 {
            app.poll_location();
            if app.location.is_none() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(app.state.location(), None);
        assert_eq!(app.state.center(), crate::constants::map::DEFAULT_CENTER);
    }

    #[test]
    fn test_filter_line_lists_every_tag() {
        let line = filter_line(&Selection::All);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert!(text.contains("[0] All"));
        assert!(text.contains("[5] ATM"));
    }
}
