// SPDX-License-Identifier: GPL-3.0-only

use clap::{Args, Parser, Subcommand};
use guardian::app::AppModel;
use guardian::constants::SearchRadius;
use guardian::errors::{AppError, AppResult};
use guardian::geo::Coordinate;
use guardian::i18n;
use guardian::places::Category;
use guardian::terminal::TerminalOptions;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "guardian")]
#[command(about = "Travel safety companion for the COSMIC desktop")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Position given on the command line
#[derive(Args)]
struct PositionArgs {
    /// Latitude in decimal degrees (requires --lng)
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees (requires --lat)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
}

impl PositionArgs {
    fn coordinate(&self) -> AppResult<Option<Coordinate>> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => {
                let coordinate = Coordinate::new(lat, lng);
                if coordinate.is_valid() {
                    Ok(Some(coordinate))
                } else {
                    Err(AppError::Config(format!("Invalid position {}, {}", lat, lng)))
                }
            }
            _ => Ok(None),
        }
    }
}

/// Which places to include
#[derive(Args)]
struct FilterArgs {
    /// Category to include (repeatable; default: all)
    #[arg(short, long = "category", value_name = "CATEGORY")]
    categories: Vec<Category>,

    /// Search radius: 2, 5 or 10 km (default: from settings)
    #[arg(short, long)]
    radius: Option<SearchRadius>,

    #[command(flatten)]
    position: PositionArgs,
}

impl FilterArgs {
    fn into_query(self) -> AppResult<cli::Query> {
        Ok(cli::Query {
            location: self.position.coordinate()?,
            categories: self.categories,
            radius: self.radius,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run in terminal mode (renders the safety map to the terminal)
    Terminal {
        #[command(flatten)]
        position: PositionArgs,

        /// Do not ask the location service for the device position
        #[arg(long)]
        no_location: bool,
    },

    /// List emergency services
    Places {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the safety map page
    Map {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output file path (default: ~/.cache/guardian/safety-map.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the page in the browser
        #[arg(long)]
        open: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=guardian=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Terminal {
            position,
            no_location,
        }) => guardian::terminal::run(TerminalOptions {
            location: position.coordinate()?,
            no_location,
        }),
        Some(Commands::Places { filter, json }) => Ok(cli::list_places(filter.into_query()?, json)?),
        Some(Commands::Map {
            filter,
            output,
            open,
        }) => Ok(cli::export_map(filter.into_query()?, output, open)?),
        None => run_gui(),
    }
}

fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(180.0),
    );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
