//! termfolio - a desktop fake-terminal portfolio
//!
//! Boots a terminal-styled window, prints the banner, fake-types the
//! default command, and hands the prompt to the visitor.

mod app;

use std::env;
use std::path::PathBuf;
use std::process;

use tracing::{debug, error, info, warn};

use termfolio::config::Config;
use termfolio::error::Result;
use termfolio::ConfigLoader;

use app::TermfolioApp;
use eframe::egui;

/// Parsed command-line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Window width override
    width: Option<f32>,
    /// Window height override
    height: Option<f32>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing config file path".into());
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--width" | "-w" => {
                    if i + 1 < args.len() {
                        app_args.width = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--height" | "-h" => {
                    if i + 1 < args.len() {
                        app_args.height = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("termfolio v{}", termfolio::VERSION);
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
                _ => {
                    warn!("Ignoring positional argument: {}", args[i]);
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("termfolio - a desktop fake-terminal portfolio");
    println!();
    println!("USAGE:");
    println!("    termfolio [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    termfolio looks for configuration files in this order:");
    println!("    1. Path specified with --config");
    println!("    2. $XDG_CONFIG_HOME/termfolio/config.toml");
    println!("    3. ~/.termfolio.toml");
    println!("    4. ./termfolio.toml");
    println!("    5. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn main() {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    let log_level = if args.debug { "debug" } else { "info" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .compact()
        .init();

    info!("starting termfolio v{}", termfolio::VERSION);

    let config = load_configuration(&args);
    let native_options = create_native_options(&args, &config);
    let app = TermfolioApp::new(config);

    if let Err(e) = eframe::run_native(
        "termfolio",
        native_options,
        Box::new(|_cc| Box::new(app)),
    ) {
        error!("application failed: {}", e);
        process::exit(1);
    }

    info!("termfolio shutdown complete");
}

/// Load configuration from an explicit path or the search locations.
fn load_configuration(args: &AppArgs) -> Config {
    if let Some(path) = &args.config_path {
        debug!("loading config from: {}", path.display());
        match ConfigLoader::load_from_path(path) {
            Ok(config) => {
                info!("configuration loaded from: {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("failed to load config from {}: {}", path.display(), e);
                info!("falling back to default search locations");
            }
        }
    }
    ConfigLoader::load()
}

/// Window options from config plus command-line overrides.
fn create_native_options(args: &AppArgs, config: &Config) -> eframe::NativeOptions {
    let width = args.width.unwrap_or(config.ui.window_width);
    let height = args.height.unwrap_or(config.ui.window_height);

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("termfolio")
            .with_app_id("termfolio")
            .with_icon(std::sync::Arc::new(create_window_icon()))
            .with_inner_size([width, height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    }
}

/// Generate a small terminal-styled window icon.
fn create_window_icon() -> egui::IconData {
    // 32x32, dark background with a green caret block and title strip.
    let bg = [13, 17, 23, 255];
    let fg = [57, 211, 83, 255];
    let accent = [88, 166, 255, 255];

    let mut rgba = Vec::with_capacity(32 * 32 * 4);
    for y in 0..32u32 {
        for x in 0..32u32 {
            let pixel = if y < 6 && (4..28).contains(&x) {
                accent
            } else if (10..14).contains(&y) && (6..10).contains(&x) {
                fg // the prompt chevron
            } else if (18..24).contains(&y) && (12..20).contains(&x) {
                fg // the caret block
            } else {
                bg
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: 32,
        height: 32,
    }
}
