use clap::{Parser, ValueEnum};
use color_eyre::Result;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::io::Write;
use std::path::PathBuf;

mod config;
mod error;
mod notification;
mod script;
mod theme;
mod widgets;

use config::{Config, LogLevel};
use notification::NotificationService;
use notification::markup;
use notification::terminal_render::{NotificationOverlay, buffer_lines};

/// What to print once the script has run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Markup added to the page body
    Html,
    /// Terminal drawing of the popup and overlay
    Preview,
    /// JSON snapshot of the service state
    State,
}

/// Replay a storefront notification session and show the result
#[derive(Parser, Debug)]
#[command(version, about = "Replay error popup and wait screen sessions")]
struct Args {
    /// JSON script of operations to replay
    script: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Config file (defaults to ~/.config/storefront-notify/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every operation and its result to stderr
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    init_logging(config_result.config.logging.level);

    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }

    let operations = script::load_script(&args.script)?;

    let mut service = NotificationService::new();
    for operation in &operations {
        let result = operation.apply(&mut service);
        if args.trace {
            match result {
                Some(count) => eprintln!("{} -> {}", operation, count),
                None => eprintln!("{}", operation),
            }
        }
    }

    print_output(&service, args.format, &config_result.config)?;

    service.shutdown();

    Ok(())
}

/// Log to stderr at the configured level; `RUST_LOG` takes precedence
fn init_logging(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn print_output(service: &NotificationService, format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Html => {
            println!("{}", markup::render_body(service));
        }
        OutputFormat::Preview => {
            let area = Rect::new(0, 0, config.preview.width, config.preview.height);
            let mut buf = Buffer::empty(area);
            NotificationOverlay::new(service).render(area, &mut buf);
            for line in buffer_lines(&buf) {
                println!("{}", line);
            }
        }
        OutputFormat::State => {
            println!("{}", serde_json::to_string_pretty(&service.snapshot())?);
        }
    }
    Ok(())
}
