//! teleprompt CLI: Command-line interface for timed line-by-line display

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use teleprompt_engine::{DisplayConfig, LineDisplayer, LineSource};
use tracing_subscriber::EnvFilter;

/// Display text line by line with timed pauses
#[derive(Parser)]
#[command(name = "teleprompt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display lines from a file, or stdin when no file is given
    Play {
        /// File to read lines from
        file: Option<PathBuf>,

        /// Seconds to pause between lines
        #[arg(long)]
        interval: Option<f64>,

        /// Stop displaying after this many seconds
        #[arg(long)]
        stop_after: Option<f64>,

        /// Load playback settings from a JSON config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run the built-in demo scenarios (default when no command specified)
    Demo,
}

fn main() {
    install_tracing();

    let cli = Cli::parse();
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    match cli.command {
        Some(Commands::Play {
            file,
            interval,
            stop_after,
            config,
        }) => {
            rt.block_on(cmd_play(file, interval, stop_after, config));
        }
        None | Some(Commands::Demo) => {
            rt.block_on(cmd_demo());
        }
    }
}

/// Initialize the logging framework.
///
/// Events go to stderr so stdout carries only the displayed lines.
fn install_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn cmd_play(
    file: Option<PathBuf>,
    interval: Option<f64>,
    stop_after: Option<f64>,
    config_path: Option<PathBuf>,
) {
    let text = match read_source(file.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            std::process::exit(1);
        }
    };

    let mut config = match config_path {
        Some(path) => match DisplayConfig::load(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                std::process::exit(1);
            }
        },
        None => DisplayConfig::default(),
    };

    // Explicit flags override the config file.
    if let Some(secs) = interval {
        config.rest_interval_seconds = secs;
    }
    if let Some(secs) = stop_after {
        config.stop_time_seconds = Some(secs);
    }

    let mut displayer = match config.displayer(LineSource::RawText(text)) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match displayer.run(&mut std::io::stdout()).await {
        Ok(lines) => eprintln!("Displayed {lines} lines"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn read_source(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

// Public Domain: "Twinkle, Twinkle, Little Star" by Jane Taylor, 1806.
const SAMPLE_LYRICS: &str = "Twinkle, twinkle, little star,
How I wonder what you are!
Up above the world so high,
Like a diamond in the sky.
Twinkle, twinkle, little star,
How I wonder what you are!

When the blazing sun is gone,
When he nothing shines upon,
Then you show your little light,
Twinkle, twinkle, all the night.
Twinkle, twinkle, little star,
How I wonder what you are!";

/// Run the three fixed demo scenarios.
async fn cmd_demo() {
    let rule = "=".repeat(60);
    let dash = "-".repeat(60);
    let mut out = std::io::stdout();

    println!("{rule}");
    println!("Teleprompt Demo");
    println!("{rule}");
    println!();

    println!("Example 1: Display with 1 second rest interval");
    println!("{dash}");
    match run_demo(SAMPLE_LYRICS, 1.0, None, &mut out).await {
        Ok(lines) => println!("\nDisplayed {lines} lines"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
    println!();

    println!("\nExample 2: Display with 0.5 second rest interval and 5 second stop time");
    println!("{dash}");
    match run_demo(SAMPLE_LYRICS, 0.5, Some(5.0), &mut out).await {
        Ok(lines) => println!("\nDisplayed {lines} lines"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
    println!();

    println!("\nExample 3: Display with custom lines (2 second interval)");
    println!("{dash}");
    // Public Domain: "Row, Row, Row Your Boat", traditional nursery rhyme.
    let custom_lines = vec![
        "Row, row, row your boat,",
        "Gently down the stream.",
        "Merrily, merrily, merrily, merrily,",
        "Life is but a dream.",
    ];
    match run_demo(custom_lines, 2.0, None, &mut out).await {
        Ok(lines) => println!("\nDisplayed {lines} lines"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
    println!();

    println!("{rule}");
    println!("Demo completed!");
    println!("{rule}");
}

async fn run_demo<W: std::io::Write>(
    source: impl Into<LineSource>,
    interval: f64,
    stop_after: Option<f64>,
    out: &mut W,
) -> Result<usize, teleprompt_engine::DisplayError> {
    let mut displayer = LineDisplayer::new(source, interval, stop_after)?;
    displayer.run(out).await
}
