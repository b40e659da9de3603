//! main entry

use clap::{Parser, Subcommand};
use log::LevelFilter;
use piaoread::error::{Error, ErrorType};

mod font;
mod next;
mod open;
mod prev;
mod resume;
mod theme;
mod utils;

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose logging
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Site profile file (TOML) [default: built-in piaotia profile]
    #[arg(short = 'f', long, value_name = "FILE")]
    profile: Option<String>,

    /// Preferences file [default: platform data directory]
    #[arg(long, value_name = "FILE")]
    prefs: Option<String>,

    /// Where the rendered document is written
    #[arg(short, long, value_name = "FILE", default_value = "chapter.html")]
    out: String,

    /// Command
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
#[clap(disable_help_subcommand = true)]
enum Command {
    /// Opens a chapter URL
    Open(open::Open),

    /// Reopens the bookmarked chapter
    Resume(resume::Resume),

    /// Follows the bookmarked chapter's next-chapter link
    Next(next::Next),

    /// Follows the bookmarked chapter's previous-chapter link
    Prev(prev::Prev),

    /// Sets or toggles the theme
    Theme(theme::ThemeCmd),

    /// Sets the font size
    Font(font::Font),
}

#[tokio::main]
async fn dispatcher() -> Result<(), Error> {
    let cli = Cli::parse();

    // Initialize
    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let mut session =
        utils::Session::new(cli.profile.as_deref(), cli.prefs.as_deref(), &cli.out)?;

    // Dispatch
    match &cli.command {
        Command::Open(cmd) => cmd.execute(&mut session).await,
        Command::Resume(cmd) => cmd.execute(&mut session).await,
        Command::Next(cmd) => cmd.execute(&mut session).await,
        Command::Prev(cmd) => cmd.execute(&mut session).await,
        Command::Theme(cmd) => cmd.execute(&mut session).await,
        Command::Font(cmd) => cmd.execute(&mut session).await,
    }
}

fn main() {
    std::process::exit(match dispatcher() {
        Err(e) => {
            log::error!("{}", e);
            match e.error_type {
                ErrorType::Config => 1,
                ErrorType::Extract => 2,
                ErrorType::Fetch => 3,
                ErrorType::Html => 4,
                ErrorType::Io => 5,
                ErrorType::Json => 6,
                ErrorType::Status => 7,
            }
        }
        Ok(_) => 0,
    })
}
