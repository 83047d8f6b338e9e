//! Command-line options and logging setup.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::ScreenId;
use crate::error::Result;

/// Interactive flexbox lessons in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "flexbox-tutor", version, about)]
pub struct Cli {
    /// Screen to start on.
    #[arg(short, long, value_enum, default_value_t = ScreenId::Menu)]
    pub lesson: ScreenId,

    /// Print the start screen as plain text and exit.
    #[arg(long)]
    pub print: bool,

    /// Document width for `--print`.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(20..))]
    pub width: u16,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `flexbox_tutor::pipeline=trace`.
    /// `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Install a file logger when `--log-file` was given.
///
/// The terminal belongs to the renderer, so logs never go to stdout or
/// stderr.
pub fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let file = File::create(path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .map_err(io::Error::other)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["flexbox-tutor"]);
        assert_eq!(cli.lesson, ScreenId::Menu);
        assert!(!cli.print);
        assert_eq!(cli.width, 100);
        assert_eq!(cli.log_level, "info");
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_lesson_names_are_kebab_case() {
        let cli = Cli::parse_from(["flexbox-tutor", "--lesson", "flex-grow", "--print", "--width", "80"]);
        assert_eq!(cli.lesson, ScreenId::FlexGrow);
        assert!(cli.print);
        assert_eq!(cli.width, 80);

        assert!(Cli::try_parse_from(["flexbox-tutor", "--lesson", "nope"]).is_err());
        assert!(Cli::try_parse_from(["flexbox-tutor", "--width", "5"]).is_err());
    }

    #[test]
    fn test_every_screen_parses_by_name() {
        for id in std::iter::once(ScreenId::Menu).chain(ScreenId::LESSONS) {
            let cli = Cli::parse_from(["flexbox-tutor", "--lesson", id.as_str()]);
            assert_eq!(cli.lesson, id);
        }
    }

    #[test]
    fn test_no_log_file_installs_nothing() {
        let cli = Cli::parse_from(["flexbox-tutor"]);
        assert!(init_logging(&cli).is_ok());
    }
}
