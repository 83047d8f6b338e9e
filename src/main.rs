use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use tracing::error;

use flexbox_tutor::{init_logging, pipeline, App, Cli, Result, TerminalSize};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "exiting with error");
            eprintln!("flexbox-tutor: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(&cli)?;

    if cli.print {
        let app = App::new(cli.lesson, TerminalSize::new(cli.width, 0));
        let document = pipeline::render_document(&app, cli.width, 0)?;
        for line in document.buffer.to_lines() {
            println!("{line}");
        }
        return Ok(());
    }

    let app = App::new(cli.lesson, TerminalSize::detect());
    pipeline::run(Rc::new(app))
}
