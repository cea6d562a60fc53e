use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use spriter::background::BackgroundRef;
use spriter::cli::{CliArgs, Command};
use spriter::config::{merge_config_with_args, save_config};
use spriter::output::{write_css, write_json};
use spriter::session::{InputRouter, Session, SessionOptions};
use spriter::tracker::RecordingSurface;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Launch GUI if no arguments provided and gui feature is enabled
    #[cfg(feature = "gui")]
    if std::env::args().len() == 1 {
        init_logging(false);
        return spriter::gui::run(None);
    }

    let cli = CliArgs::parse();

    #[cfg(feature = "gui")]
    if let Command::Gui(args) = &cli.command {
        init_logging(args.verbose);
        return spriter::gui::run(args.image.clone());
    }

    let args = match &cli.command {
        Command::Css(args) | Command::Json(args) => args.clone(),
        #[cfg(feature = "gui")]
        Command::Gui(_) => unreachable!(),
    };

    let merged = merge_config_with_args(&args)?;

    init_logging(merged.verbose);

    info!("Spriter v{}", env!("CARGO_PKG_VERSION"));

    let background = BackgroundRef::resolve(
        merged.image.as_deref(),
        merged.url.as_deref(),
        merged.width,
        merged.height,
    )?
    .with_offset_mode(merged.offset_mode);
    info!(
        "Sheet '{}' ({}x{})",
        background.url, background.width, background.height
    );

    let mut router = InputRouter::new();
    let mut session = Session::new(
        background,
        SessionOptions {
            banner: merged.banner,
            live_preview: merged.live_preview,
            duplicates: merged.on_duplicate,
        },
    );
    session.attach(&mut router);

    // Replay every region as a drag over a headless surface
    let mut surface = RecordingSurface::new();
    for spec in &merged.sprites {
        session
            .replay(&router, spec, &mut surface)
            .with_context(|| format!("failed to add sprite '{}'", spec.name))?;
    }

    if session.registry().is_empty() {
        warn!("No sprites given; output will be empty");
    }

    match (&cli.command, &merged.output) {
        (Command::Css(_), Some(path)) => {
            write_css(session.registry(), session.background(), merged.banner, path)?;
            info!("Wrote {}", path.display());
        }
        (Command::Json(_), Some(path)) => {
            write_json(session.registry(), session.background(), path)?;
            info!("Wrote {}", path.display());
        }
        (Command::Css(_), None) => write_stdout(&session.export_stylesheet())?,
        (Command::Json(_), None) => write_stdout(&session.export_json()?)?,
        #[cfg(feature = "gui")]
        (Command::Gui(_), _) => unreachable!(),
    }

    if let Some(path) = &merged.save_config {
        save_config(&merged.to_config(path), path)?;
        info!("Saved config {}", path.display());
    }

    session.detach(&mut router);

    Ok(())
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to write to stdout")?;
    Ok(())
}
