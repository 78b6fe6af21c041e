//! Artgallery - headless gallery driver
//!
//! Loads settings, wires logging subscribers to the gallery stores and
//! applies console commands read from stdin until `quit` or end of input.

use std::path::PathBuf;

use {
    anyhow::Result,
    tokio::io::{AsyncBufReadExt, BufReader, stdin},
    tracing::{info, warn},
    tracing_subscriber::EnvFilter,
};

use artgallery::{
    Command, Console, ErrorReporter, Outcome, ResultExt, SettingsManager, art_collection, page,
};

/// Main entry point for the gallery driver.
///
/// An optional first argument names a saved collection response to load
/// before reading commands.
#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings_manager = SettingsManager::new().add_context("Failed to load gallery settings")?;
    let settings = settings_manager.get_settings().clone();
    info!(
        config = %settings_manager.get_config_path().display(),
        start_page = settings.start_page,
        page_size = settings.page_size,
        "Gallery starting"
    );

    let pages = page().watch();
    tokio::spawn(async move {
        while let Ok(current) = pages.recv().await {
            info!(page = current, "Page changed");
        }
    });
    let collections = art_collection().watch();
    tokio::spawn(async move {
        while let Ok(pieces) = collections.recv().await {
            info!(pieces = pieces.len(), "Art collection changed");
        }
    });

    let console =
        Console::new(art_collection(), page()).with_page_size(settings.page_size as usize);
    console
        .execute(Command::Page(settings.start_page))
        .add_context("Failed to open start page")?;

    if let Some(path) = std::env::args().nth(1)
        && let Err(e) = console
            .execute(Command::Load(PathBuf::from(&path)))
            .add_contextf(format!("Failed to load initial collection {path}"))
    {
        ErrorReporter::warn(&e, "loading initial collection");
    }

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .add_context("Failed to read command")?
    {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Ignoring command");
                println!("{e} (type `help` for commands)");
                continue;
            }
        };

        match console.execute(command) {
            Ok(Outcome::Continue(output)) => {
                for text in output {
                    println!("{text}");
                }
            }
            Ok(Outcome::Quit) => break,
            Err(e) => {
                let error: anyhow::Error = e.into();
                println!("{}", ErrorReporter::to_user_message(&error));
                ErrorReporter::warn(&error, "executing command");
            }
        }
    }

    info!("Gallery stopped");
    Ok(())
}
