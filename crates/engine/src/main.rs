//! CLIsland - interactive command loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clisland_engine::commands::{Command, HELP};
use clisland_engine::infrastructure::{content::ContentCatalog, settings};
use clisland_engine::use_cases::{GameEngine, GameError};
use clisland_engine::App;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs go to stderr so stdout stays a clean stream of JSON snapshots.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clisland=info,clisland_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting CLIsland");

    let mut catalog = match std::env::var(settings::CONTENT_PATH_VAR) {
        Ok(path) if !path.trim().is_empty() => ContentCatalog::load(Path::new(path.trim()))?,
        _ => ContentCatalog::builtin(),
    };
    settings::apply_env_overrides(&mut catalog.game);

    let app = App::new(catalog);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Welcome to the villa. Type 'help' for commands.")?;
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "error: {e}")?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if let Err(e) = run(&app.engine, command, &mut stdout) {
            match e.downcast_ref::<GameError>() {
                Some(game_error) => writeln!(stdout, "error: {game_error}")?,
                None => return Err(e),
            }
        }
    }

    tracing::info!("Goodbye");
    Ok(())
}

fn run(engine: &GameEngine, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Start(name) => print_json(out, &engine.start_game(&name)?),
        Command::Advance => print_json(out, &engine.advance_day()?),
        Command::Choose(choice) => print_json(out, &engine.process_choice(&choice)?),
        Command::Trigger(event) => print_json(out, &engine.trigger_event(event)?),
        Command::Interact {
            character,
            interaction_type,
        } => print_json(
            out,
            &engine.interact_with_character(&character, interaction_type)?,
        ),
        Command::Events => print_json(out, &engine.available_events()?),
        Command::Characters => print_json(out, &engine.available_characters()?),
        Command::Relationship(character) => print_json(out, &engine.relationship_with(&character)?),
        Command::Status => print_json(out, &engine.get_current_state()?),
        Command::Save => print_json(out, &engine.save_game()?),
        Command::Load => print_json(out, &engine.load_game()?),
        Command::End => print_json(out, &engine.end_game()?),
        Command::Delete => {
            engine.delete_game()?;
            writeln!(out, "game deleted")?;
            Ok(())
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            Ok(())
        }
        Command::Quit => Ok(()),
    }
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
