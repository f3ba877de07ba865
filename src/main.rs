use std::cell::RefCell;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use unistate::demo::counter::{Counter, CounterAction, CounterReducer};
use unistate::demo::tamagotchi::{Tamagotchi, TamagotchiAction, TamagotchiReducer};
use unistate::logging::init_tracing;
use unistate::{Store, StoreConfig};

#[derive(Debug, Parser)]
#[command(name = "unistate", version, about = "Drive an example state container")]
struct Cli {
    /// Store config file (TOML). Defaults to the user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print each state as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tamagotchi-style pet (actions: feed, play, sleep, wake)
    Pet {
        #[arg(long, default_value_t = 50)]
        hunger: u8,
        #[arg(long, default_value_t = 50)]
        happiness: u8,
        #[arg(long)]
        sleeping: bool,
        /// Actions to dispatch in order
        actions: Vec<TamagotchiAction>,
    },
    /// Integer counter (actions: inc, dec)
    Counter {
        /// Initial value. Without it the counter starts absent and counts from 0.
        #[arg(long, allow_hyphen_values = true)]
        start: Option<i64>,
        /// Actions to dispatch in order
        actions: Vec<CounterAction>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => StoreConfig::load_from(path)?,
        None => StoreConfig::load()?,
    };

    match cli.command {
        Command::Pet {
            hunger,
            happiness,
            sleeping,
            actions,
        } => {
            let pet = Tamagotchi {
                hunger,
                happiness,
                sleeping,
            };
            let store = Store::builder(TamagotchiReducer)
                .config(config)
                .initial_state(pet)
                .build()?;
            drive(&store, actions, cli.json)
        }
        Command::Counter { start, actions } => {
            let mut builder = Store::builder(CounterReducer).config(config);
            if let Some(value) = start {
                builder = builder.initial_state(Counter::new(value));
            }
            drive(&builder.build()?, actions, cli.json)
        }
    }
}

/// Dispatches `actions` in order, printing `<action> -> <state>` from a listener.
fn drive<S, A>(store: &Store<S, A>, actions: Vec<A>, json: bool) -> anyhow::Result<()>
where
    S: Clone + Display + Serialize + 'static,
    A: Display + 'static,
{
    if let Some(state) = store.state() {
        println!("initial -> {}", render(&state, json)?);
    }

    let current = Rc::new(RefCell::new(String::new()));
    let printer = {
        let current = Rc::clone(&current);
        let weak = store.downgrade();
        store.subscribe(move || {
            let Some(state) = weak.upgrade().and_then(|store| store.state()) else {
                return;
            };
            match render(&state, json) {
                Ok(line) => println!("{} -> {}", current.borrow(), line),
                Err(err) => tracing::error!(error = %err, "Failed to render state"),
            }
        })
    };

    for action in actions {
        *current.borrow_mut() = action.to_string();
        store
            .dispatch(action)
            .with_context(|| format!("Dispatching '{}' failed", current.borrow()))?;
    }

    printer.unsubscribe();
    tracing::info!(
        store = %store.name(),
        dispatches = store.dispatch_count(),
        "Done"
    );
    Ok(())
}

fn render<S: Display + Serialize>(state: &S, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(state)?)
    } else {
        Ok(state.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_pet_actions() {
        let cli = Cli::try_parse_from(["unistate", "pet", "--sleeping", "feed", "dance"]).unwrap();
        match cli.command {
            Command::Pet {
                sleeping, actions, ..
            } => {
                assert!(sleeping);
                assert_eq!(
                    actions,
                    vec![
                        TamagotchiAction::Feed,
                        TamagotchiAction::Unrecognized("dance".to_string())
                    ]
                );
            }
            other => panic!("Expected Pet, got {other:?}"),
        }
    }

    #[test]
    fn parses_negative_counter_start() {
        let cli = Cli::try_parse_from(["unistate", "counter", "--start", "-3", "inc"]).unwrap();
        assert!(matches!(cli.command, Command::Counter { start: Some(-3), .. }));
    }

    #[test]
    fn render_plain_and_json() {
        let counter = Counter::new(4);
        assert_eq!(render(&counter, false).unwrap(), "4");
        assert_eq!(render(&counter, true).unwrap(), "4");
        let pet = Tamagotchi::default();
        assert_eq!(
            render(&pet, true).unwrap(),
            r#"{"hunger":50,"happiness":50,"sleeping":false}"#
        );
    }
}
