// src/bin/card_table_cli.rs
//
// Локальный стол: читаем строки `<кто> <команда> [аргументы]` из stdin и
// печатаем то, что ушло бы в чат.
//
//   alice startLandlord alice bob carol
//   alice pl 3 3
//   bob xl
//   alice hand

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use card_table_engine::api::Command;
use card_table_engine::domain::{Chips, Participant};
use card_table_engine::engine::{RandomSource, SessionRegistry};
use card_table_engine::infra::logging::init_tracing;
use card_table_engine::infra::{
    relay, DeliveryError, DeterministicRng, GameConfig, Messenger, ParticipantDirectory, SystemRng,
};

#[derive(Debug, Parser)]
#[command(name = "card_table_cli", about = "Play Landlord, Gongzhu and Blind Man's Bluff locally")]
struct Args {
    /// JSON с настройками игр.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed для воспроизводимых раздач.
    #[arg(long)]
    seed: Option<u64>,

    /// Фильтр логов, если не задан RUST_LOG.
    #[arg(long, default_value = "warn")]
    log: String,
}

/// Печатает общий канал и личные сообщения с пометкой получателя.
struct ConsoleMessenger;

impl Messenger for ConsoleMessenger {
    fn broadcast(&mut self, text: &str) {
        println!("{text}");
    }

    fn send_private(&mut self, to: &Participant, text: &str) -> Result<(), DeliveryError> {
        for line in text.lines() {
            println!("  [dm {}] {line}", to.name);
        }
        Ok(())
    }

    fn fallback(&mut self, text: &str) {
        println!("{text}");
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    match args.seed {
        Some(seed) => run(SessionRegistry::new(config, DeterministicRng::from_seed(seed))),
        None => run(SessionRegistry::new(config, SystemRng)),
    }
}

fn run<R: RandomSource>(mut registry: SessionRegistry<R>) -> anyhow::Result<()> {
    let mut directory = ParticipantDirectory::new();
    let mut messenger = ConsoleMessenger;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let (actor, verb, rest) = match words.as_slice() {
            [] => continue,
            [actor, verb, rest @ ..] => (directory.intern(actor), *verb, rest),
            [_] => {
                println!("usage: <player> <command> [args...]");
                continue;
            }
        };

        let command = match parse_command(verb, rest, &mut directory) {
            Ok(cmd) => cmd,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match registry.execute(&actor, command) {
            Ok(outcome) => {
                relay(&outcome, &mut messenger);
            }
            Err(err) => {
                warn!(player = actor.id, error = %err, "action rejected");
                println!("  [to {}] {err}", actor.name);
            }
        }
    }

    Ok(())
}

/// Текстовые команды бота → структурированная `Command`.
fn parse_command(verb: &str, rest: &[&str], directory: &mut ParticipantDirectory) -> Result<Command, String> {
    let players = |dir: &mut ParticipantDirectory| rest.iter().map(|n| dir.intern(n)).collect::<Vec<_>>();

    let cmd = match verb {
        "startLandlord" => Command::StartLandlord {
            participants: players(directory),
        },
        "pl" => Command::Play {
            cards: rest.iter().map(|s| s.to_string()).collect(),
        },
        "xl" => Command::Pass,
        "startGongzhu" => Command::StartGongzhu {
            participants: players(directory),
        },
        "pg" => match rest {
            [card] => Command::PlayCard {
                card: card.to_string(),
            },
            _ => return Err("usage: pg <card>".into()),
        },
        "startBMB" => match rest {
            [a, b] => Command::StartBluff {
                first: directory.intern(a),
                second: directory.intern(b),
            },
            _ => return Err("usage: startBMB <player1> <player2>".into()),
        },
        "raise" => match rest {
            [] => Command::Raise { amount: None },
            [n] => Command::Raise {
                amount: Some(Chips(n.parse().map_err(|_| format!("not a number: {n}"))?)),
            },
            _ => return Err("usage: raise [amount]".into()),
        },
        "call" => Command::Call,
        "fold" => Command::Fold,
        "hand" => Command::HandView,
        "endgame" => Command::EndAllGames,
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(cmd)
}
