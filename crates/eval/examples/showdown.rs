// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Evaluate players holdings against a shared board:
//
// ```bash
// $ cargo r --example showdown -- --board "3C 3D 6S KD TS" "3S KH" "3H TH"
// Player 1: 3S KH  Full house, 3s over Ks
// Player 2: 3H TH  Full house, 3s over Ts
// Player 1 wins
// ```
use anyhow::{Context, Result, bail};
use clap::Parser;

use showdown_eval::{Card, HandValue};

#[derive(Parser)]
#[command(about = "Evaluate players holdings against a shared board")]
struct Args {
    /// The community cards, up to five, e.g. "3C 3D 6S KD TS".
    #[arg(short, long, default_value = "")]
    board: String,

    /// Each player's hole cards, e.g. "3S KH".
    #[arg(required = true)]
    players: Vec<String>,
}

fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split_whitespace()
        .map(|c| c.parse::<Card>().map_err(anyhow::Error::from))
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let board = parse_cards(&args.board).context("invalid board")?;
    if board.len() > 5 {
        bail!("the board holds at most five cards");
    }

    let mut values = Vec::with_capacity(args.players.len());
    for (n, holding) in args.players.iter().enumerate() {
        let mut pool = parse_cards(holding)
            .with_context(|| format!("invalid holding for player {}", n + 1))?;
        if pool.is_empty() {
            bail!("player {} has no cards", n + 1);
        }

        pool.extend_from_slice(&board);
        let value = HandValue::eval(&pool);
        println!("Player {}: {:<6} {}", n + 1, holding, value);
        values.push(value);
    }

    if let Some(best) = values.iter().max() {
        let winners = values
            .iter()
            .enumerate()
            .filter(|(_, v)| *v == best)
            .map(|(n, _)| (n + 1).to_string())
            .collect::<Vec<_>>();

        if winners.len() == 1 {
            println!("Player {} wins", winners[0]);
        } else {
            println!("Split pot between players {}", winners.join(", "));
        }
    }

    Ok(())
}
