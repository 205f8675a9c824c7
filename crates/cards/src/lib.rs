// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines the card values used by the hand evaluator:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah > kd);
//! ```
//!
//! Cards can also be parsed from their two character notation, rank
//! followed by suit:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let kd = "KD".parse::<Card>().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! assert_eq!(kd.to_string(), "KD");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit};
