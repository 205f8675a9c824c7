// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for an arbitrary pool of cards, typically a
//! player's two hole cards plus up to five community cards. The evaluator
//! classifies the pool into one of the nine [HandRank] categories and
//! produces a [HandValue] that orders against any other hand, category
//! first and category specific tiebreak ranks second.
//!
//! To evaluate a hand collect the pool and call [HandValue::eval]:
//!
//! ```
//! # use showdown_eval::*;
//! let pool = ["AS", "KS", "QS", "JS", "TS"]
//!     .iter()
//!     .map(|s| s.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let value = HandValue::eval(&pool);
//! assert_eq!(value.rank(), HandRank::StraightFlush);
//! assert_eq!(value.to_string(), "Straight flush, A high");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue, TieBreak};

// Reexport cards types.
pub use showdown_cards::{Card, ParseCardError, Rank, Suit};
