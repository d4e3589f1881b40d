//! Memory Core - Platform-agnostic Game Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Hardware-Traits, die reinen Funktionen und die
//! komplette Spiel-Zustandsmaschine des 4-Farben Memory-Spiels.

#![no_std]

// Logging-Makros zuerst, damit alle Module sie sehen
#[macro_use]
mod fmt;

pub mod clock;
pub mod display;
pub mod entropy;
pub mod game;
pub mod input;
pub mod logic;
pub mod pins;
pub mod round;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use clock::Clock;
pub use display::Display;
pub use entropy::EntropySource;
pub use game::{GameController, GameReport};
pub use input::{ColorSet, InputReader};
pub use logic::build_sequence;
pub use pins::{ActiveLowButtons, PinLeds};
pub use round::RoundEngine;
pub use traits::{ButtonPad, FreeRunningCounter, LedBank, LedError, SmartLedWriter, TickTimer};
pub use types::{
    Color, Difficulty, GameOutcome, GameState, Led, RoundOutcome, SEQUENCE_LEN, Sample16, Sequence, WrongPress,
};
