// Library-Root: Board-Anbindung des Memory-Spiels an den ESP32-C6
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod board;
pub mod config;
pub mod hal;

// Re-exports von memory-core
pub use memory_core::{Color, Difficulty, GameController, GameReport, GameState};

pub use board::{Board, BoardButtons, BoardLeds};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf und wird
// nicht auf dem Host getestet. Die komplette Spiel-Logik liegt in
// memory-core hinter Traits (LedBank, ButtonPad, TickTimer,
// FreeRunningCounter, SmartLedWriter); memory-tests prüft sie gegen einen
// Simulator mit virtueller Zeit.
//
// Hier bleibt nur Verdrahtung: welche GPIOs, welcher Timer, welcher Zähler.
