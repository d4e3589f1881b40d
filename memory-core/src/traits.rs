//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** `memory-firmware` (ESP32-C6 GPIO, SYSTIMER, RTC, RMT)
//! - **Testing:** Simulator mit virtueller Zeit in `memory-tests`

use rgb::RGB8;

use crate::types::{Color, Led};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
/// Auf dem DevKit ist die Status-LED eine solche SmartLED.
pub trait SmartLedWriter {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Die fünf LED-Ausgänge des Boards
///
/// `set` ist idempotent. `is_on` liefert den zuletzt geschriebenen Zustand
/// (Read-Modify-Write für `toggle`).
pub trait LedBank {
    fn set(&mut self, led: Led, on: bool) -> Result<(), LedError>;

    fn is_on(&self, led: Led) -> bool;

    fn toggle(&mut self, led: Led) -> Result<(), LedError> {
        let on = self.is_on(led);
        self.set(led, !on)
    }
}

/// Die vier Spiel-Taster
pub trait ButtonPad {
    /// `true` solange der Taster der Farbe gedrückt ist
    fn is_pressed(&mut self, color: Color) -> bool;
}

/// Periodischer Timer mit Überlauf-Flag (alle 10 ms)
///
/// Es gibt keinen Interrupt: Software liest das Flag und löscht es selbst.
pub trait TickTimer {
    /// Liest das Überlauf-Flag
    fn overflowed(&mut self) -> bool;

    /// Löscht das Überlauf-Flag
    fn clear_overflow(&mut self);
}

/// Freilaufender 16-Bit Zähler (rollt kontinuierlich über)
pub trait FreeRunningCounter {
    fn read(&mut self) -> u16;
}
