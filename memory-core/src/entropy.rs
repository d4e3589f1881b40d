//! Zufall aus freilaufenden Zählern
//!
//! Zwei Zähler mit unterschiedlichen Taktquellen werden zu zwei vom Menschen
//! bestimmten Zeitpunkten gelesen (Start-Taster, Schwierigkeits-Taster).
//! Keine kryptographische Güte, nur "anders als beim letzten Spiel".

use crate::traits::FreeRunningCounter;
use crate::types::Sample16;

pub struct EntropySource<S, F> {
    /// Langsamer Zähler (niederfrequente Taktquelle)
    slow: S,
    /// Schneller Zähler (hochfrequente Taktquelle)
    fast: F,
}

impl<S: FreeRunningCounter, F: FreeRunningCounter> EntropySource<S, F> {
    pub fn new(slow: S, fast: F) -> Self {
        Self { slow, fast }
    }

    /// Erster Wert, beim Druck auf Start
    pub fn sample_first(&mut self) -> Sample16 {
        self.slow.read()
    }

    /// Zweiter Wert, bei der Wahl des Schwierigkeitsgrads
    pub fn sample_second(&mut self) -> Sample16 {
        self.fast.read()
    }

    pub fn release(self) -> (S, F) {
        (self.slow, self.fast)
    }
}
