//! Busy-Wait Zeitbasis
//!
//! Einzige Zeitreferenz ist das Überlauf-Flag eines periodischen Timers.
//! Kein Sleep, kein Interrupt.

use crate::traits::TickTimer;

/// Länge eines Ticks in Millisekunden
pub const TICK_MS: u32 = 10;

// Wartezeiten in Ticks (je 10 ms)
pub const TEN_MS: u16 = 1;
pub const CENTI_SEC: u16 = 10;
pub const QUART_SEC: u16 = 25;
pub const HALF_SEC: u16 = 50;
pub const ONE_SEC: u16 = 100;
/// LED an-Zeit beim Abspielen der Sequenz
pub const BLINK: u16 = 20;
/// Pause nach jedem Blink
pub const PAUSE: u16 = 30;

/// Wartet in Vielfachen von 10 ms auf Basis eines [`TickTimer`]
pub struct Clock<T> {
    timer: T,
}

impl<T: TickTimer> Clock<T> {
    pub fn new(timer: T) -> Self {
        Self { timer }
    }

    /// Blockiert `ticks` × 10 ms
    ///
    /// Ein altes Flag wird beim Eintritt verworfen, danach werden
    /// `ticks + 1` Überläufe gezählt. Die Wartezeit liegt damit in
    /// `(ticks × 10 ms, (ticks + 1) × 10 ms]`.
    pub fn wait(&mut self, ticks: u16) {
        self.timer.clear_overflow();

        let mut seen: u32 = 0;
        while seen <= u32::from(ticks) {
            if self.timer.overflowed() {
                seen += 1;
                self.timer.clear_overflow();
            }
        }
    }

    pub fn release(self) -> T {
        self.timer
    }
}
