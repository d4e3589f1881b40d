//! LED-Ausgabe und Animationen
//!
//! Alle Operationen sind synchron: sie kehren erst zurück, wenn die
//! Animation komplett abgelaufen ist.

use crate::clock::{BLINK, CENTI_SEC, Clock, HALF_SEC, ONE_SEC, PAUSE, QUART_SEC};
use crate::traits::{LedBank, TickTimer};
use crate::types::{CONFIRM_TOGGLES, Color, Led};

/// Wie oft Sieg- und Verlust-Animation wiederholt werden
const ANIMATION_REPEATS: usize = 3;

pub struct Display<L> {
    leds: L,
}

impl<L: LedBank> Display<L> {
    pub fn new(leds: L) -> Self {
        Self { leds }
    }

    /// Schaltet eine LED. Schreibfehler werden geloggt, das Spiel läuft weiter.
    pub fn set(&mut self, led: Led, on: bool) {
        if let Err(_e) = self.leds.set(led, on) {
            error!("Failed to write LED {}", led);
        }
    }

    fn toggle(&mut self, led: Led) {
        if let Err(_e) = self.leds.toggle(led) {
            error!("Failed to toggle LED {}", led);
        }
    }

    pub fn all_off(&mut self) {
        for led in Led::ALL {
            self.set(led, false);
        }
    }

    /// Ein Element der Sequenz abspielen: BLINK an, aus, PAUSE warten
    pub fn blink<T: TickTimer>(&mut self, clock: &mut Clock<T>, color: Color) {
        {
            let _lit = LitLed::new(&mut self.leds, color.led());
            clock.wait(BLINK);
        }
        clock.wait(PAUSE);
    }

    /// "Richtige Antwort": Status-LED 8x umschalten
    pub fn correct<T: TickTimer>(&mut self, clock: &mut Clock<T>) {
        self.toggle_times(clock, Led::Status);
    }

    /// Bestätigt die gewählte Schwierigkeit auf der LED der Farbe
    pub fn confirm<T: TickTimer>(&mut self, clock: &mut Clock<T>, color: Color) {
        self.toggle_times(clock, color.led());
    }

    fn toggle_times<T: TickTimer>(&mut self, clock: &mut Clock<T>, led: Led) {
        for _ in 0..CONFIRM_TOGGLES {
            self.toggle(led);
            clock.wait(CENTI_SEC);
        }
    }

    /// Sieg: 3x Rot, Grün, Blau, Gelb je 100 ms an / 100 ms aus
    pub fn win<T: TickTimer>(&mut self, clock: &mut Clock<T>) {
        for _ in 0..ANIMATION_REPEATS {
            for color in Color::ALL {
                self.set(color.led(), true);
                clock.wait(CENTI_SEC);
                self.set(color.led(), false);
                clock.wait(CENTI_SEC);
            }
        }
    }

    /// Verloren: 3x Rot langsam blinken, dann eine Sekunde Ruhe
    pub fn loss<T: TickTimer>(&mut self, clock: &mut Clock<T>) {
        for _ in 0..ANIMATION_REPEATS {
            self.set(Led::Red, true);
            clock.wait(HALF_SEC);
            self.set(Led::Red, false);
            clock.wait(QUART_SEC);
        }
        clock.wait(ONE_SEC);
    }

    /// "Start drücken": Rot leuchtet
    pub fn idle_prompt(&mut self) {
        self.set(Led::Red, true);
    }

    /// Schwierigkeit wählen: Grün, Blau und Gelb leuchten
    pub fn difficulty_prompt(&mut self) {
        self.set(Led::Green, true);
        self.set(Led::Blue, true);
        self.set(Led::Yellow, true);
    }

    pub fn clear_difficulty_prompt(&mut self) {
        self.set(Led::Green, false);
        self.set(Led::Blue, false);
        self.set(Led::Yellow, false);
    }

    pub fn release(self) -> L {
        self.leds
    }
}

/// Hält eine LED an, solange der Guard lebt
///
/// Beim Drop wird die LED immer ausgeschaltet, auch bei vorzeitigem Verlassen.
struct LitLed<'a, L: LedBank> {
    leds: &'a mut L,
    led: Led,
}

impl<'a, L: LedBank> LitLed<'a, L> {
    fn new(leds: &'a mut L, led: Led) -> Self {
        if let Err(_e) = leds.set(led, true) {
            error!("Failed to switch on LED {}", led);
        }
        Self { leds, led }
    }
}

impl<L: LedBank> Drop for LitLed<'_, L> {
    fn drop(&mut self) {
        if let Err(_e) = self.leds.set(self.led, false) {
            error!("Failed to switch off LED {}", self.led);
        }
    }
}
