//! Eine Runde: Sequenz vorspielen, Antwort einlesen, prüfen
//!
//! Runde `r` (0-basiert) spielt die ersten `r + 1` Farben der Sequenz.

use crate::clock::{Clock, ONE_SEC, QUART_SEC, TEN_MS};
use crate::display::Display;
use crate::input::{ColorSet, InputReader};
use crate::traits::{ButtonPad, LedBank, TickTimer};
use crate::types::{Difficulty, RoundOutcome, Sequence, WrongPress};

/// Leiht sich Anzeige, Taster und Uhr für die Dauer eines Spiels
pub struct RoundEngine<'a, L, B, T> {
    display: &'a mut Display<L>,
    input: &'a mut InputReader<B>,
    clock: &'a mut Clock<T>,
    sequence: &'a Sequence,
    difficulty: Difficulty,
}

impl<'a, L, B, T> RoundEngine<'a, L, B, T>
where
    L: LedBank,
    B: ButtonPad,
    T: TickTimer,
{
    pub fn new(
        display: &'a mut Display<L>,
        input: &'a mut InputReader<B>,
        clock: &'a mut Clock<T>,
        sequence: &'a Sequence,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            display,
            input,
            clock,
            sequence,
            difficulty,
        }
    }

    /// Spielt Runde `round` komplett durch
    ///
    /// Der erste falsche Taster beendet die Runde sofort mit
    /// [`RoundOutcome::Loss`].
    pub fn play_round(&mut self, round: u8) -> RoundOutcome {
        info!("Round {} of {}", round + 1, self.difficulty.rounds());

        self.clock.wait(ONE_SEC);
        self.play_back(round);
        self.clock.wait(TEN_MS);

        if let Err(wrong) = self.collect_answer(round) {
            warn!("{}", wrong);
            return RoundOutcome::Loss;
        }

        self.clock.wait(TEN_MS);
        self.display.correct(self.clock);
        self.clock.wait(TEN_MS);

        if round + 1 >= self.difficulty.rounds() {
            RoundOutcome::Win
        } else {
            RoundOutcome::Continue
        }
    }

    /// Blinkt die ersten `round + 1` Farben nacheinander
    pub fn play_back(&mut self, round: u8) {
        for &color in self.sequence.prefix(usize::from(round) + 1) {
            self.display.blink(self.clock, color);
        }
    }

    /// Liest genau `round + 1` Tasterdrücke und vergleicht sie mit der Sequenz
    ///
    /// Nach jedem richtigen Druck wird `QUART_SEC` entprellt.
    pub fn collect_answer(&mut self, round: u8) -> Result<(), WrongPress> {
        for (position, &expected) in self
            .sequence
            .prefix(usize::from(round) + 1)
            .iter()
            .enumerate()
        {
            let pressed = self.input.wait_for_press(ColorSet::all());
            if pressed != expected {
                return Err(WrongPress {
                    position,
                    expected,
                    pressed,
                });
            }
            self.clock.wait(QUART_SEC);
        }
        Ok(())
    }
}
