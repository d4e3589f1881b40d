//! Spiel-Zustandsmaschine
//!
//! Idle → DifficultySelect → Play → Win/Loss → Idle
//!
//! Der Controller besitzt alle Komponenten und damit die komplette Hardware.
//! Zwischen zwei Spielen wird kein Zustand übernommen.

use crate::clock::{Clock, QUART_SEC};
use crate::display::Display;
use crate::entropy::EntropySource;
use crate::input::{ColorSet, InputReader};
use crate::logic::build_sequence;
use crate::round::RoundEngine;
use crate::traits::{ButtonPad, FreeRunningCounter, LedBank, TickTimer};
use crate::types::{Color, Difficulty, GameOutcome, GameState, RoundOutcome, Sample16};

/// Zusammenfassung eines gespielten Spiels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameReport {
    pub difficulty: Difficulty,
    pub outcome: GameOutcome,
    /// Anzahl vollständig richtig beantworteter Runden
    pub rounds_won: u8,
    /// Erster Zufallswert (langsamer Zähler)
    pub first: Sample16,
    /// Zweiter Zufallswert (schneller Zähler)
    pub second: Sample16,
}

pub struct GameController<L, B, T, S, F> {
    display: Display<L>,
    input: InputReader<B>,
    clock: Clock<T>,
    entropy: EntropySource<S, F>,
    state: GameState,
}

impl<L, B, T, S, F> GameController<L, B, T, S, F>
where
    L: LedBank,
    B: ButtonPad,
    T: TickTimer,
    S: FreeRunningCounter,
    F: FreeRunningCounter,
{
    /// Übernimmt die Hardware
    ///
    /// # Parameter
    /// - `leds`: die fünf LED-Ausgänge
    /// - `buttons`: die vier Taster
    /// - `timer`: periodischer 10 ms Timer
    /// - `slow_counter`: freilaufender Zähler mit niederfrequentem Takt
    /// - `fast_counter`: freilaufender Zähler mit hochfrequentem Takt
    pub fn new(leds: L, buttons: B, timer: T, slow_counter: S, fast_counter: F) -> Self {
        let mut display = Display::new(leds);
        display.all_off();

        Self {
            display,
            input: InputReader::new(buttons),
            clock: Clock::new(timer),
            entropy: EntropySource::new(slow_counter, fast_counter),
            state: GameState::Idle,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Endlosschleife: ein Spiel nach dem anderen
    pub fn run(&mut self) -> ! {
        loop {
            let report = self.play_game();
            info!("Game finished: {}", report);
        }
    }

    /// Ein komplettes Spiel von Idle bis zurück nach Idle
    pub fn play_game(&mut self) -> GameReport {
        self.transition(GameState::Idle);
        let first = self.await_start();
        self.clock.wait(QUART_SEC);

        self.transition(GameState::DifficultySelect);
        let difficulty = self.select_difficulty();
        let second = self.entropy.sample_second();
        debug!("Entropy samples: {=u16:#x} {=u16:#x}", first, second);

        let sequence = build_sequence(first, second);
        debug!("{}", sequence);

        self.transition(GameState::Play);
        let mut rounds_won = 0;
        let outcome = {
            let mut engine = RoundEngine::new(
                &mut self.display,
                &mut self.input,
                &mut self.clock,
                &sequence,
                difficulty,
            );

            loop {
                match engine.play_round(rounds_won) {
                    RoundOutcome::Continue => rounds_won += 1,
                    RoundOutcome::Win => {
                        rounds_won += 1;
                        break GameOutcome::Win;
                    }
                    RoundOutcome::Loss => break GameOutcome::Loss,
                }
            }
        };

        self.transition(outcome.into());
        match outcome {
            GameOutcome::Win => self.display.win(&mut self.clock),
            GameOutcome::Loss => self.display.loss(&mut self.clock),
        }
        self.transition(GameState::Idle);

        GameReport {
            difficulty,
            outcome,
            rounds_won,
            first,
            second,
        }
    }

    /// Rot leuchtet, bis Start (Rot) gedrückt wird; liefert den ersten Zufallswert
    fn await_start(&mut self) -> Sample16 {
        self.display.idle_prompt();
        self.input.wait_for_press(ColorSet::RED);
        self.display.set(Color::Red.led(), false);

        self.entropy.sample_first()
    }

    /// Grün/Blau/Gelb leuchten; Rot ist die versteckte Option EXTREME
    fn select_difficulty(&mut self) -> Difficulty {
        self.display.difficulty_prompt();
        let pressed = self.input.wait_for_press(ColorSet::all());
        self.display.clear_difficulty_prompt();

        let difficulty = Difficulty::from_selection(pressed);
        info!(
            "Difficulty selected: {} ({} rounds)",
            difficulty,
            difficulty.rounds()
        );
        self.display.confirm(&mut self.clock, difficulty.confirm_color());

        difficulty
    }

    fn transition(&mut self, next: GameState) {
        if self.state != next {
            info!("State: {} -> {}", self.state, next);
        }
        self.state = next;
    }
}
