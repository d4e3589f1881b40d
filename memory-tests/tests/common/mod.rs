//! Simulator mit virtueller Zeit
//!
//! Implementiert alle Hardware-Traits von memory-core auf einem gemeinsamen
//! Zustand. Zeit vergeht nur, wenn der Code das Timer-Flag pollt (1 ms pro
//! Abfrage, Überlauf alle 10 ms). Alle LED-Flanken werden mit Zeitstempel
//! aufgezeichnet.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use memory_core::{
    ButtonPad, Color, FreeRunningCounter, GameController, Led, LedBank, LedError, TickTimer,
};

/// Virtuelle Millisekunden pro Überlauf des periodischen Timers
pub const TICK_MS: u64 = 10;

/// Haltedauer eines normalen, kurzen Tastendrucks
pub const TAP_MS: u64 = 50;

/// So viele Taster-Abfragen ohne Zeitfortschritt gelten als "hängt"
const STUCK_POLLS: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedEvent {
    pub at_ms: u64,
    pub led: Led,
    pub on: bool,
}

/// Ein Tastendruck aus dem Skript
///
/// Der Druck beginnt bei der ersten Taster-Abfrage, nachdem der vorige
/// losgelassen wurde, und dauert `hold_ms` virtuelle Millisekunden.
#[derive(Debug, Clone, Copy)]
pub struct Press {
    pub color: Color,
    pub hold_ms: u64,
}

pub fn tap(color: Color) -> Press {
    Press {
        color,
        hold_ms: TAP_MS,
    }
}

pub fn hold(color: Color, hold_ms: u64) -> Press {
    Press { color, hold_ms }
}

#[derive(Default)]
struct World {
    now_ms: u64,
    overflow: bool,
    lit: [bool; 5],
    events: Vec<LedEvent>,
    script: VecDeque<Press>,
    /// Gedrückte Farbe und Zeitpunkt des Loslassens
    active: Option<(Color, u64)>,
    presses_started: usize,
    polls_without_time: u32,
    fail_next_write: bool,
}

impl World {
    fn tick(&mut self) {
        self.now_ms += 1;
        if self.now_ms % TICK_MS == 0 {
            self.overflow = true;
        }
        self.polls_without_time = 0;
    }
}

/// Gemeinsamer Simulator-Zustand; Handles für jede Hardware-Rolle
#[derive(Clone, Default)]
pub struct Sim(Rc<RefCell<World>>);

pub type SimController = GameController<SimLeds, SimButtons, SimTimer, SimCounter, SimCounter>;

impl Sim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_presses(presses: impl IntoIterator<Item = Press>) -> Self {
        let sim = Self::new();
        sim.0.borrow_mut().script.extend(presses);
        sim
    }

    pub fn leds(&self) -> SimLeds {
        SimLeds(self.clone())
    }

    pub fn buttons(&self) -> SimButtons {
        SimButtons(self.clone())
    }

    pub fn timer(&self) -> SimTimer {
        SimTimer(self.clone())
    }

    /// Controller mit festen Zählerwerten (erste/zweite Zufallszahl)
    pub fn controller(&self, first: u16, second: u16) -> SimController {
        GameController::new(
            self.leds(),
            self.buttons(),
            self.timer(),
            SimCounter(first),
            SimCounter(second),
        )
    }

    /// Lässt Zeit vergehen, ohne dass jemand das Flag pollt
    pub fn advance(&self, ms: u64) {
        let mut world = self.0.borrow_mut();
        for _ in 0..ms {
            world.tick();
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.0.borrow().now_ms
    }

    pub fn events(&self) -> Vec<LedEvent> {
        self.0.borrow().events.clone()
    }

    pub fn is_lit(&self, led: Led) -> bool {
        self.0.borrow().lit[led as usize]
    }

    pub fn presses_started(&self) -> usize {
        self.0.borrow().presses_started
    }

    pub fn presses_left(&self) -> usize {
        self.0.borrow().script.len()
    }

    /// Der nächste LED-Schreibzugriff schlägt fehl
    pub fn fail_next_write(&self) {
        self.0.borrow_mut().fail_next_write = true;
    }
}

pub struct SimLeds(Sim);

impl LedBank for SimLeds {
    fn set(&mut self, led: Led, on: bool) -> Result<(), LedError> {
        let mut world = self.0.0.borrow_mut();
        if world.fail_next_write {
            world.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        if world.lit[led as usize] != on {
            let at_ms = world.now_ms;
            world.events.push(LedEvent { at_ms, led, on });
            world.lit[led as usize] = on;
        }
        Ok(())
    }

    fn is_on(&self, led: Led) -> bool {
        self.0.0.borrow().lit[led as usize]
    }
}

pub struct SimButtons(Sim);

impl ButtonPad for SimButtons {
    fn is_pressed(&mut self, color: Color) -> bool {
        let mut world = self.0.0.borrow_mut();
        let now = world.now_ms;

        if matches!(world.active, Some((_, released_at)) if now >= released_at) {
            world.active = None;
        }
        if world.active.is_none() {
            if let Some(press) = world.script.pop_front() {
                world.active = Some((press.color, now + press.hold_ms));
                world.presses_started += 1;
            }
        }

        world.polls_without_time += 1;
        if world.polls_without_time > STUCK_POLLS {
            panic!(
                "stuck at {} ms waiting for a press the script does not provide (active: {:?})",
                now, world.active
            );
        }

        matches!(world.active, Some((pressed, _)) if pressed == color)
    }
}

pub struct SimTimer(Sim);

impl TickTimer for SimTimer {
    fn overflowed(&mut self) -> bool {
        let mut world = self.0.0.borrow_mut();
        world.tick();
        world.overflow
    }

    fn clear_overflow(&mut self) {
        self.0.0.borrow_mut().overflow = false;
    }
}

/// Zähler, der immer denselben Wert liefert
pub struct SimCounter(pub u16);

impl FreeRunningCounter for SimCounter {
    fn read(&mut self) -> u16 {
        self.0
    }
}

// ============================================================================
// Trace-Auswertung
// ============================================================================

/// Ein-Flanken in Reihenfolge
///
/// Aufeinanderfolgende Status-Flanken (eine "richtig"-Animation) werden zu
/// einem einzigen `Led::Status` zusammengefasst.
pub fn on_tokens(events: &[LedEvent]) -> Vec<Led> {
    let mut tokens: Vec<Led> = Vec::new();
    for event in events.iter().filter(|e| e.on) {
        if event.led == Led::Status && tokens.last() == Some(&Led::Status) {
            continue;
        }
        tokens.push(event.led);
    }
    tokens
}

/// An-Dauer jedes Pulses einer LED in ms
pub fn on_durations(events: &[LedEvent], led: Led) -> Vec<u64> {
    let mut durations = Vec::new();
    let mut since = None;
    for event in events.iter().filter(|e| e.led == led) {
        match (event.on, since) {
            (true, _) => since = Some(event.at_ms),
            (false, Some(start)) => {
                durations.push(event.at_ms - start);
                since = None;
            }
            (false, None) => {}
        }
    }
    durations
}

pub fn count_events(events: &[LedEvent], led: Led) -> usize {
    events.iter().filter(|e| e.led == led).count()
}

/// Start-Aufforderung, Schwierigkeits-Aufforderung, Bestätigung auf `choice`
pub fn expected_prelude(choice: Color) -> Vec<Led> {
    let mut tokens = vec![Led::Red, Led::Green, Led::Blue, Led::Yellow];
    tokens.extend([choice.led(); 4]);
    tokens
}

/// Vorspielen von Runde `round` bei einer Sequenz aus lauter `color`
pub fn expected_playback(color: Color, round: usize) -> Vec<Led> {
    vec![color.led(); round + 1]
}

pub fn expected_win() -> Vec<Led> {
    [Led::Red, Led::Green, Led::Blue, Led::Yellow].repeat(3)
}

pub fn expected_loss() -> Vec<Led> {
    vec![Led::Red; 3]
}
