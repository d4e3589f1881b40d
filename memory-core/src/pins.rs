//! Board-Adapter auf Basis von `embedded-hal` Pins
//!
//! Verbinden die Spiel-Traits mit beliebigen GPIO-Implementierungen.
//! Auf dem ESP32-C6 sind das `esp_hal::gpio::{Input, Output}`, im Test Mocks.

use embedded_hal::digital::{InputPin, OutputPin};
use rgb::RGB8;

use crate::traits::{ButtonPad, LedBank, LedError, SmartLedWriter};
use crate::types::{Color, Led};

/// Vier Spiel-LEDs an GPIO-Ausgängen plus Status-LED als SmartLED
///
/// Der Zustand jeder LED wird gespiegelt, damit `toggle` ohne
/// Rücklesen der Hardware auskommt.
pub struct PinLeds<R, G, B, Y, S> {
    red: R,
    green: G,
    blue: B,
    yellow: Y,
    status: S,
    status_color: RGB8,
    lit: [bool; 5],
}

impl<R, G, B, Y, S> PinLeds<R, G, B, Y, S>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    Y: OutputPin,
    S: SmartLedWriter,
{
    /// # Parameter
    /// - `red`..`yellow`: Ausgänge der Spiel-LEDs (High = an)
    /// - `status`: SmartLED Writer für die Status-LED
    /// - `status_color`: Farbe der Status-LED im an-Zustand
    pub fn new(red: R, green: G, blue: B, yellow: Y, status: S, status_color: RGB8) -> Self {
        Self {
            red,
            green,
            blue,
            yellow,
            status,
            status_color,
            lit: [false; 5],
        }
    }

    /// Gibt Pins und Status-Writer wieder frei
    pub fn release(self) -> (R, G, B, Y, S) {
        (self.red, self.green, self.blue, self.yellow, self.status)
    }

    fn drive<P: OutputPin>(pin: &mut P, on: bool) -> Result<(), LedError> {
        let result = if on { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| LedError::WriteFailed)
    }
}

impl<R, G, B, Y, S> LedBank for PinLeds<R, G, B, Y, S>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    Y: OutputPin,
    S: SmartLedWriter,
{
    fn set(&mut self, led: Led, on: bool) -> Result<(), LedError> {
        match led {
            Led::Red => Self::drive(&mut self.red, on)?,
            Led::Green => Self::drive(&mut self.green, on)?,
            Led::Blue => Self::drive(&mut self.blue, on)?,
            Led::Yellow => Self::drive(&mut self.yellow, on)?,
            Led::Status => {
                let color = if on {
                    self.status_color
                } else {
                    RGB8::default()
                };
                self.status.write(color)?;
            }
        }
        self.lit[led as usize] = on;
        Ok(())
    }

    fn is_on(&self, led: Led) -> bool {
        self.lit[led as usize]
    }
}

/// Vier Taster an Pull-up Eingängen (gedrückt = Low)
///
/// Lesefehler eines Pins zählen als "nicht gedrückt".
pub struct ActiveLowButtons<R, G, B, Y> {
    red: R,
    green: G,
    blue: B,
    yellow: Y,
}

impl<R, G, B, Y> ActiveLowButtons<R, G, B, Y>
where
    R: InputPin,
    G: InputPin,
    B: InputPin,
    Y: InputPin,
{
    pub fn new(red: R, green: G, blue: B, yellow: Y) -> Self {
        Self {
            red,
            green,
            blue,
            yellow,
        }
    }

    /// Gibt die Pins wieder frei
    pub fn release(self) -> (R, G, B, Y) {
        (self.red, self.green, self.blue, self.yellow)
    }
}

impl<R, G, B, Y> ButtonPad for ActiveLowButtons<R, G, B, Y>
where
    R: InputPin,
    G: InputPin,
    B: InputPin,
    Y: InputPin,
{
    fn is_pressed(&mut self, color: Color) -> bool {
        // Jeder Pin hat seinen eigenen Fehlertyp, daher pro Arm auflösen
        match color {
            Color::Red => self.red.is_low().unwrap_or(false),
            Color::Green => self.green.is_low().unwrap_or(false),
            Color::Blue => self.blue.is_low().unwrap_or(false),
            Color::Yellow => self.yellow.is_low().unwrap_or(false),
        }
    }
}
