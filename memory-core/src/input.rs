//! Taster-Abfrage (Polling, kein Interrupt)
//!
//! Entprellt wird vom Aufrufer: nach jedem akzeptierten Druck
//! `QUART_SEC` warten, bevor erneut gepollt wird.

use bitflags::bitflags;

use crate::traits::ButtonPad;
use crate::types::Color;

bitflags! {
    /// Menge von Farben, auf die [`InputReader::wait_for_press`] reagiert
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ColorSet: u8 {
        const RED    = 1;
        const GREEN  = 1 << 1;
        const BLUE   = 1 << 2;
        const YELLOW = 1 << 3;
    }
}

impl ColorSet {
    /// Grün, Blau, Gelb (die sichtbaren Schwierigkeits-Optionen)
    pub const PROMPTED_DIFFICULTIES: ColorSet = ColorSet::GREEN
        .union(ColorSet::BLUE)
        .union(ColorSet::YELLOW);

    pub const fn contains_color(self, color: Color) -> bool {
        self.contains(ColorSet::from_color(color))
    }

    pub const fn from_color(color: Color) -> ColorSet {
        match color {
            Color::Red => ColorSet::RED,
            Color::Green => ColorSet::GREEN,
            Color::Blue => ColorSet::BLUE,
            Color::Yellow => ColorSet::YELLOW,
        }
    }
}

impl From<Color> for ColorSet {
    fn from(color: Color) -> Self {
        ColorSet::from_color(color)
    }
}

pub struct InputReader<B> {
    buttons: B,
}

impl<B: ButtonPad> InputReader<B> {
    pub fn new(buttons: B) -> Self {
        Self { buttons }
    }

    /// Erste gedrückte Farbe in Scan-Reihenfolge (Rot, Grün, Blau, Gelb)
    pub fn poll_press(&mut self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.buttons.is_pressed(color))
    }

    /// Pollt ohne Timeout, bis eine Farbe aus `accepted` gedrückt ist
    ///
    /// Nicht akzeptierte Taster werden ignoriert, auch wenn sie im Scan
    /// vorher kommen. Deshalb eigener gefilterter Scan statt `poll_press`,
    /// das einen früheren, nicht akzeptierten Taster melden würde.
    pub fn wait_for_press(&mut self, accepted: ColorSet) -> Color {
        loop {
            let hit = Color::ALL
                .into_iter()
                .filter(|&color| accepted.contains_color(color))
                .find(|&color| self.buttons.is_pressed(color));

            if let Some(color) = hit {
                debug!("Button pressed: {}", color);
                return color;
            }
        }
    }

    pub fn release(self) -> B {
        self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feste Menge gedrückter Farben
    struct Held(ColorSet);

    impl ButtonPad for Held {
        fn is_pressed(&mut self, color: Color) -> bool {
            self.0.contains_color(color)
        }
    }

    #[test]
    fn test_poll_press_none() {
        let mut reader = InputReader::new(Held(ColorSet::empty()));
        assert_eq!(reader.poll_press(), None);
    }

    #[test]
    fn test_poll_press_scan_priority() {
        let mut reader = InputReader::new(Held(ColorSet::BLUE | ColorSet::GREEN));
        assert_eq!(reader.poll_press(), Some(Color::Green));

        let mut reader = InputReader::new(Held(ColorSet::all()));
        assert_eq!(reader.poll_press(), Some(Color::Red));
    }

    #[test]
    fn test_wait_for_press_skips_unaccepted() {
        let mut reader = InputReader::new(Held(ColorSet::RED | ColorSet::YELLOW));
        let color = reader.wait_for_press(ColorSet::PROMPTED_DIFFICULTIES);
        assert_eq!(color, Color::Yellow);
    }

    #[test]
    fn test_color_set_from_color() {
        for color in Color::ALL {
            let set = ColorSet::from(color);
            assert!(set.contains_color(color));
            assert_eq!(set.bits().count_ones(), 1);
        }
    }
}
