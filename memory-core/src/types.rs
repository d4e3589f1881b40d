//! Core Types für das Memory-Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Momentaufnahme eines freilaufenden 16-Bit Hardware-Zählers
pub type Sample16 = u16;

/// Länge jeder Farbsequenz (unabhängig vom Schwierigkeitsgrad)
pub const SEQUENCE_LEN: usize = 16;

/// Anzahl der Toggles bei Bestätigungs-Animationen (Status-LED, Schwierigkeit)
pub const CONFIRM_TOGGLES: usize = 8;

/// Eine der vier Spielfarben
///
/// Jede Farbe hat genau eine LED und einen Taster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// Alle Farben in Scan-Reihenfolge der Taster.
    ///
    /// Die Reihenfolge ist gleichzeitig die Priorität bei mehreren
    /// gleichzeitig gedrückten Tastern.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Interner Symbol-Code aus dem Sequenz-Generator (0, 1, 3 oder 4)
    pub const fn code(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 3,
            Color::Yellow => 4,
        }
    }

    /// Umkehrung von [`Color::code`]. Codes 2 und 5..=255 sind ungültig.
    pub const fn from_code(code: u8) -> Option<Color> {
        match code {
            0 => Some(Color::Red),
            1 => Some(Color::Green),
            3 => Some(Color::Blue),
            4 => Some(Color::Yellow),
            _ => None,
        }
    }

    /// Anzeigename (für Logs)
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Rot",
            Color::Green => "Grün",
            Color::Blue => "Blau",
            Color::Yellow => "Gelb",
        }
    }

    /// Die LED, die zu dieser Farbe gehört
    pub const fn led(self) -> Led {
        match self {
            Color::Red => Led::Red,
            Color::Green => Led::Green,
            Color::Blue => Led::Blue,
            Color::Yellow => Led::Yellow,
        }
    }
}

/// Ausgangsleitungen des Boards: vier Spiel-LEDs plus Status-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    Red,
    Green,
    Blue,
    Yellow,
    /// Sekundäre LED für "richtige Antwort"
    Status,
}

impl Led {
    pub const ALL: [Led; 5] = [Led::Red, Led::Green, Led::Blue, Led::Yellow, Led::Status];
}

impl From<Color> for Led {
    fn from(color: Color) -> Self {
        color.led()
    }
}

/// Schwierigkeitsgrad = Anzahl der Runden bis zum Sieg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    /// Versteckte Option (Rot in der Auswahl)
    Extreme,
}

impl Difficulty {
    /// Anzahl der zu gewinnenden Runden
    pub const fn rounds(self) -> u8 {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Normal => 10,
            Difficulty::Hard => 12,
            Difficulty::Extreme => 16,
        }
    }

    /// Ordnet den in der Auswahl gedrückten Taster einem Schwierigkeitsgrad zu
    pub const fn from_selection(color: Color) -> Difficulty {
        match color {
            Color::Green => Difficulty::Easy,
            Color::Blue => Difficulty::Normal,
            Color::Yellow => Difficulty::Hard,
            Color::Red => Difficulty::Extreme,
        }
    }

    /// LED, auf der die Auswahl bestätigt wird
    pub const fn confirm_color(self) -> Color {
        match self {
            Difficulty::Easy => Color::Green,
            Difficulty::Normal => Color::Blue,
            Difficulty::Hard => Color::Yellow,
            Difficulty::Extreme => Color::Red,
        }
    }
}

/// Zustände der Spiel-Zustandsmaschine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    Idle,
    DifficultySelect,
    Play,
    Win,
    Loss,
}

/// Ergebnis einer einzelnen Runde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundOutcome {
    /// Runde bestanden, weitere Runden folgen
    Continue,
    /// Letzte Runde bestanden
    Win,
    /// Falscher Taster gedrückt
    Loss,
}

/// Ergebnis eines vollständigen Spiels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameOutcome {
    Win,
    Loss,
}

impl From<GameOutcome> for GameState {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Win => GameState::Win,
            GameOutcome::Loss => GameState::Loss,
        }
    }
}

/// Falscher Taster während der Antwort-Eingabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongPress {
    /// Index in der Sequenz, an dem die Eingabe falsch war
    pub position: usize,
    pub expected: Color,
    pub pressed: Color,
}

/// Die 16 Farben eines Spiels
///
/// Wird einmal pro Spiel vom Sequenz-Generator erzeugt und danach nur
/// noch gelesen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence([Color; SEQUENCE_LEN]);

impl Sequence {
    pub const fn new(colors: [Color; SEQUENCE_LEN]) -> Self {
        Self(colors)
    }

    /// Die ersten `count` Farben (geclampt auf die Sequenzlänge)
    pub fn prefix(&self, count: usize) -> &[Color] {
        &self.0[..count.min(SEQUENCE_LEN)]
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    pub const fn len(&self) -> usize {
        SEQUENCE_LEN
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn as_array(&self) -> &[Color; SEQUENCE_LEN] {
        &self.0
    }
}

impl core::ops::Index<usize> for Sequence {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Color {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for WrongPress {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "WrongPress {{ position: {}, expected: {}, pressed: {} }}",
            self.position,
            self.expected,
            self.pressed
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Sequence {
    fn format(&self, fmt: defmt::Formatter) {
        // Kompakt als Code-Ziffern, z.B. "0134..."
        defmt::write!(fmt, "Sequence [");
        for color in self.iter() {
            defmt::write!(fmt, "{=u8}", color.code());
        }
        defmt::write!(fmt, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_outcome_maps_to_end_state() {
        assert_eq!(GameState::from(GameOutcome::Win), GameState::Win);
        assert_eq!(GameState::from(GameOutcome::Loss), GameState::Loss);
    }

    #[test]
    fn test_color_codes_skip_two() {
        let codes = Color::ALL.map(Color::code);
        assert_eq!(codes, [0, 1, 3, 4]);
        assert_eq!(Color::from_code(2), None);
        assert_eq!(Color::from_code(5), None);
    }

    #[test]
    fn test_color_code_inverse() {
        for color in Color::ALL {
            assert_eq!(Color::from_code(color.code()), Some(color));
        }
    }

    #[test]
    fn test_difficulty_rounds() {
        assert_eq!(Difficulty::Easy.rounds(), 8);
        assert_eq!(Difficulty::Normal.rounds(), 10);
        assert_eq!(Difficulty::Hard.rounds(), 12);
        assert_eq!(Difficulty::Extreme.rounds(), 16);
    }

    #[test]
    fn test_difficulty_selection_and_confirm_led() {
        for color in Color::ALL {
            let difficulty = Difficulty::from_selection(color);
            assert_eq!(difficulty.confirm_color(), color);
        }
        assert_eq!(Difficulty::from_selection(Color::Red), Difficulty::Extreme);
    }

    #[test]
    fn test_sequence_prefix_is_clamped() {
        let seq = Sequence::new([Color::Blue; SEQUENCE_LEN]);
        assert_eq!(seq.prefix(3).len(), 3);
        assert_eq!(seq.prefix(40).len(), SEQUENCE_LEN);
        assert_eq!(seq.get(16), None);
    }
}
