//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{Color, SEQUENCE_LEN, Sample16, Sequence};

/// Erzeugt aus zwei Zählerwerten die 16-stellige Farbsequenz
///
/// Bit `i` jedes Werts landet (bit-gespiegelt) an Position `15 - i`.
/// Pro Position ergibt `a + 3 * b` den Code 0, 1, 3 oder 4, also
/// Rot, Grün, Blau oder Gelb. Ohne Division und ohne Tabelle.
///
/// # Beispiele
///
/// ```
/// # use memory_core::{Color, build_sequence};
/// let seq = build_sequence(0x0000, 0xFFFF);
/// assert!(seq.iter().all(|c| c == Color::Blue));
///
/// let seq = build_sequence(0x8000, 0x0000);
/// assert_eq!(seq[0], Color::Green); // MSB → erste Position
/// assert_eq!(seq[1], Color::Red);
/// ```
pub fn build_sequence(first: Sample16, second: Sample16) -> Sequence {
    let mut first_bits = [0u8; SEQUENCE_LEN];
    let mut second_bits = [0u8; SEQUENCE_LEN];

    for i in 0..SEQUENCE_LEN {
        first_bits[15 - i] = ((first >> i) & 0x01) as u8;
        second_bits[15 - i] = ((second >> i) & 0x01) as u8;
    }

    let mut colors = [Color::Red; SEQUENCE_LEN];
    for (i, slot) in colors.iter_mut().enumerate() {
        *slot = symbol(first_bits[i], second_bits[i]);
    }

    Sequence::new(colors)
}

/// Kombiniert je ein Bit beider Werte zu einer Farbe
fn symbol(a: u8, b: u8) -> Color {
    match a + 3 * b {
        0 => Color::Red,
        1 => Color::Green,
        3 => Color::Blue,
        // a, b ∈ {0, 1} → nur noch 4 möglich
        _ => Color::Yellow,
    }
}
