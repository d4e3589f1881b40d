// Projekt-Konfiguration: Konstanten
//
// Die Pin-Zuordnung steht bei board::init.

use rgb::RGB8;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// Farbe der Status-LED bei "richtige Antwort"
pub const STATUS_LED_COLOR: RGB8 = RGB8 {
    r: 0,
    g: LED_BRIGHTNESS,
    b: 0,
};

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Timer Konfiguration
// ============================================================================

/// Periode des Tick-Timers in Millisekunden (ein Tick der Spiel-Uhr)
pub const TICK_PERIOD_MS: u64 = 10;
