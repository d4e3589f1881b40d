// Zeitbasis und Zufallsquellen
//
// - SysTimerTick: periodisches 10 ms Überlauf-Flag auf Basis des SYSTIMER
// - SysTimerCounter: schneller freilaufender Zähler (SYSTIMER, µs-Auflösung)
// - RtcSlowCounter: langsamer freilaufender Zähler (RTC, Slow Clock)
//
// Kein Interrupt wird freigeschaltet; alles wird gepollt.

use esp_hal::rtc_cntl::Rtc;
use esp_hal::time::{Duration, Instant};
use memory_core::{FreeRunningCounter, TickTimer};

/// Periodisches Überlauf-Flag
///
/// Die Periodengrenzen liegen fest im Raster ab Erzeugung. Das Flag ist
/// gesetzt, sobald die nächste Grenze erreicht ist; Löschen springt auf die
/// erste Grenze in der Zukunft (verpasste Perioden fallen zusammen, wie bei
/// einem Hardware-Flag).
pub struct SysTimerTick {
    period: Duration,
    next: Instant,
}

impl SysTimerTick {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }
}

impl TickTimer for SysTimerTick {
    fn overflowed(&mut self) -> bool {
        Instant::now() >= self.next
    }

    fn clear_overflow(&mut self) {
        let now = Instant::now();
        while self.next <= now {
            self.next = self.next + self.period;
        }
    }
}

/// Untere 16 Bit der SYSTIMER-Zeit in µs (hochfrequent)
pub struct SysTimerCounter;

impl FreeRunningCounter for SysTimerCounter {
    fn read(&mut self) -> u16 {
        Instant::now().duration_since_epoch().as_micros() as u16
    }
}

/// Untere 16 Bit der RTC-Zeit (läuft mit dem RC Slow Clock)
pub struct RtcSlowCounter<'d> {
    rtc: Rtc<'d>,
}

impl<'d> RtcSlowCounter<'d> {
    pub fn new(rtc: Rtc<'d>) -> Self {
        Self { rtc }
    }
}

impl FreeRunningCounter for RtcSlowCounter<'_> {
    fn read(&mut self) -> u16 {
        self.rtc.time_since_power_up().as_micros() as u16
    }
}
