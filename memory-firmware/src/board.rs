// Board-Initialisierung: verbindet ESP32-C6 Peripherals mit memory-core

use defmt::info;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::peripherals::Peripherals;
use esp_hal::rtc_cntl::Rtc;
use esp_hal::time::Duration;
use memory_core::{ActiveLowButtons, GameController, PinLeds};

use crate::config::{RMT_CLOCK_MHZ, STATUS_LED_COLOR, TICK_PERIOD_MS};
use crate::hal::{RmtLedWriter, RtcSlowCounter, StatusLedBuffer, SysTimerCounter, SysTimerTick};

/// Vier GPIO-LEDs plus WS2812 Status-LED
pub type BoardLeds<'a> = PinLeds<Output<'a>, Output<'a>, Output<'a>, Output<'a>, RmtLedWriter<'a>>;

/// Vier Taster an Pull-up Eingängen
pub type BoardButtons<'a> = ActiveLowButtons<Input<'a>, Input<'a>, Input<'a>, Input<'a>>;

/// Das komplette Spiel auf dem DevKit
pub type Board<'a> =
    GameController<BoardLeds<'a>, BoardButtons<'a>, SysTimerTick, RtcSlowCounter<'a>, SysTimerCounter>;

/// Initialisiert alle für das Spiel benötigten Peripherals
///
/// Verdrahtung (ESP32-C6-DevKitC-1):
///
/// | Farbe  | LED (High = an, Vorwiderstand nach GND) | Taster (gegen GND) |
/// |--------|-----------------------------------------|--------------------|
/// | Rot    | GPIO0                                   | GPIO4              |
/// | Grün   | GPIO1                                   | GPIO5              |
/// | Blau   | GPIO2                                   | GPIO6              |
/// | Gelb   | GPIO3                                   | GPIO7              |
/// | Status | GPIO8 (Onboard WS2812 über RMT)         | -                  |
///
/// - RTC Watchdog wird abgeschaltet und bleibt aus
/// - LEDs starten aus, Taster mit internem Pull-up
/// - Status-LED über RMT (Buffer kommt aus main)
///
/// # Parameter
/// - `peripherals`: alle Peripherals aus `esp_hal::init`
/// - `status_buffer`: RMT-Buffer für die Status-LED (smart_led_buffer!(1))
pub fn init(peripherals: Peripherals, status_buffer: &mut StatusLedBuffer) -> Board<'_> {
    // Watchdog aus: das Spiel wartet beliebig lange auf Tastendrücke
    let mut rtc = Rtc::new(peripherals.LPWR);
    rtc.rwdt.disable();

    let status = RmtLedWriter::new(
        peripherals.GPIO8,
        peripherals.RMT,
        RMT_CLOCK_MHZ,
        status_buffer,
    );
    let leds = PinLeds::new(
        Output::new(peripherals.GPIO0, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO1, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO3, Level::Low, OutputConfig::default()),
        status,
        STATUS_LED_COLOR,
    );

    let buttons = ActiveLowButtons::new(
        Input::new(peripherals.GPIO4, pull_up()),
        Input::new(peripherals.GPIO5, pull_up()),
        Input::new(peripherals.GPIO6, pull_up()),
        Input::new(peripherals.GPIO7, pull_up()),
    );

    let tick = SysTimerTick::new(Duration::from_millis(TICK_PERIOD_MS));
    info!("Board initialized, tick period {} ms", TICK_PERIOD_MS);

    GameController::new(
        leds,
        buttons,
        tick,
        RtcSlowCounter::new(rtc),
        SysTimerCounter,
    )
}

fn pull_up() -> InputConfig {
    InputConfig::default().with_pull(Pull::Up)
}
