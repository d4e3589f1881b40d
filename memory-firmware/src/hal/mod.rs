// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Hardware-Traits aus memory-core für den ESP32-C6.

pub mod led_writer;
pub mod timers;

pub use led_writer::{LED_BUFFER_SIZE, RmtLedWriter, StatusLedBuffer};
pub use timers::{RtcSlowCounter, SysTimerCounter, SysTimerTick};
