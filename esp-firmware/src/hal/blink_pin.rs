// Blink-Pin - implementiert den BlinkOutput Trait über einen GPIO
//
// Push/Pull Output, direkt vom esp-hal. Keine weitere Logik -
// der Pegel-Ablauf lebt in esp-core::Blinker.

use esp_core::{BlinkOutput, OutputError};
use esp_hal::gpio::{Level, Output, OutputConfig};

/// Real Hardware Blink Output
///
/// Treibt die LED auf einem festen logischen Pin (Push/Pull).
pub struct GpioBlinkOutput {
    pin: Output<'static>,
}

impl GpioBlinkOutput {
    /// Erstellt den Output auf dem LED-GPIO, Startpegel Low
    ///
    /// # Parameter
    /// - `led_pin`: GPIO2 Peripheral für die Blink-LED
    pub fn new(led_pin: esp_hal::peripherals::GPIO2<'static>) -> Self {
        let pin = Output::new(led_pin, Level::Low, OutputConfig::default());
        Self { pin }
    }
}

impl BlinkOutput for GpioBlinkOutput {
    fn set_level(&mut self, high: bool) -> Result<(), OutputError> {
        // GPIO-Writes können auf dem ESP32-C6 nicht fehlschlagen -
        // der Result ist Teil des Trait-Vertrags (Mocks simulieren Fehler)
        if high {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        Ok(())
    }
}
