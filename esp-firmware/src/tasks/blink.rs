// Blink Task - toggelt die LED mit der Shared Rate
use embassy_time::{Duration, Timer};
use esp_core::{BlinkOutput, Blinker, RateConsumer};

use crate::hal::GpioBlinkOutput;

/// Blink Logic - Testbare Ablauf-Logik ohne Hardware-Abhängigkeit
///
/// Endloser Pegel-Wechsel Low → High → Low → ...
/// Die Dauer jedes Halbzyklus wird im Moment des Einschlafens frisch
/// aus der Shared Rate gelesen - eine Rate-Änderung durch den
/// Sensor-Task wirkt damit schon im nächsten Halbzyklus.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `O: BlinkOutput` ermöglicht:
/// - Real Hardware (GpioBlinkOutput) im Production-Code
/// - Mock Implementation (MockBlinkOutput) in Host-Tests
///
/// # Parameter
/// - `output`: Blink Output (Hardware oder Mock)
/// - `rate`: Lese-Ende der Shared Rate
pub async fn blink_logic<O: BlinkOutput>(mut output: O, rate: RateConsumer<'static>) {
    let mut blinker = Blinker::new();

    loop {
        // Pegel setzen und Halbzyklus-Dauer sampeln (beides in advance)
        let half_cycle_ms = blinker.advance(&mut output, &rate);
        Timer::after(Duration::from_millis(u64::from(half_cycle_ms))).await;
    }
}

/// Blink Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die
/// testbare `blink_logic()` Funktion auf.
///
/// # Parameter
/// - `led_pin`: GPIO2 Peripheral für die Blink-LED
/// - `rate`: Lese-Ende der Shared Rate
#[embassy_executor::task]
pub async fn blink_task(
    led_pin: esp_hal::peripherals::GPIO2<'static>,
    rate: RateConsumer<'static>,
) {
    let output = GpioBlinkOutput::new(led_pin);
    blink_logic(output, rate).await;
}
