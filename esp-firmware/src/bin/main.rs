// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_temp_blinker::BlinkRate;
use esp_temp_blinker::config::DEFAULT_BLINK_RATE_MS;
use esp_temp_blinker::tasks::{blink_task, sensor_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

// Shared Rate: die EINE geteilte Variable der beiden Tasks.
// Sensor-Task bekommt das Schreib-Ende, Blink-Task das Lese-Ende.
// Bis zur ersten Messung (oder für immer, wenn keine Sensoren da
// sind) blinkt die LED mit der Default-Rate.
static BLINK_RATE: BlinkRate = BlinkRate::new(DEFAULT_BLINK_RATE_MS);

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt die
/// beiden Tasks. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Shared Rate in Producer- und Consumer-Handle aufteilen
    let (rate_producer, rate_consumer) = BLINK_RATE.split();

    // Spawn Blink Task (Lese-Ende der Rate)
    spawner
        .spawn(blink_task(peripherals.GPIO2, rate_consumer))
        .unwrap();

    // Spawn Sensor Task (Schreib-Ende der Rate)
    spawner
        .spawn(sensor_task(peripherals.GPIO4, rate_producer))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
