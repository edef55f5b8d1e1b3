// Sensor Task - Discovery und periodischer Conversion/Read-Zyklus
use defmt::{error, info};
use embassy_time::{Duration, Ticker, Timer};
use esp_core::{
    RateProducer, SensorBus, blink_interval_ms, build_device_handles, discover_devices,
    read_all_devices,
};

use crate::config::{SAMPLE_PERIOD_MS, SENSOR_RESOLUTION, STARTUP_DELAY_MS};
use crate::hal::Ds18b20Bus;

/// Sensor Logic - Testbare Ablauf-Logik ohne Hardware-Abhängigkeit
///
/// Einmalig beim Start:
/// - Stabilisierungs-Delay, CRC einschalten
/// - Geräte-Discovery (lineare Suche, max. 8 Geräte)
/// - Single-Device: READ ROM Gegenprobe + Solo-Adressierung
/// - Geräte initialisieren (Auflösung, Adressierungsmodus)
///
/// Danach endlos, mit absoluter Deadline (Ticker, kein Drift):
/// - Conversion-Broadcast an alle Geräte gleichzeitig
/// - Warten (Conversion-Dauer der konfigurierten Auflösung)
/// - Alle Geräte lesen, Fehler pro Gerät zählen
/// - Rate aus dem LETZTEN Reading ableiten und publishen
///
/// Ohne Geräte endet die Funktion nach der Meldung - der Blink-Task
/// läuft dann dauerhaft mit der Default-Rate weiter.
///
/// # Parameter
/// - `bus`: Sensor-Bus (Hardware oder Mock)
/// - `rate`: Schreib-Ende der Shared Rate
pub async fn sensor_logic<B: SensorBus>(mut bus: B, rate: RateProducer<'static>) {
    // Stabile Readings brauchen eine kurze Phase vor der ersten Kommunikation
    Timer::after(Duration::from_millis(STARTUP_DELAY_MS)).await;

    bus.enable_crc(true);

    // Geräte-Discovery: lineare Suche bis erschöpft
    info!("Find devices:");
    let rom_codes = discover_devices(&mut bus);
    for (index, rom_code) in rom_codes.iter().enumerate() {
        info!("  {}: {}", index, rom_code);
    }
    info!("Found {} device(s)", rom_codes.len());

    if rom_codes.len() == 1 {
        // Gegenprobe per READ ROM - nur bei genau einem Gerät gültig.
        // Ein Fehler hier wird geloggt, die Ausführung läuft weiter.
        match bus.read_rom() {
            Ok(rom_code) => info!("Single device {} present", rom_code),
            Err(e) => error!("An error occurred reading ROM code: {}", e),
        }
        info!("Single device optimisations enabled");
    }

    let mut devices = build_device_handles(&rom_codes);
    for device in devices.iter() {
        if let Err(e) = bus.init_device(device, SENSOR_RESOLUTION) {
            error!("Failed to init device {}: {}", device.rom_code, e);
        }
    }

    if devices.is_empty() {
        // Gültiger Idle-Endzustand, kein Fehler
        info!("No DS18B20 devices detected!");
        return;
    }

    // Absolute Deadline statt relativem Delay: die Periode driftet
    // nicht mit dem Execution-Jitter des Zyklus weg
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        // Broadcast: alle Geräte starten die Conversion zusammen,
        // die Wartezeit ist durch das langsamste Einzelgerät begrenzt
        bus.convert_all();
        Timer::after(Duration::from_millis(
            SENSOR_RESOLUTION.max_conversion_time_ms(),
        ))
        .await;

        // Direkt nach der Wartezeit lesen - Logging vor dem Read
        // könnte zu lange dauern und die Reads scheitern lassen
        let readings = read_all_devices(&mut bus, &mut devices);

        for (index, (device, reading)) in devices.iter().zip(readings.iter()).enumerate() {
            info!("  {}: {} °C    {} errors", index, reading, device.error_count);
        }

        // Das letzte Reading bestimmt die Rate (auch 0.0 nach einem
        // Read-Fehler) - bei mehreren Geräten gewinnt bewusst das
        // zuletzt gelesene
        if let Some(last_reading) = readings.last() {
            rate.set(blink_interval_ms(*last_reading));
        }

        ticker.next().await;
    }
}

/// Sensor Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die
/// testbare `sensor_logic()` Funktion auf.
///
/// # Parameter
/// - `sensor_pin`: GPIO4 Peripheral für die 1-Wire Datenleitung
/// - `rate`: Schreib-Ende der Shared Rate
#[embassy_executor::task]
pub async fn sensor_task(
    sensor_pin: esp_hal::peripherals::GPIO4<'static>,
    rate: RateProducer<'static>,
) {
    let bus = Ds18b20Bus::new(sensor_pin);
    sensor_logic(bus, rate).await;
}
