//! Pure Business Logic Functions
//!
//! Discovery, Lese-Zyklus und Blink-Ablauf ohne Hardware-Dependencies
//! (testbar!). Die Hardware kommt ausschließlich über die Traits rein.

use heapless::Vec;

use crate::rate::RateConsumer;
use crate::traits::{BlinkOutput, SensorBus};
use crate::types::{DeviceHandle, MAX_DEVICES, RomCode, TEMP_SCALE_FACTOR};

/// Geräte-Discovery: lineare Suche über den Bus
///
/// Läuft search_first/search_next bis die Suche erschöpft ist oder
/// die Kapazität [`MAX_DEVICES`] erreicht wird. Terminiert für jedes N
/// und liefert genau N Geräte (0 ≤ N ≤ 8).
///
/// Null Geräte sind KEIN Fehler - der Aufrufer fällt dann in einen
/// Idle-Zustand zurück.
pub fn discover_devices<B: SensorBus>(bus: &mut B) -> Vec<RomCode, MAX_DEVICES> {
    let mut rom_codes: Vec<RomCode, MAX_DEVICES> = Vec::new();

    let mut found = bus.search_first();
    while let Some(rom_code) = found {
        if rom_codes.push(rom_code).is_err() {
            // Kapazität erreicht - weitere Geräte werden ignoriert
            break;
        }
        found = bus.search_next();
    }

    rom_codes
}

/// Erstellt die Device Handles aus den gefundenen ROM-Codes
///
/// Edge case: bei genau EINEM Gerät wird das Handle als `solo`
/// markiert - die Bus-Implementierung darf dann die explizite
/// Adressierung überspringen (SKIP ROM Abkürzung).
pub fn build_device_handles(rom_codes: &[RomCode]) -> Vec<DeviceHandle, MAX_DEVICES> {
    let solo = rom_codes.len() == 1;

    let mut handles: Vec<DeviceHandle, MAX_DEVICES> = Vec::new();
    for rom_code in rom_codes.iter().take(MAX_DEVICES) {
        // push kann nicht fehlschlagen: Eingabe ist bereits auf MAX_DEVICES begrenzt
        let _ = handles.push(DeviceHandle::new(*rom_code, solo));
    }

    handles
}

/// Lese-Phase des Conversion-Zyklus: ein Read pro Gerät
///
/// Jeder Read gelingt oder scheitert unabhängig:
/// - Erfolg: Messwert landet im Reading-Slot des Geräts
/// - Fehler: Slot bleibt 0.0, der Fehler-Zähler GENAU dieses Geräts
///   wird um 1 erhöht, die übrigen Geräte werden trotzdem gelesen
///
/// Der Zyklus bricht nie ab - ein defekter Sensor blockiert die
/// anderen nicht.
pub fn read_all_devices<B: SensorBus>(
    bus: &mut B,
    devices: &mut [DeviceHandle],
) -> Vec<f32, MAX_DEVICES> {
    let mut readings: Vec<f32, MAX_DEVICES> = Vec::new();

    for device in devices.iter_mut() {
        let reading = match bus.read_temperature(device) {
            Ok(temp_c) => temp_c,
            Err(_) => {
                device.error_count += 1;
                0.0
            }
        };
        let _ = readings.push(reading);
    }

    readings
}

/// Berechnet das Blink-Intervall aus einer Temperatur
///
/// Fester linearer Maßstab: Temperatur auf Ganzzahl abgeschnitten,
/// mal [`TEMP_SCALE_FACTOR`]. 23.0 °C → 230 ms, 23.9 °C → 230 ms.
/// Ein 0.0-Reading (fehlgeschlagener Read) ergibt 0 ms.
pub fn blink_interval_ms(temp_c: f32) -> u32 {
    (temp_c as i32 * TEMP_SCALE_FACTOR) as u32
}

/// Blink-Ablauf: Low → High → Low → ... ohne Endzustand
///
/// Kapselt die Pegel-Folge und das Rate-Sampling des Output-Tasks.
/// Der Task selbst macht nur noch: `advance()` aufrufen, dann die
/// zurückgegebene Dauer schlafen.
pub struct Blinker {
    next_high: bool,
    /// Anzahl fehlgeschlagener Pegel-Writes (zählen und weitermachen,
    /// wie beim Sensor-Fehler-Zähler - nie fatal)
    pub write_errors: u32,
}

impl Blinker {
    /// Startet mit Pegel Low (wie das C-Original: erst aus, dann an)
    pub const fn new() -> Self {
        Self {
            next_high: false,
            write_errors: 0,
        }
    }

    /// Ein Halbzyklus: Pegel setzen, Dauer frisch aus der Rate lesen
    ///
    /// Die Rate wird GENAU in diesem Moment gesampelt - eine Änderung
    /// durch den Sensor-Task wirkt damit schon im nächsten Halbzyklus,
    /// nicht erst im nächsten vollen Zyklus.
    pub fn advance<O: BlinkOutput>(&mut self, output: &mut O, rate: &RateConsumer<'_>) -> u32 {
        if output.set_level(self.next_high).is_err() {
            self.write_errors = self.write_errors.wrapping_add(1);
        }
        self.next_high = !self.next_high;

        rate.get()
    }
}

impl Default for Blinker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_interval_scales_by_ten() {
        assert_eq!(blink_interval_ms(23.0), 230);
    }

    #[test]
    fn test_blink_interval_truncates_fraction() {
        assert_eq!(blink_interval_ms(23.9), 230);
        assert_eq!(blink_interval_ms(0.9), 0);
    }

    #[test]
    fn test_blink_interval_zero_reading() {
        // 0.0 ist der Reading-Slot-Default nach einem Read-Fehler
        assert_eq!(blink_interval_ms(0.0), 0);
    }

    #[test]
    fn test_build_handles_solo_only_for_single_device() {
        let one = [RomCode::new([0x28, 1, 2, 3, 4, 5, 6, 7])];
        let handles = build_device_handles(&one);
        assert_eq!(handles.len(), 1);
        assert!(handles[0].solo);

        let two = [
            RomCode::new([0x28, 1, 2, 3, 4, 5, 6, 7]),
            RomCode::new([0x28, 9, 9, 9, 9, 9, 9, 9]),
        ];
        let handles = build_device_handles(&two);
        assert_eq!(handles.len(), 2);
        assert!(!handles[0].solo);
        assert!(!handles[1].solo);
    }

    #[test]
    fn test_build_handles_start_with_zero_errors() {
        let roms = [RomCode::new([0x28, 0, 0, 0, 0, 0, 0, 1])];
        let handles = build_device_handles(&roms);
        assert_eq!(handles[0].error_count, 0);
    }
}
