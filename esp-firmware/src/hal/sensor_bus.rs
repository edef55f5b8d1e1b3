// DS18B20 Bus - implementiert den SensorBus Trait über den 1-Wire Treiber
//
// Kommando-Ebene: ROM-Adressierung, Scratchpad-Zugriff, Conversion.
// Das Bit-Timing liegt eine Ebene tiefer in one_wire.rs.

use esp_core::{DeviceHandle, Resolution, RomCode, SensorBus, SensorError};
use esp_hal::gpio::Flex;

use crate::hal::one_wire::{OneWireDriver, check_crc};

// ROM-Kommandos (adressieren Geräte)
const CMD_READ_ROM: u8 = 0x33;
const CMD_MATCH_ROM: u8 = 0x55;
const CMD_SKIP_ROM: u8 = 0xCC;

// Funktions-Kommandos (nach der Adressierung)
const CMD_CONVERT_T: u8 = 0x44;
const CMD_WRITE_SCRATCHPAD: u8 = 0x4E;
const CMD_READ_SCRATCHPAD: u8 = 0xBE;

/// Scratchpad-Größe inklusive CRC-Byte
const SCRATCHPAD_LEN: usize = 9;

/// DS18B20 Temperatur-Bus
///
/// Production-Implementierung des [`SensorBus`] Traits. Singleton für
/// die Prozess-Laufzeit - der Sensor-Task besitzt die einzige Instanz.
pub struct Ds18b20Bus {
    link: OneWireDriver,
    crc_enabled: bool,
}

impl Ds18b20Bus {
    /// Erstellt den Bus auf dem Sensor-GPIO
    ///
    /// # Parameter
    /// - `sensor_pin`: GPIO4 Peripheral für die 1-Wire Datenleitung
    pub fn new(sensor_pin: esp_hal::peripherals::GPIO4<'static>) -> Self {
        let pin = Flex::new(sensor_pin);
        Self {
            link: OneWireDriver::new(pin),
            crc_enabled: false,
        }
    }

    /// Adressiert ein Gerät: Reset + SKIP ROM bzw. MATCH ROM
    fn address_device(&mut self, handle: &DeviceHandle) -> Result<(), SensorError> {
        if !self.link.reset() {
            return Err(SensorError::NoDevice);
        }

        if handle.solo {
            // Single-Device Abkürzung: kein ROM-Code nötig
            self.link.write_byte(CMD_SKIP_ROM);
        } else {
            self.link.write_byte(CMD_MATCH_ROM);
            for byte in handle.rom_code.as_bytes() {
                self.link.write_byte(*byte);
            }
        }

        Ok(())
    }

    fn read_scratchpad(&mut self, handle: &DeviceHandle) -> Result<[u8; SCRATCHPAD_LEN], SensorError> {
        self.address_device(handle)?;
        self.link.write_byte(CMD_READ_SCRATCHPAD);

        let mut scratchpad = [0u8; SCRATCHPAD_LEN];
        for byte in scratchpad.iter_mut() {
            *byte = self.link.read_byte();
        }

        if self.crc_enabled && !check_crc(&scratchpad) {
            return Err(SensorError::CrcMismatch);
        }

        Ok(scratchpad)
    }
}

impl SensorBus for Ds18b20Bus {
    fn enable_crc(&mut self, enabled: bool) {
        self.crc_enabled = enabled;
    }

    fn search_first(&mut self) -> Option<RomCode> {
        self.link.search_reset();
        self.search_next()
    }

    fn search_next(&mut self) -> Option<RomCode> {
        let rom = self.link.search_next_rom()?;

        if self.crc_enabled && !check_crc(&rom) {
            // Korruptes Suchergebnis: nicht als Gerät melden.
            // Discovery-Fehler werden nicht surfaced (leerer Bus = Idle).
            return None;
        }

        Some(RomCode::new(rom))
    }

    fn read_rom(&mut self) -> Result<RomCode, SensorError> {
        if !self.link.reset() {
            return Err(SensorError::NoDevice);
        }

        self.link.write_byte(CMD_READ_ROM);

        let mut rom = [0u8; 8];
        for byte in rom.iter_mut() {
            *byte = self.link.read_byte();
        }

        if self.crc_enabled && !check_crc(&rom) {
            return Err(SensorError::CrcMismatch);
        }

        Ok(RomCode::new(rom))
    }

    fn init_device(
        &mut self,
        handle: &DeviceHandle,
        resolution: Resolution,
    ) -> Result<(), SensorError> {
        self.address_device(handle)?;

        // Konfigurations-Register: Bits 5/6 wählen die Auflösung,
        // TH/TL (Alarm-Schwellen) werden nicht genutzt
        let config = match resolution {
            Resolution::Bits9 => 0x1F,
            Resolution::Bits10 => 0x3F,
            Resolution::Bits11 => 0x5F,
            Resolution::Bits12 => 0x7F,
        };

        self.link.write_byte(CMD_WRITE_SCRATCHPAD);
        self.link.write_byte(0x00); // TH
        self.link.write_byte(0x00); // TL
        self.link.write_byte(config);

        Ok(())
    }

    fn convert_all(&mut self) {
        // Broadcast an alle Geräte: SKIP ROM + CONVERT T.
        // Fire-and-forget - Fehler zeigen sich beim Read als CRC-Müll
        // oder fehlender Presence-Pulse.
        if self.link.reset() {
            self.link.write_byte(CMD_SKIP_ROM);
            self.link.write_byte(CMD_CONVERT_T);
        }
    }

    fn read_temperature(&mut self, handle: &DeviceHandle) -> Result<f32, SensorError> {
        let scratchpad = self.read_scratchpad(handle)?;

        // Temperatur: 16-bit signed, 1/16 °C pro LSB (12-bit Auflösung)
        let raw = i16::from_le_bytes([scratchpad[0], scratchpad[1]]);
        Ok(f32::from(raw) / 16.0)
    }
}
