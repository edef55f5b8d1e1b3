// 1-Wire Link Layer - bit-banged über einen Open-Drain GPIO
//
// Implementiert die rohen Bus-Primitiven: Reset/Presence, Bit- und
// Byte-I/O und die ROM-Suche (Maxim Application Note 187).
// Timing-Werte laut DS18B20 Datenblatt (Standard Speed).

use crc::{CRC_8_MAXIM_DOW, Crc};
use esp_hal::delay::Delay;
use esp_hal::gpio::{Flex, Pull};

/// CRC-8/MAXIM-DOW - Polynom x^8 + x^5 + x^4 + 1, wie von allen
/// 1-Wire Geräten für ROM-Code und Scratchpad verwendet
const CRC8_MAXIM: Crc<u8> = Crc::<u8>::new(&CRC_8_MAXIM_DOW);

/// SEARCH ROM Kommando
const CMD_SEARCH_ROM: u8 = 0xF0;

/// Prüft die CRC eines 1-Wire Datenblocks
///
/// Konvention: das letzte Byte von `data` ist die übertragene CRC,
/// berechnet über alle Bytes davor.
pub fn check_crc(data: &[u8]) -> bool {
    let (payload, crc) = data.split_at(data.len() - 1);
    CRC8_MAXIM.checksum(payload) == crc[0]
}

/// Raw 1-Wire Treiber
///
/// Der Pin läuft als Open-Drain mit externem Pull-Up: `set_low()`
/// zieht den Bus aktiv runter, `set_high()` gibt ihn frei.
///
/// Bit-Slots laufen in einer Critical Section, damit ein Interrupt
/// das Mikrosekunden-Timing nicht zerreißt. Der lange Reset-Puls
/// ist unkritisch und bleibt unterbrechbar.
pub struct OneWireDriver {
    pin: Flex<'static>,
    delay: Delay,
    // Such-Zustand (AN187): Position der letzten Bit-Diskrepanz
    last_discrepancy: u8,
    last_device_flag: bool,
    rom: [u8; 8],
}

impl OneWireDriver {
    /// Übernimmt den Bus-Pin und konfiguriert ihn als Open-Drain
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_as_open_drain(Pull::Up);
        pin.set_high(); // Bus freigeben

        Self {
            pin,
            delay: Delay::new(),
            last_discrepancy: 0,
            last_device_flag: false,
            rom: [0; 8],
        }
    }

    /// Reset-Puls, liefert `true` wenn mindestens ein Gerät mit
    /// einem Presence-Puls antwortet
    pub fn reset(&mut self) -> bool {
        self.pin.set_low();
        self.delay.delay_micros(480);
        self.pin.set_high();
        self.delay.delay_micros(70);
        let presence = self.pin.is_low();
        self.delay.delay_micros(410);
        presence
    }

    fn write_bit(&mut self, bit: bool) {
        critical_section::with(|_| {
            self.pin.set_low();
            if bit {
                // Write-1: kurz runterziehen, dann Slot freigeben
                self.delay.delay_micros(6);
                self.pin.set_high();
                self.delay.delay_micros(64);
            } else {
                // Write-0: fast den ganzen Slot runterhalten
                self.delay.delay_micros(60);
                self.pin.set_high();
                self.delay.delay_micros(10);
            }
        });
    }

    fn read_bit(&mut self) -> bool {
        critical_section::with(|_| {
            self.pin.set_low();
            self.delay.delay_micros(6);
            self.pin.set_high();
            // Sample-Fenster: spätestens 15 µs nach der Flanke
            self.delay.delay_micros(9);
            let bit = self.pin.is_high();
            self.delay.delay_micros(55);
            bit
        })
    }

    /// Schreibt ein Byte, LSB zuerst
    pub fn write_byte(&mut self, byte: u8) {
        for i in 0..8 {
            self.write_bit(byte & (1 << i) != 0);
        }
    }

    /// Liest ein Byte, LSB zuerst
    pub fn read_byte(&mut self) -> u8 {
        let mut byte = 0u8;
        for i in 0..8 {
            if self.read_bit() {
                byte |= 1 << i;
            }
        }
        byte
    }

    /// Setzt den Such-Zustand zurück (nächster Aufruf beginnt vorn)
    pub fn search_reset(&mut self) {
        self.last_discrepancy = 0;
        self.last_device_flag = false;
        self.rom = [0; 8];
    }

    /// Ein Schritt der linearen ROM-Suche (first/next Semantik)
    ///
    /// Liefert den ROM-Code des nächsten Geräts oder `None` wenn die
    /// Suche erschöpft ist bzw. kein Gerät antwortet. Suchfehler werden
    /// nicht unterschieden - ein stiller Bus sieht aus wie ein leerer.
    pub fn search_next_rom(&mut self) -> Option<[u8; 8]> {
        if self.last_device_flag {
            return None;
        }
        if !self.reset() {
            self.search_reset();
            return None;
        }

        self.write_byte(CMD_SEARCH_ROM);

        let mut last_zero: u8 = 0;
        for bit_number in 1..=64u8 {
            let id_bit = self.read_bit();
            let cmp_bit = self.read_bit();

            if id_bit && cmp_bit {
                // Kein Gerät treibt den Bus mehr - Suche abbrechen
                self.search_reset();
                return None;
            }

            let byte_idx = ((bit_number - 1) / 8) as usize;
            let bit_mask = 1u8 << ((bit_number - 1) % 8);

            let direction = if id_bit != cmp_bit {
                // Alle verbliebenen Geräte haben dasselbe Bit
                id_bit
            } else if bit_number < self.last_discrepancy {
                // Vor der letzten Diskrepanz: alten Pfad wiederholen
                self.rom[byte_idx] & bit_mask != 0
            } else {
                // An der letzten Diskrepanz den 1-Zweig nehmen,
                // dahinter zuerst den 0-Zweig
                bit_number == self.last_discrepancy
            };

            if !direction {
                last_zero = bit_number;
            }

            if direction {
                self.rom[byte_idx] |= bit_mask;
            } else {
                self.rom[byte_idx] &= !bit_mask;
            }
            self.write_bit(direction);
        }

        self.last_discrepancy = last_zero;
        if last_zero == 0 {
            self.last_device_flag = true;
        }

        Some(self.rom)
    }
}
