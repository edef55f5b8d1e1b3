//! Core Types für Sensor- und Blink-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Maximale Anzahl Sensoren auf dem Bus
///
/// Die Discovery bricht bei dieser Kapazität ab - weitere Geräte
/// werden ignoriert statt die Collection zu überlaufen.
pub const MAX_DEVICES: usize = 8;

/// Skalierungsfaktor Temperatur → Blink-Intervall
///
/// 1 °C entspricht 10 ms Halbzyklus (23 °C → 230 ms).
pub const TEMP_SCALE_FACTOR: i32 = 10;

/// ROM-Code: 64-bit Identifier eines 1-Wire Geräts
///
/// Wird vom Hersteller fest vergeben und ist auf dem Bus eindeutig.
/// Byte 0 ist der Family-Code (0x28 für DS18B20), Byte 7 die CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RomCode(pub [u8; 8]);

impl RomCode {
    pub const fn new(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

/// Device Handle: ein Sensor auf dem Bus
///
/// Hält den unveränderlichen ROM-Code und den veränderlichen
/// Fehler-Zähler. Wird einmal beim Start erstellt und lebt für die
/// gesamte Prozess-Laufzeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceHandle {
    /// Bus-vergebener Identifier (unveränderlich)
    pub rom_code: RomCode,
    /// Single-Device Abkürzung: Adressierung per SKIP ROM statt MATCH ROM
    ///
    /// Nur gültig wenn genau ein Gerät auf dem Bus hängt.
    pub solo: bool,
    /// Anzahl fehlgeschlagener Reads seit Start (kein Limit, kein Reset)
    pub error_count: u32,
}

impl DeviceHandle {
    pub fn new(rom_code: RomCode, solo: bool) -> Self {
        Self {
            rom_code,
            solo,
            error_count: 0,
        }
    }
}

/// Sensor-Auflösung in Bits
///
/// Bestimmt die Wert-Granularität UND die Conversion-Dauer.
/// Alle Geräte auf dem Bus nutzen dieselbe Auflösung, daher ist die
/// Wartezeit nach `convert_all` durch das langsamste Gerät bei dieser
/// einen Auflösung begrenzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Bits9,
    Bits10,
    Bits11,
    Bits12,
}

impl Resolution {
    /// Worst-Case Conversion-Dauer in Millisekunden (DS18B20 Datenblatt)
    pub const fn max_conversion_time_ms(self) -> u64 {
        match self {
            Resolution::Bits9 => 94,
            Resolution::Bits10 => 188,
            Resolution::Bits11 => 375,
            Resolution::Bits12 => 750,
        }
    }
}

/// Fehler-Typ für Bus-Operationen
///
/// Kein Fehler ist fatal: ROM-Read-Fehler werden geloggt,
/// Read-Fehler pro Gerät gezählt, dann läuft der Zyklus weiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Kein Presence-Pulse - Gerät antwortet nicht
    NoDevice,
    /// CRC-Prüfung der gelesenen Daten fehlgeschlagen
    CrcMismatch,
    /// Bus-Kommunikation fehlgeschlagen
    BusFault,
}

/// Fehler-Typ für Output-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputError {
    WriteFailed,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for RomCode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{=u8:02x}{=u8:02x}{=u8:02x}{=u8:02x}{=u8:02x}{=u8:02x}{=u8:02x}{=u8:02x}",
            self.0[0],
            self.0[1],
            self.0[2],
            self.0[3],
            self.0[4],
            self.0[5],
            self.0[6],
            self.0[7]
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SensorError::NoDevice => defmt::write!(fmt, "NoDevice"),
            SensorError::CrcMismatch => defmt::write!(fmt, "CrcMismatch"),
            SensorError::BusFault => defmt::write!(fmt, "BusFault"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OutputError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "WriteFailed")
    }
}
