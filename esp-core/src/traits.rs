//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{DeviceHandle, OutputError, Resolution, RomCode, SensorError};

/// Trait für den geteilten Sensor-Bus (1-Wire)
///
/// Abstrahiert die Bus-Primitiven, die der Sensor-Task braucht.
/// Der darunterliegende Timing-Treiber ist Sache der Implementierung.
///
/// # Implementierungen
/// - **Production:** Ds18b20Bus (bit-banged 1-Wire über GPIO)
/// - **Testing:** MockSensorBus (in-memory Mock)
pub trait SensorBus {
    /// Schaltet die CRC-Prüfung für Bus-Reads ein oder aus
    fn enable_crc(&mut self, enabled: bool);

    /// Startet die lineare Geräte-Suche, liefert das erste Gerät
    ///
    /// `None` heißt: kein Gerät auf dem Bus. Das ist KEIN Fehler -
    /// ein leerer Bus ist ein gültiger Idle-Zustand.
    fn search_first(&mut self) -> Option<RomCode>;

    /// Liefert das nächste Gerät der laufenden Suche
    ///
    /// `None` heißt: Suche erschöpft.
    fn search_next(&mut self) -> Option<RomCode>;

    /// Liest den ROM-Code direkt (READ ROM Kommando)
    ///
    /// Nur gültig wenn genau ein Gerät auf dem Bus hängt -
    /// bei mehreren Geräten kollidieren die Antworten.
    fn read_rom(&mut self) -> Result<RomCode, SensorError>;

    /// Initialisiert ein Gerät: Adressierungsmodus und Auflösung
    ///
    /// `handle.solo` entscheidet zwischen SKIP ROM (Abkürzung für
    /// Single-Device) und MATCH ROM Adressierung.
    fn init_device(
        &mut self,
        handle: &DeviceHandle,
        resolution: Resolution,
    ) -> Result<(), SensorError>;

    /// Broadcast: startet die Conversion auf ALLEN Geräten gleichzeitig
    ///
    /// Fire-and-forget - alle Geräte beginnen zusammen, die Wartezeit
    /// ist durch das langsamste Einzelgerät begrenzt.
    fn convert_all(&mut self);

    /// Liest die Temperatur eines Geräts in °C
    ///
    /// Jeder Read schlägt unabhängig fehl oder gelingt - ein
    /// fehlerhafter Sensor blockiert die anderen nicht.
    fn read_temperature(&mut self, handle: &DeviceHandle) -> Result<f32, SensorError>;
}

/// Trait für den binären Signal-Ausgang (LED)
///
/// # Implementierungen
/// - **Production:** GpioBlinkOutput (Push/Pull GPIO Pin)
/// - **Testing:** MockBlinkOutput (in-memory Mock)
pub trait BlinkOutput {
    /// Setzt den Ausgangspegel (high = an)
    ///
    /// # Fehlerbehandlung
    /// Gibt `OutputError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_level(&mut self, high: bool) -> Result<(), OutputError>;
}
