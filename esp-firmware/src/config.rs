// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::Resolution;

// ============================================================================
// GPIO Konfiguration
// ============================================================================

/// GPIO-Pin für die Blink-LED (Push/Pull Output)
pub const BLINK_GPIO_PIN: u8 = 2;

/// GPIO-Pin für den 1-Wire Bus (Open-Drain mit externem Pull-Up)
pub const SENSOR_GPIO_PIN: u8 = 4;

// ============================================================================
// Sensor Konfiguration
// ============================================================================

/// Auflösung der DS18B20 Sensoren
///
/// 12 Bit = feinste Granularität, aber längste Conversion-Dauer (750 ms).
/// Alle Geräte nutzen dieselbe Auflösung, daher reicht EINE Wartezeit
/// nach dem Conversion-Broadcast.
pub const SENSOR_RESOLUTION: Resolution = Resolution::Bits12;

/// Abtast-Periode des Sensor-Zyklus in Millisekunden
///
/// Absolute Deadline (Ticker), NICHT relative Delays - sonst driftet
/// die Periode mit dem Execution-Jitter weg.
pub const SAMPLE_PERIOD_MS: u64 = 500;

/// Wartezeit vor der ersten Bus-Kommunikation in Millisekunden
///
/// Die Sensoren brauchen nach Power-On eine kurze Stabilisierungsphase,
/// sonst sind die ersten Reads unzuverlässig.
pub const STARTUP_DELAY_MS: u64 = 2000;

// ============================================================================
// Blink Konfiguration
// ============================================================================

/// Default Blink-Intervall in Millisekunden
///
/// Gilt bis der Sensor-Task die erste Rate published - und dauerhaft,
/// falls keine Sensoren gefunden werden.
pub const DEFAULT_BLINK_RATE_MS: u32 = 200;
