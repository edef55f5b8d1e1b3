//! Shared Blink Rate
//!
//! Die eine geteilte Variable zwischen Sensor-Task und Blink-Task.
//! Im C-Original war das ein nacktes `static int` mit bewusst
//! akzeptiertem Data Race. Hier: AtomicU32 mit Relaxed Ordering -
//! ein Writer, ein Reader, ein Maschinenwort, keine zusammengesetzte
//! Invariante. Damit ist der Race auch formal weg.

use core::sync::atomic::{AtomicU32, Ordering};

/// Shared Rate: hält das zuletzt berechnete Blink-Intervall in ms
///
/// Wird als `static` im Firmware-Binary angelegt und per [`split`]
/// in Producer- und Consumer-Handle aufgeteilt:
/// - Sensor-Task besitzt den [`RateProducer`] (schreibt)
/// - Blink-Task besitzt den [`RateConsumer`] (liest)
///
/// [`split`]: BlinkRate::split
pub struct BlinkRate(AtomicU32);

impl BlinkRate {
    /// Erstellt die Shared Rate mit einem Default-Intervall
    ///
    /// Das Default bleibt aktiv solange der Sensor-Task nichts
    /// published (z.B. wenn keine Geräte gefunden wurden).
    pub const fn new(initial_ms: u32) -> Self {
        Self(AtomicU32::new(initial_ms))
    }

    /// Teilt die Rate in Schreib- und Lese-Handle auf
    pub fn split(&self) -> (RateProducer<'_>, RateConsumer<'_>) {
        (RateProducer(self), RateConsumer(self))
    }
}

/// Schreib-Ende der Shared Rate (Sensor-Task)
#[derive(Clone, Copy)]
pub struct RateProducer<'a>(&'a BlinkRate);

impl RateProducer<'_> {
    /// Published ein neues Blink-Intervall
    pub fn set(&self, interval_ms: u32) {
        self.0.0.store(interval_ms, Ordering::Relaxed);
    }
}

/// Lese-Ende der Shared Rate (Blink-Task)
#[derive(Clone, Copy)]
pub struct RateConsumer<'a>(&'a BlinkRate);

impl RateConsumer<'_> {
    /// Liest das aktuelle Blink-Intervall
    ///
    /// Wird vom Blink-Task vor JEDEM Halbzyklus frisch gelesen,
    /// damit eine Rate-Änderung sofort im nächsten Halbzyklus wirkt.
    pub fn get(&self) -> u32 {
        self.0.0.load(Ordering::Relaxed)
    }
}
