//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, Typen und Pure Functions.

#![no_std]

pub mod logic;
pub mod rate;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{
    Blinker, blink_interval_ms, build_device_handles, discover_devices, read_all_devices,
};
pub use rate::{BlinkRate, RateConsumer, RateProducer};
pub use traits::{BlinkOutput, SensorBus};
pub use types::{
    DeviceHandle, MAX_DEVICES, OutputError, Resolution, RomCode, SensorError, TEMP_SCALE_FACTOR,
};
