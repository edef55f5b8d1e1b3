// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den esp-core Traits,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod blink_pin;
pub mod one_wire;
pub mod sensor_bus;

pub use blink_pin::GpioBlinkOutput;
pub use one_wire::OneWireDriver;
pub use sensor_bus::Ds18b20Bus;
