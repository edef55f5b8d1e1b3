// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Datenfluss ist einbahnig: Sensor-Task → Shared Rate → Blink-Task.

pub mod blink;
pub mod sensor;

// Re-export Tasks für einfachen Import
pub use blink::blink_task;
pub use sensor::sensor_task;
