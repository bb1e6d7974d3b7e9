// Adapters layer: concrete implementations for external systems (storage, console output).

pub mod console;
pub mod storage;
