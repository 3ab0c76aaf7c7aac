#![no_std]
//! Chip select strategies for devices sharing one SPI bus.
//!
//! A driver brackets every bus transaction for its device with `select()`
//! and `deselect()` on a [`ChipSelect`]. The active-low variant couples the
//! select line with exclusive access to the shared bus: the line is asserted
//! only after the bus has been locked and configured for the device, and
//! released before the bus is handed back. The no-op and tracing variants
//! satisfy the same contract without touching hardware.

mod active;
mod guard;
mod scope;
mod select;
mod settings;

pub use active::ActiveLowChipSelect;
pub use guard::SelectGuard;
pub use scope::{BusScope, SharedBusScope};
#[cfg(feature = "defmt")]
pub use select::DefmtSink;
pub use select::{ChipSelect, NoopChipSelect, TraceChipSelect, TraceSink};
pub use settings::{BitOrder, SpiSettings};
