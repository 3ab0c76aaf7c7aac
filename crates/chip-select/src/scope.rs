use embassy_embedded_hal::SetConfig;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

use crate::settings::SpiSettings;

/// Exclusive access to a shared bus for the duration of one transaction.
///
/// `begin` waits until the bus is free, then configures it for the device;
/// `end` hands the bus back. A scope is not reentrant: `begin` called twice
/// without an intervening `end` on the same scope deadlocks, so callers keep
/// the two strictly alternating.
#[allow(async_fn_in_trait)]
pub trait BusScope {
    /// Open a transaction: wait for the bus, then apply `settings`.
    async fn begin(&mut self, settings: &SpiSettings);

    /// Close the transaction and release the bus. Never blocks.
    fn end(&mut self);
}

/// [`BusScope`] over a mutex-guarded bus peripheral.
///
/// The mutex serializes transactions across every scope created from it; the
/// guard taken in `begin` is held until `end`, so no two scopes sharing one
/// mutex can have overlapping transactions.
pub struct SharedBusScope<'a, M: RawMutex, BUS> {
    bus: &'a Mutex<M, BUS>,
    guard: Option<MutexGuard<'a, M, BUS>>,
}

impl<'a, M: RawMutex, BUS> SharedBusScope<'a, M, BUS> {
    pub fn new(bus: &'a Mutex<M, BUS>) -> Self {
        Self { bus, guard: None }
    }

    /// The locked bus, while a transaction is open.
    ///
    /// This is how the owning driver reaches the peripheral to shift bytes
    /// between `select()` and `deselect()`.
    pub fn bus(&mut self) -> Option<&mut BUS> {
        self.guard.as_deref_mut()
    }
}

impl<'a, M: RawMutex, BUS> BusScope for SharedBusScope<'a, M, BUS>
where
    BUS: SetConfig,
    BUS::Config: From<SpiSettings>,
{
    async fn begin(&mut self, settings: &SpiSettings) {
        let mut bus = self.bus.lock().await;
        // The select contract exposes no error path; a config rejection has
        // nowhere to go.
        let _ = bus.set_config(&BUS::Config::from(*settings));
        self.guard = Some(bus);
    }

    fn end(&mut self) {
        self.guard = None;
    }
}
