/// Device selection around one bus transaction.
///
/// Drivers bracket every transaction as `select()`, transfer, `deselect()`.
/// Calls on one instance must strictly alternate starting with `select()`;
/// doubled or unmatched calls are a caller bug with no defined behavior.
/// [`SelectGuard`](crate::SelectGuard) enforces the pairing by scope.
#[allow(async_fn_in_trait)]
pub trait ChipSelect {
    /// Make the device the exclusive owner of the bus and assert its select
    /// line. May suspend until the shared bus is free.
    async fn select(&mut self);

    /// Release the select line and hand the bus back. Never blocks.
    fn deselect(&mut self);
}

/// Chip select that touches nothing.
///
/// For a bus with a single device, or as a stand-in where no hardware may be
/// driven.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopChipSelect;

impl ChipSelect for NoopChipSelect {
    async fn select(&mut self) {}

    fn deselect(&mut self) {}
}

/// Sink for chip select call tracing.
pub trait TraceSink {
    fn emit(&mut self, message: &str);
}

/// Chip select that only reports its calls.
///
/// Touches no hardware or bus state; each call emits one message naming the
/// operation. Useful for checking a driver's select/deselect pairing from
/// the outside.
pub struct TraceChipSelect<S: TraceSink> {
    sink: S,
}

impl<S: TraceSink> TraceChipSelect<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: TraceSink> ChipSelect for TraceChipSelect<S> {
    async fn select(&mut self) {
        self.sink.emit("chip select: select()");
    }

    fn deselect(&mut self) {
        self.sink.emit("chip select: deselect()");
    }
}

/// [`TraceSink`] forwarding to defmt at info level.
#[cfg(feature = "defmt")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl TraceSink for DefmtSink {
    fn emit(&mut self, message: &str) {
        defmt::info!("{=str}", message);
    }
}
