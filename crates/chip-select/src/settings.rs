use embedded_hal::spi::Mode;

/// Wire-level bit ordering for a device's transfers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Bus configuration one device requires during its transactions.
///
/// Bound once when the chip select is built and reapplied unchanged every
/// time a transaction opens; never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiSettings {
    /// SCK frequency in hertz.
    pub clock_hz: u32,
    pub bit_order: BitOrder,
    /// Clock polarity and phase (SPI modes 0 through 3).
    pub mode: Mode,
}

impl SpiSettings {
    pub const fn new(clock_hz: u32, bit_order: BitOrder, mode: Mode) -> Self {
        Self { clock_hz, bit_order, mode }
    }
}
