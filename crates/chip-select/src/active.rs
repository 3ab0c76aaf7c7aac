use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::scope::BusScope;
use crate::select::ChipSelect;
use crate::settings::SpiSettings;

/// Active-low chip select coupled to a shared bus transaction.
///
/// `select()` asserts the line only once the bus transaction is open: the
/// bus must already carry this device's settings by the time the device
/// starts listening. `deselect()` reverses the order, raising the line
/// before the transaction ends so the device is off the bus before another
/// device's transaction can start. Swapping either ordering is a contention
/// bug, not a style choice.
pub struct ActiveLowChipSelect<CS, B> {
    cs: CS,
    settings: SpiSettings,
    bus: B,
}

impl<CS, B> ActiveLowChipSelect<CS, B>
where
    CS: OutputPin<Error = Infallible>,
    B: BusScope,
{
    /// Bind a select line and the device's bus settings.
    ///
    /// `cs` arrives already configured as an output by the HAL and is driven
    /// high here, before any transaction can exist, so the device stays
    /// unselected through bring-up.
    pub fn new(mut cs: CS, settings: SpiSettings, bus: B) -> Self {
        let _ = cs.set_high();
        Self { cs, settings, bus }
    }

    /// The underlying bus scope, for reaching the locked bus mid-bracket.
    pub fn scope(&mut self) -> &mut B {
        &mut self.bus
    }
}

impl<CS, B> ChipSelect for ActiveLowChipSelect<CS, B>
where
    CS: OutputPin<Error = Infallible>,
    B: BusScope,
{
    async fn select(&mut self) {
        self.bus.begin(&self.settings).await;
        let _ = self.cs.set_low();
    }

    fn deselect(&mut self) {
        let _ = self.cs.set_high();
        self.bus.end();
    }
}
