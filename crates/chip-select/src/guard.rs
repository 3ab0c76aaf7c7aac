use crate::select::ChipSelect;

/// Scoped select/deselect pairing.
///
/// Selects on construction and deselects when dropped, so every exit path
/// out of a transaction bracket, early returns included, releases the device
/// and the bus.
pub struct SelectGuard<'a, C: ChipSelect> {
    cs: &'a mut C,
}

impl<'a, C: ChipSelect> SelectGuard<'a, C> {
    /// Select the device; the matching deselect runs on drop.
    pub async fn select(cs: &'a mut C) -> SelectGuard<'a, C> {
        cs.select().await;
        SelectGuard { cs }
    }
}

impl<C: ChipSelect> Drop for SelectGuard<'_, C> {
    fn drop(&mut self) {
        self.cs.deselect();
    }
}
