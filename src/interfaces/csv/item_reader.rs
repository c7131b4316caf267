use crate::domain::order::LineItem;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads order line items from a CSV source with an `item, quantity, price` header.
///
/// Cells are trimmed before parsing. A row whose subtotal does not fit a
/// `Decimal` is reported as `Overflow` instead of reaching the order.
pub struct ItemReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ItemReader<R> {
    /// Wraps a byte source holding the line-item table.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes line items.
    ///
    /// A bad row yields an error for that row only; reading continues after it.
    pub fn items(self) -> impl Iterator<Item = Result<LineItem>> {
        self.reader
            .into_deserialize()
            .map(|result| -> Result<LineItem> {
                let item: LineItem = result.map_err(PaymentError::from)?;
                item.subtotal()?;
                Ok(item)
            })
    }
}
