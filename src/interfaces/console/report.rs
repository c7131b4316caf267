use crate::domain::order::{LineItem, Order, OrderStatus, Price};
use crate::error::{PaymentError, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct OrderSummary<'a> {
    line_items: &'a [LineItem],
    // `null` when the total is out of range.
    total: Option<Price>,
    status: OrderStatus,
}

/// Writes human-readable order status lines to any `Write` sink.
pub struct OrderReport<W: Write> {
    writer: W,
}

impl<W: Write> OrderReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the total cost line.
    ///
    /// Returns `Overflow` without writing anything when the total is out of range.
    pub fn write_total(&mut self, order: &Order) -> Result<()> {
        let total = order.total_price()?;
        writeln!(self.writer, "Total cost: {}", total)?;
        Ok(())
    }

    pub fn write_status(&mut self, order: &Order) -> Result<()> {
        writeln!(self.writer, "Order status: {}", order.status())?;
        Ok(())
    }

    pub fn write_error(&mut self, error: &PaymentError) -> Result<()> {
        writeln!(self.writer, "{error}")?;
        Ok(())
    }

    pub fn write_separator(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// Writes the order, its total and status as pretty-printed JSON.
    pub fn write_json(&mut self, order: &Order) -> Result<()> {
        let summary = OrderSummary {
            line_items: order.line_items(),
            total: order.total_price().ok(),
            status: order.status(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &summary).map_err(std::io::Error::from)?;
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
