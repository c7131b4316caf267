use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a monetary value: a unit price or an order total.
///
/// This is a wrapper around `rust_decimal::Decimal` so prices and totals are
/// not mixed up with quantities. No sign checks are made. Values are read and
/// written as decimal strings, so whole numbers beyond `u64` keep their precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Closed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Open => f.write_str("open"),
            OrderStatus::Closed => f.write_str("closed"),
        }
    }
}

/// One (name, quantity, unit price) entry of an order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct LineItem {
    pub item: String,
    pub quantity: u32,
    pub price: Price,
}

impl LineItem {
    pub fn new(item: impl Into<String>, quantity: u32, price: impl Into<Price>) -> Self {
        Self {
            item: item.into(),
            quantity,
            price: price.into(),
        }
    }

    /// Quantity times unit price, or `Overflow` when it leaves the `Decimal` range.
    pub fn subtotal(&self) -> Result<Price> {
        self.price
            .checked_mul(self.quantity)
            .ok_or(PaymentError::Overflow)
    }
}

/// An order made of line items and an open/closed status.
///
/// Line items can only be appended. The status starts `Open` and is moved to
/// `Closed` by a payment processor.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Order {
    line_items: Vec<LineItem>,
    status: OrderStatus,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line item. Quantity and price are taken as given.
    pub fn add_item(&mut self, item: impl Into<String>, quantity: u32, price: impl Into<Price>) {
        self.line_items.push(LineItem::new(item, quantity, price));
    }

    pub fn push(&mut self, line_item: LineItem) {
        self.line_items.push(line_item);
    }

    /// Sum of quantity times unit price over every line item.
    ///
    /// Fails with `Overflow` instead of wrapping or panicking when the sum
    /// does not fit a `Decimal`.
    pub fn total_price(&self) -> Result<Price> {
        self.line_items.iter().try_fold(Price::ZERO, |total, line| {
            total
                .checked_add(line.subtotal()?)
                .ok_or(PaymentError::Overflow)
        })
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.line_items.iter().map(|l| l.item.as_str())
    }

    pub fn quantities(&self) -> impl Iterator<Item = u32> + '_ {
        self.line_items.iter().map(|l| l.quantity)
    }

    pub fn prices(&self) -> impl Iterator<Item = Price> + '_ {
        self.line_items.iter().map(|l| l.price)
    }

    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_is_open_and_empty() {
        let order = Order::new();
        assert_eq!(order.status(), OrderStatus::Open);
        assert!(order.is_empty());
        assert_eq!(order.total_price().unwrap(), Price::ZERO);
    }

    #[test]
    fn test_sample_order_total() {
        let mut order = Order::new();
        order.add_item("mouse", 3, dec!(100));
        order.add_item("screen", 1, dec!(900));
        order.add_item("antivirus", 1, dec!(200));

        assert_eq!(order.total_price().unwrap(), Price::new(dec!(1400)));
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_sequences_stay_aligned() {
        let mut order = Order::new();
        order.add_item("cable", 2, dec!(4.50));
        order.add_item("adapter", 1, dec!(12.25));

        assert_eq!(order.items().collect::<Vec<_>>(), vec!["cable", "adapter"]);
        assert_eq!(order.quantities().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(
            order.prices().collect::<Vec<_>>(),
            vec![Price::new(dec!(4.50)), Price::new(dec!(12.25))]
        );
        assert_eq!(order.total_price().unwrap(), Price::new(dec!(21.25)));
    }

    #[test]
    fn test_add_item_accepts_unvalidated_values() {
        let mut order = Order::new();
        order.add_item("", 0, dec!(-5));
        order.add_item("free sample", 10, Price::ZERO);

        assert_eq!(order.len(), 2);
        assert_eq!(order.total_price().unwrap(), Price::ZERO);
    }

    #[test]
    fn test_status_display_and_serde() {
        assert_eq!(OrderStatus::Open.to_string(), "open");
        assert_eq!(OrderStatus::Closed.to_string(), "closed");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Closed).unwrap(),
            "\"closed\""
        );
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let mut order = Order::new();
        order.add_item("big", 2, Decimal::MAX);

        assert!(matches!(order.total_price(), Err(PaymentError::Overflow)));
        // The order itself is untouched; only the sum is rejected.
        assert_eq!(order.len(), 1);
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_total_overflow_across_line_items() {
        let mut order = Order::new();
        order.add_item("half", 1, Decimal::MAX);
        order.add_item("other half", 1, Decimal::MAX);

        assert!(order.line_items()[0].subtotal().is_ok());
        assert!(matches!(order.total_price(), Err(PaymentError::Overflow)));
    }

    #[test]
    fn test_price_display_drops_trailing_zeros() {
        assert_eq!(Price::new(dec!(1000.00)).to_string(), "1000");
        assert_eq!(Price::new(dec!(2.50)).to_string(), "2.5");
    }
}
