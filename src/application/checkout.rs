use crate::domain::order::{Order, OrderStatus, Price};
use crate::domain::ports::{PaymentMethod, PaymentProcessorBox};
use crate::error::Result;
use serde::Serialize;

/// Outcome of a settled order.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct Receipt {
    pub method: PaymentMethod,
    pub total: Price,
    pub status: OrderStatus,
}

/// Runs payments for orders through a single payment processor.
///
/// `Checkout` owns the processor but not the authorizer behind it, so the
/// caller can still confirm authorization between attempts.
pub struct Checkout {
    processor: PaymentProcessorBox,
}

impl Checkout {
    /// Creates a new `Checkout` instance.
    ///
    /// # Arguments
    ///
    /// * `processor` - The payment method used to settle orders.
    pub fn new(processor: PaymentProcessorBox) -> Self {
        Self { processor }
    }

    pub fn method(&self) -> PaymentMethod {
        self.processor.method()
    }

    /// Pays for the order.
    ///
    /// A rejected payment is returned as-is and the order keeps its status.
    /// An order whose total cannot be computed is rejected before the processor runs.
    pub fn settle(&self, order: &mut Order) -> Result<Receipt> {
        let total = order.total_price()?;
        self.processor.pay(order)?;
        Ok(Receipt {
            method: self.method(),
            total,
            status: order.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::AuthorizerRef;
    use crate::error::PaymentError;
    use crate::infrastructure::authorizers::{NotARobot, SmsAuthorizer};
    use crate::infrastructure::processors::{CreditProcessor, DebitProcessor, PaypalProcessor};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn order() -> Order {
        let mut order = Order::new();
        order.add_item("keyboard", 2, dec!(45.50));
        order
    }

    #[test]
    fn test_debit_receipt() {
        let checkout = Checkout::new(Box::new(DebitProcessor::new("4321")));
        let mut order = order();

        let receipt = checkout.settle(&mut order).unwrap();
        assert_eq!(
            receipt,
            Receipt {
                method: PaymentMethod::Debit,
                total: Price::new(dec!(91)),
                status: OrderStatus::Closed,
            }
        );
    }

    #[test]
    fn test_unauthorized_is_propagated() {
        let authorizer: AuthorizerRef = Arc::new(NotARobot::new());
        let checkout = Checkout::new(Box::new(CreditProcessor::new("8765", authorizer)));
        let mut order = order();

        let result = checkout.settle(&mut order);
        assert!(matches!(result, Err(PaymentError::Unauthorized)));
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_overflowing_total_is_not_paid() {
        let checkout = Checkout::new(Box::new(DebitProcessor::new("4321")));
        let mut order = Order::new();
        order.add_item("big", 3, rust_decimal::Decimal::MAX);

        let result = checkout.settle(&mut order);
        assert!(matches!(result, Err(PaymentError::Overflow)));
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_retry_after_confirmation() {
        let authorizer = Arc::new(SmsAuthorizer::new());
        let checkout = Checkout::new(Box::new(PaypalProcessor::new(
            "buyer@example.com",
            authorizer.clone(),
        )));
        let mut order = order();

        assert!(checkout.settle(&mut order).is_err());
        authorizer.confirm_authorization("0000");

        let receipt = checkout.settle(&mut order).unwrap();
        assert_eq!(receipt.method, PaymentMethod::Paypal);
        assert_eq!(receipt.status, OrderStatus::Closed);
    }
}
