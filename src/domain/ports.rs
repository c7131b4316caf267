use super::order::Order;
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Capability of telling whether a payment may proceed.
pub trait Authorizer: Send + Sync {
    fn is_authorized(&self) -> bool;
}

/// Capability of settling an order.
///
/// A successful `pay` leaves the order `Closed`. A failed one leaves it untouched.
pub trait PaymentProcessor: Send + Sync {
    fn method(&self) -> PaymentMethod;
    fn pay(&self, order: &mut Order) -> Result<()>;
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Debit,
    Credit,
    Paypal,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Debit => f.write_str("debit"),
            PaymentMethod::Credit => f.write_str("credit"),
            PaymentMethod::Paypal => f.write_str("paypal"),
        }
    }
}

pub type AuthorizerRef = Arc<dyn Authorizer>;
pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
