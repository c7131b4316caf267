use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::{AuthorizerRef, PaymentMethod, PaymentProcessor};
use crate::error::{PaymentError, Result};
use tracing::info;

/// Pays with a debit card. No authorization gate.
#[derive(Debug, Clone)]
pub struct DebitProcessor {
    security_code: String,
}

impl DebitProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
        }
    }
}

impl PaymentProcessor for DebitProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Debit
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        info!("Processing payment method: {}", self.method());
        info!("Verifying the security code: {}", self.security_code);
        order.set_status(OrderStatus::Closed);
        Ok(())
    }
}

/// Pays with a credit card once the shared authorizer says so.
pub struct CreditProcessor {
    security_code: String,
    authorizer: AuthorizerRef,
}

impl CreditProcessor {
    /// Creates a new `CreditProcessor`.
    ///
    /// # Arguments
    ///
    /// * `security_code` - The card's security code, echoed during verification.
    /// * `authorizer` - Shared gate; it may still be confirmed after this call.
    pub fn new(security_code: impl Into<String>, authorizer: AuthorizerRef) -> Self {
        Self {
            security_code: security_code.into(),
            authorizer,
        }
    }
}

impl PaymentProcessor for CreditProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Credit
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        if !self.authorizer.is_authorized() {
            return Err(PaymentError::Unauthorized);
        }
        info!("Processing payment method: {}", self.method());
        info!("Verifying the security code: {}", self.security_code);
        order.set_status(OrderStatus::Closed);
        Ok(())
    }
}

/// Pays through a PayPal account identified by email.
pub struct PaypalProcessor {
    email: String,
    authorizer: AuthorizerRef,
}

impl PaypalProcessor {
    pub fn new(email: impl Into<String>, authorizer: AuthorizerRef) -> Self {
        Self {
            email: email.into(),
            authorizer,
        }
    }
}

impl PaymentProcessor for PaypalProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Paypal
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        if !self.authorizer.is_authorized() {
            return Err(PaymentError::Unauthorized);
        }
        info!("Processing payment method: {}", self.method());
        info!("Verifying the email: {}", self.email);
        order.set_status(OrderStatus::Closed);
        Ok(())
    }
}
