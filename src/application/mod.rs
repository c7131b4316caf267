//! Application layer containing the checkout orchestration.
//!
//! `Checkout` is the entry point for paying an order. It depends only on the
//! domain ports, so any processor/authorizer pair can be plugged in.

pub mod checkout;
