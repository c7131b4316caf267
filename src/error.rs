use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Not authorized.")]
    Unauthorized,
    #[error("Order total is out of range.")]
    Overflow,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
