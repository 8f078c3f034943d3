use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckoutError>;

#[derive(Error, Diagnostic, Debug)]
pub enum CheckoutError {
    #[error("CSV error: {0}")]
    #[diagnostic(code(checkout::csv))]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(checkout::io))]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    #[diagnostic(code(checkout::json))]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    #[diagnostic(code(checkout::validation))]
    ValidationError(String),
    #[error("Payment error: {0}")]
    #[diagnostic(
        code(checkout::payment),
        help("the checkout session was left unchanged, the payment can be retried")
    )]
    PaymentError(String),
    #[error("Clipboard error: {0}")]
    #[diagnostic(code(checkout::clipboard))]
    ClipboardError(String),
}
