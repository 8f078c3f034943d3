use super::plan::PlanId;
use super::pricing::{Installments, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque PIX payment code issued by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PixCode(String);

impl PixCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PixCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Confirmation returned by the provider for an accepted card payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub reference: String,
    pub plan: PlanId,
    pub installments: Installments,
    pub installment_amount: Money,
    pub total: Money,
}
