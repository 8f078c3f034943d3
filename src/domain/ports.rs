use super::card::CardDetails;
use super::payment::{PaymentReceipt, PixCode};
use super::plan::PlanId;
use super::pricing::Installments;
use crate::error::Result;
use async_trait::async_trait;

/// External payment collaborator that settles card payments and issues PIX codes.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn submit_card_payment(
        &self,
        plan_id: PlanId,
        card: &CardDetails,
        installments: Installments,
    ) -> Result<PaymentReceipt>;
    async fn request_pix_code(&self, plan_id: PlanId) -> Result<PixCode>;
}

/// Asynchronous system clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Synchronous copy mechanism used when the asynchronous clipboard fails.
pub trait FallbackClipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<()>;
}

pub type PaymentProviderBox = Box<dyn PaymentProvider>;
pub type ClipboardBox = Box<dyn Clipboard>;
pub type FallbackClipboardBox = Box<dyn FallbackClipboard>;
