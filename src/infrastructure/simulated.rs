use crate::domain::card::CardDetails;
use crate::domain::payment::{PaymentReceipt, PixCode};
use crate::domain::plan::PlanId;
use crate::domain::ports::PaymentProvider;
use crate::domain::pricing::{Installments, annual_price, installment_price};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::sync::Arc;
use tokio::sync::RwLock;

const REFERENCE_LEN: usize = 12;
const PIX_CODE_LEN: usize = 32;

/// A card payment accepted by the simulated provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub plan: PlanId,
    pub card_last_four: String,
    pub installments: Installments,
}

/// Stand-in for a real payment gateway.
///
/// Accepts every card payment unless built with [`declining`](Self::declining),
/// and issues either a fixed PIX code or a random one. Accepted submissions
/// are recorded for inspection.
#[derive(Default, Clone)]
pub struct SimulatedPaymentProvider {
    pix_code: Option<String>,
    decline: bool,
    submissions: Arc<RwLock<Vec<Submission>>>,
}

impl SimulatedPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always issues `code` instead of a random PIX code.
    pub fn with_pix_code(mut self, code: impl Into<String>) -> Self {
        self.pix_code = Some(code.into());
        self
    }

    /// Rejects every card payment and PIX request.
    pub fn declining(mut self) -> Self {
        self.decline = true;
        self
    }

    pub async fn submissions(&self) -> Vec<Submission> {
        self.submissions.read().await.clone()
    }
}

fn random_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
        .to_ascii_uppercase()
}

#[async_trait]
impl PaymentProvider for SimulatedPaymentProvider {
    async fn submit_card_payment(
        &self,
        plan_id: PlanId,
        card: &CardDetails,
        installments: Installments,
    ) -> Result<PaymentReceipt> {
        if self.decline {
            return Err(CheckoutError::PaymentError(format!(
                "card ending in {} was declined",
                card.last_four()
            )));
        }

        let plan = plan_id.plan();
        self.submissions.write().await.push(Submission {
            plan: plan_id,
            card_last_four: card.last_four().to_string(),
            installments,
        });

        Ok(PaymentReceipt {
            reference: random_token(REFERENCE_LEN),
            plan: plan_id,
            installments,
            installment_amount: installment_price(plan, installments),
            total: annual_price(plan),
        })
    }

    async fn request_pix_code(&self, plan_id: PlanId) -> Result<PixCode> {
        if self.decline {
            return Err(CheckoutError::PaymentError(format!(
                "PIX code for plan {plan_id} could not be issued"
            )));
        }

        Ok(match &self.pix_code {
            Some(code) => PixCode::new(code.clone()),
            None => PixCode::new(format!(
                "PIX-{}-{}",
                plan_id.as_str().to_ascii_uppercase(),
                random_token(PIX_CODE_LEN)
            )),
        })
    }
}
