use super::action::Action;
use crate::domain::card::CardForm;
use crate::domain::payment::{PaymentReceipt, PixCode};
use crate::domain::ports::{ClipboardBox, FallbackClipboardBox, PaymentProviderBox};
use crate::domain::wizard::{Step, WizardState};
use crate::error::Result;
use tracing::{debug, info, warn};

/// Result view revealed once the checkout has been paid for.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    PixGenerated(PixCode),
    PaymentProcessed(PaymentReceipt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    PixCodeCopied,
    PixCodeCopyFailed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::PixCodeCopied => "Código PIX copiado para a área de transferência!",
            Notification::PixCodeCopyFailed => "Erro ao copiar código PIX. Copie manualmente.",
        }
    }
}

/// What dispatching an action did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The action's precondition did not hold (its button is disabled).
    Ignored,
    Notified(Notification),
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Applied => "applied",
            Outcome::Ignored => "ignored",
            Outcome::Notified(_) => "notified",
        }
    }
}

/// A single checkout session.
///
/// Owns the wizard state, the card form and the collaborators, and applies UI
/// actions to them one at a time. Failed provider calls leave the session
/// exactly as it was before the action.
pub struct CheckoutSession {
    state: WizardState,
    form: CardForm,
    completion: Option<Completion>,
    provider: PaymentProviderBox,
    clipboard: Option<ClipboardBox>,
    fallback_clipboard: FallbackClipboardBox,
}

impl CheckoutSession {
    /// Creates a session at the plan selection step.
    ///
    /// # Arguments
    ///
    /// * `provider` - The payment provider used for card payments and PIX codes.
    /// * `clipboard` - The asynchronous clipboard, if one is available.
    /// * `fallback_clipboard` - The synchronous copy mechanism used when the
    ///   asynchronous clipboard is missing or fails.
    pub fn new(
        provider: PaymentProviderBox,
        clipboard: Option<ClipboardBox>,
        fallback_clipboard: FallbackClipboardBox,
    ) -> Self {
        Self {
            state: WizardState::new(),
            form: CardForm::default(),
            completion: None,
            provider,
            clipboard,
            fallback_clipboard,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn form(&self) -> &CardForm {
        &self.form
    }

    pub fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    /// Applies one UI action.
    ///
    /// Actions whose precondition does not hold are ignored. Errors are only
    /// returned by the payment provider, in which case nothing was changed.
    pub async fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        debug!(action = action.name(), step = self.state.step().number(), "dispatching");

        let outcome = if let Some(completion) = self.completion.clone() {
            self.dispatch_completed(completion, action).await
        } else {
            self.dispatch_active(action).await?
        };

        if outcome == Outcome::Ignored {
            debug!(step = self.state.step().number(), "action ignored");
        }
        Ok(outcome)
    }

    /// Once paid, only copying the PIX code remains possible.
    async fn dispatch_completed(&self, completion: Completion, action: Action) -> Outcome {
        match (completion, action) {
            (Completion::PixGenerated(code), Action::CopyPixCode) => {
                Outcome::Notified(self.copy_pix_code(&code).await)
            }
            _ => Outcome::Ignored,
        }
    }

    async fn dispatch_active(&mut self, action: Action) -> Result<Outcome> {
        if let Some(navigation) = action.navigation() {
            if !self.state.allows(navigation) {
                return Ok(Outcome::Ignored);
            }
            let next = self.state.apply(navigation);
            if next.step() == Step::CardDetails {
                // Installment options are rebuilt for the plan on every entry.
                self.form.installments = None;
            }
            info!(
                from = self.state.step().number(),
                to = next.step().number(),
                plan = ?next.selected_plan_id(),
                "wizard transition"
            );
            self.state = next;
            return Ok(Outcome::Applied);
        }

        let step = self.state.step();
        let outcome = match action {
            Action::EnterHolderName(raw) if step == Step::CardDetails => {
                self.form.set_holder_name(&raw);
                Outcome::Applied
            }
            Action::EnterCardNumber(raw) if step == Step::CardDetails => {
                self.form.set_card_number(&raw);
                Outcome::Applied
            }
            Action::EnterExpiry(raw) if step == Step::CardDetails => {
                self.form.set_expiry(&raw);
                Outcome::Applied
            }
            Action::EnterCvv(raw) if step == Step::CardDetails => {
                self.form.set_cvv(&raw);
                Outcome::Applied
            }
            Action::EnterPhone(raw) if step == Step::CardDetails => {
                self.form.set_phone(&raw);
                Outcome::Applied
            }
            Action::SelectInstallments(installments) if step == Step::CardDetails => {
                self.form.installments = Some(installments);
                Outcome::Applied
            }
            Action::SubmitPayment if step == Step::CardDetails && self.form.can_submit() => {
                self.submit_payment().await?;
                Outcome::Applied
            }
            Action::GeneratePixCode if step == Step::PixDetails => {
                self.generate_pix_code().await?;
                Outcome::Applied
            }
            _ => Outcome::Ignored,
        };
        Ok(outcome)
    }

    async fn submit_payment(&mut self) -> Result<()> {
        let (Some(plan), Some(installments)) =
            (self.state.selected_plan_id(), self.form.installments)
        else {
            return Ok(());
        };
        let card = self.form.details();

        info!(%plan, installments = installments.count(), card = card.last_four(), "submitting card payment");
        let receipt = self
            .provider
            .submit_card_payment(plan, &card, installments)
            .await
            .inspect_err(|e| warn!(error = %e, "card payment failed"))?;

        info!(reference = %receipt.reference, "card payment accepted");
        self.completion = Some(Completion::PaymentProcessed(receipt));
        Ok(())
    }

    async fn generate_pix_code(&mut self) -> Result<()> {
        let Some(plan) = self.state.selected_plan_id() else {
            return Ok(());
        };

        let code = self
            .provider
            .request_pix_code(plan)
            .await
            .inspect_err(|e| warn!(error = %e, "PIX code request failed"))?;

        info!(%plan, "PIX code generated");
        self.completion = Some(Completion::PixGenerated(code));
        Ok(())
    }

    async fn copy_pix_code(&self, code: &PixCode) -> Notification {
        if let Some(clipboard) = &self.clipboard {
            match clipboard.write_text(code.as_str()).await {
                Ok(()) => return Notification::PixCodeCopied,
                Err(e) => warn!(error = %e, "clipboard write failed, falling back"),
            }
        } else {
            debug!("no clipboard available, falling back");
        }

        match self.fallback_clipboard.copy_text(code.as_str()) {
            Ok(()) => Notification::PixCodeCopied,
            Err(e) => {
                warn!(error = %e, "fallback copy failed");
                Notification::PixCodeCopyFailed
            }
        }
    }
}
