use crate::application::session::CheckoutSession;
use crate::domain::ports::ClipboardBox;
use crate::infrastructure::file::FileClipboard;
use crate::infrastructure::in_memory::InMemoryClipboard;
use crate::infrastructure::simulated::SimulatedPaymentProvider;
use crate::interfaces::format::CurrencyFormat;
use std::path::PathBuf;

/// Settings of a checkout run, assembled from the command line.
#[derive(Debug, Clone, Default)]
pub struct CheckoutConfig {
    pub format: CurrencyFormat,
    /// Fixed PIX code to issue instead of a random one.
    pub pix_code: Option<String>,
    pub decline_payments: bool,
    /// Target of the asynchronous clipboard. Without it every copy goes
    /// through the in-memory fallback.
    pub clipboard_file: Option<PathBuf>,
}

impl CheckoutConfig {
    pub fn provider(&self) -> SimulatedPaymentProvider {
        let mut provider = SimulatedPaymentProvider::new();
        if let Some(code) = &self.pix_code {
            provider = provider.with_pix_code(code.clone());
        }
        if self.decline_payments {
            provider = provider.declining();
        }
        provider
    }

    pub fn clipboard(&self) -> Option<ClipboardBox> {
        self.clipboard_file
            .as_ref()
            .map(|path| Box::new(FileClipboard::new(path)) as ClipboardBox)
    }

    /// Builds a fresh session wired to the configured collaborators.
    pub fn build_session(&self) -> CheckoutSession {
        CheckoutSession::new(
            Box::new(self.provider()),
            self.clipboard(),
            Box::new(InMemoryClipboard::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::action::Action;
    use crate::application::session::{Notification, Outcome};
    use crate::domain::plan::PlanId;

    #[tokio::test]
    async fn test_session_from_config_copies_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipboard.txt");
        let config = CheckoutConfig {
            pix_code: Some("PIX-CONFIG".to_string()),
            clipboard_file: Some(path.clone()),
            ..CheckoutConfig::default()
        };

        let mut session = config.build_session();
        session.dispatch(Action::SelectPlan(PlanId::Silver)).await.unwrap();
        session.dispatch(Action::ContinueFromPlan).await.unwrap();
        session.dispatch(Action::ChoosePix).await.unwrap();
        session.dispatch(Action::GeneratePixCode).await.unwrap();

        let outcome = session.dispatch(Action::CopyPixCode).await.unwrap();
        assert_eq!(outcome, Outcome::Notified(Notification::PixCodeCopied));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "PIX-CONFIG");
    }

    #[test]
    fn test_default_config() {
        let config = CheckoutConfig::default();
        assert!(config.clipboard().is_none());
        assert_eq!(config.format, CurrencyFormat::default());
    }
}
