use crate::domain::plan::PlanId;
use crate::domain::pricing::Installments;
use crate::domain::wizard::Navigation;

/// A named UI action, as emitted by clicks and form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectPlan(PlanId),
    ContinueFromPlan,
    ChooseCreditCard,
    ChoosePix,
    GoBack,
    EnterHolderName(String),
    EnterCardNumber(String),
    EnterExpiry(String),
    EnterCvv(String),
    EnterPhone(String),
    SelectInstallments(Installments),
    GeneratePixCode,
    CopyPixCode,
    SubmitPayment,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectPlan(_) => "select_plan",
            Action::ContinueFromPlan => "continue_from_plan",
            Action::ChooseCreditCard => "choose_credit_card",
            Action::ChoosePix => "choose_pix",
            Action::GoBack => "go_back",
            Action::EnterHolderName(_) => "holder_name",
            Action::EnterCardNumber(_) => "card_number",
            Action::EnterExpiry(_) => "expiry",
            Action::EnterCvv(_) => "cvv",
            Action::EnterPhone(_) => "phone",
            Action::SelectInstallments(_) => "installments",
            Action::GeneratePixCode => "generate_pix_code",
            Action::CopyPixCode => "copy_pix_code",
            Action::SubmitPayment => "submit_payment",
        }
    }

    /// The state machine transition behind this action, if it is a navigation.
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            Action::SelectPlan(plan) => Some(Navigation::SelectPlan(*plan)),
            Action::ContinueFromPlan => Some(Navigation::ContinueFromPlan),
            Action::ChooseCreditCard => Some(Navigation::ChooseCreditCard),
            Action::ChoosePix => Some(Navigation::ChoosePix),
            Action::GoBack => Some(Navigation::GoBack),
            _ => None,
        }
    }
}
