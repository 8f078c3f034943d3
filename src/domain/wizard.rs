use super::plan::{Plan, PlanId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Pix,
}

/// Wizard steps, numbered from 1 as shown in the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PlanSelect = 1,
    PaymentMethodSelect = 2,
    CardDetails = 3,
    PixDetails = 4,
}

impl Step {
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

/// Navigation actions understood by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    SelectPlan(PlanId),
    ContinueFromPlan,
    ChooseCreditCard,
    ChoosePix,
    GoBack,
}

/// Position of a checkout session in the wizard.
///
/// Each variant carries exactly the selections valid for its step, so a
/// payment step can never be reached without a plan, and step 2 can never
/// hold a payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardState {
    PlanSelect {
        selected: Option<PlanId>,
    },
    PaymentMethodSelect {
        plan: PlanId,
    },
    CardDetails {
        plan: PlanId,
    },
    PixDetails {
        plan: PlanId,
    },
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        WizardState::PlanSelect { selected: None }
    }

    pub fn step(&self) -> Step {
        match *self {
            WizardState::PlanSelect { .. } => Step::PlanSelect,
            WizardState::PaymentMethodSelect { .. } => Step::PaymentMethodSelect,
            WizardState::CardDetails { .. } => Step::CardDetails,
            WizardState::PixDetails { .. } => Step::PixDetails,
        }
    }

    pub fn selected_plan_id(&self) -> Option<PlanId> {
        match *self {
            WizardState::PlanSelect { selected } => selected,
            WizardState::PaymentMethodSelect { plan }
            | WizardState::CardDetails { plan }
            | WizardState::PixDetails { plan } => Some(plan),
        }
    }

    pub fn selected_plan(&self) -> Option<&'static Plan> {
        self.selected_plan_id().map(|id| id.plan())
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        match self {
            WizardState::CardDetails { .. } => Some(PaymentMethod::CreditCard),
            WizardState::PixDetails { .. } => Some(PaymentMethod::Pix),
            _ => None,
        }
    }

    pub fn can_continue(&self) -> bool {
        matches!(self, WizardState::PlanSelect { selected: Some(_) })
    }

    pub fn can_choose_payment_method(&self) -> bool {
        matches!(self, WizardState::PaymentMethodSelect { .. })
    }

    pub fn can_go_back(&self) -> bool {
        self.step() != Step::PlanSelect
    }

    /// Whether the control triggering `navigation` is enabled in this state.
    pub fn allows(&self, navigation: Navigation) -> bool {
        match navigation {
            Navigation::SelectPlan(_) => self.step() == Step::PlanSelect,
            Navigation::ContinueFromPlan => self.can_continue(),
            Navigation::ChooseCreditCard | Navigation::ChoosePix => {
                self.can_choose_payment_method()
            }
            Navigation::GoBack => self.can_go_back(),
        }
    }

    pub fn select_plan(self, plan: PlanId) -> Self {
        match self {
            WizardState::PlanSelect { .. } => WizardState::PlanSelect {
                selected: Some(plan),
            },
            other => other,
        }
    }

    pub fn continue_from_plan(self) -> Self {
        match self {
            WizardState::PlanSelect {
                selected: Some(plan),
            } => WizardState::PaymentMethodSelect { plan },
            other => other,
        }
    }

    pub fn choose_credit_card(self) -> Self {
        match self {
            WizardState::PaymentMethodSelect { plan } => WizardState::CardDetails { plan },
            other => other,
        }
    }

    pub fn choose_pix(self) -> Self {
        match self {
            WizardState::PaymentMethodSelect { plan } => WizardState::PixDetails { plan },
            other => other,
        }
    }

    /// Steps back one screen, dropping the selection made on the screen left.
    pub fn go_back(self) -> Self {
        match self {
            WizardState::PaymentMethodSelect { .. } => Self::new(),
            WizardState::CardDetails { plan } | WizardState::PixDetails { plan } => {
                WizardState::PaymentMethodSelect { plan }
            }
            other => other,
        }
    }

    pub fn apply(self, navigation: Navigation) -> Self {
        match navigation {
            Navigation::SelectPlan(plan) => self.select_plan(plan),
            Navigation::ContinueFromPlan => self.continue_from_plan(),
            Navigation::ChooseCreditCard => self.choose_credit_card(),
            Navigation::ChoosePix => self.choose_pix(),
            Navigation::GoBack => self.go_back(),
        }
    }
}
