//! Rendered output of each wizard screen.
//!
//! Views carry both the raw decimal amounts and their formatted display
//! strings, so a consumer can either show them as-is or re-format them.

use super::format::CurrencyFormat;
use crate::application::session::{CheckoutSession, Completion};
use crate::domain::card::CardForm;
use crate::domain::payment::{PaymentReceipt, PixCode};
use crate::domain::plan::{Plan, PlanId, catalog};
use crate::domain::pricing::{
    InstallmentLabel, Money, annual_price, installment_options, monthly_price,
};
use crate::domain::wizard::WizardState;
use rust_decimal::Decimal;
use serde::Serialize;

pub const PAYMENT_PROCESSED_MESSAGE: &str =
    "Processando pagamento... Redirecionando para área do aluno!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    pub amount: Decimal,
    pub display: String,
}

impl Price {
    fn new(money: Money, display: String) -> Self {
        Self {
            amount: money.value(),
            display,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanCard {
    pub id: PlanId,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: Price,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub id: PlanId,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallmentChoice {
    pub installments: u8,
    pub amount: Decimal,
    pub label: InstallmentLabel,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum View {
    PlanSelect {
        plans: Vec<PlanCard>,
        continue_enabled: bool,
    },
    PaymentMethodSelect {
        summary: PlanSummary,
    },
    CardDetails {
        summary: PlanSummary,
        annual_framing: String,
        monthly_price: Price,
        installment_options: Vec<InstallmentChoice>,
        form: CardForm,
        submit_enabled: bool,
    },
    PixDetails {
        summary: PlanSummary,
        annual_framing: String,
        annual_price: Price,
    },
    PixGenerated {
        plan_name: &'static str,
        annual_framing: String,
        annual_price: Price,
        pix_code: PixCode,
    },
    PaymentProcessed {
        message: &'static str,
        plan_name: &'static str,
        installment: String,
        receipt: PaymentReceipt,
    },
}

fn summary(plan: &Plan, format: &CurrencyFormat) -> PlanSummary {
    let monthly = monthly_price(plan);
    PlanSummary {
        id: plan.id,
        name: plan.name,
        description: plan.description,
        price: Price::new(monthly, format.monthly(monthly)),
    }
}

fn plan_select(selected: Option<PlanId>, format: &CurrencyFormat) -> View {
    let plans = catalog()
        .into_iter()
        .map(|plan| {
            let monthly = monthly_price(plan);
            PlanCard {
                id: plan.id,
                name: plan.name,
                description: plan.description,
                features: plan.features,
                price: Price::new(monthly, format.monthly(monthly)),
                selected: selected == Some(plan.id),
            }
        })
        .collect();
    View::PlanSelect {
        plans,
        continue_enabled: selected.is_some(),
    }
}

fn card_details(plan: &Plan, form: &CardForm, format: &CurrencyFormat) -> View {
    let monthly = monthly_price(plan);
    let installment_options = installment_options(plan)
        .iter()
        .map(|option| InstallmentChoice {
            installments: option.installments.count(),
            amount: option.amount.value(),
            label: option.label,
            text: format.installment(option),
            selected: form.installments == Some(option.installments),
        })
        .collect();
    View::CardDetails {
        summary: summary(plan, format),
        annual_framing: format!("Assinatura anual ({})", format.twelve_times(monthly)),
        monthly_price: Price::new(monthly, format.price(monthly)),
        installment_options,
        form: form.clone(),
        submit_enabled: form.can_submit(),
    }
}

fn pix_framing(plan: &Plan, format: &CurrencyFormat) -> (String, Price) {
    let annual = annual_price(plan);
    (
        format!("Equivale a {}", format.twelve_times(monthly_price(plan))),
        Price::new(annual, format.price(annual)),
    )
}

fn render_completion(completion: &Completion, plan: &Plan, format: &CurrencyFormat) -> View {
    match completion {
        Completion::PixGenerated(code) => {
            let (annual_framing, annual_price) = pix_framing(plan, format);
            View::PixGenerated {
                plan_name: plan.name,
                annual_framing,
                annual_price,
                pix_code: code.clone(),
            }
        }
        Completion::PaymentProcessed(receipt) => View::PaymentProcessed {
            message: PAYMENT_PROCESSED_MESSAGE,
            plan_name: plan.name,
            installment: format!(
                "{}x de {}",
                receipt.installments.count(),
                format.price(receipt.installment_amount)
            ),
            receipt: receipt.clone(),
        },
    }
}

/// Renders the screen a session currently shows.
pub fn render(session: &CheckoutSession, format: &CurrencyFormat) -> View {
    if let (Some(completion), Some(plan)) = (session.completion(), session.state().selected_plan())
    {
        return render_completion(completion, plan, format);
    }

    match session.state() {
        WizardState::PlanSelect { selected } => plan_select(selected, format),
        WizardState::PaymentMethodSelect { plan } => View::PaymentMethodSelect {
            summary: summary(plan.plan(), format),
        },
        WizardState::CardDetails { plan } => card_details(plan.plan(), session.form(), format),
        WizardState::PixDetails { plan } => {
            let (annual_framing, annual_price) = pix_framing(plan.plan(), format);
            View::PixDetails {
                summary: summary(plan.plan(), format),
                annual_framing,
                annual_price,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::action::Action;
    use crate::domain::pricing::Installments;
    use crate::infrastructure::in_memory::InMemoryClipboard;
    use crate::infrastructure::simulated::SimulatedPaymentProvider;
    use rust_decimal_macros::dec;

    fn session() -> CheckoutSession {
        CheckoutSession::new(
            Box::new(SimulatedPaymentProvider::new().with_pix_code("PIX-TEST")),
            None,
            Box::new(InMemoryClipboard::new()),
        )
    }

    #[tokio::test]
    async fn test_plan_select_view() {
        let format = CurrencyFormat::default();
        let mut session = session();

        let View::PlanSelect { plans, continue_enabled } = render(&session, &format) else {
            panic!("expected plan selection");
        };
        assert_eq!(plans.len(), 2);
        assert!(!continue_enabled);
        assert!(plans.iter().all(|p| !p.selected));

        session.dispatch(Action::SelectPlan(PlanId::Premium)).await.unwrap();
        let View::PlanSelect { plans, continue_enabled } = render(&session, &format) else {
            panic!("expected plan selection");
        };
        assert!(continue_enabled);
        assert!(plans[1].selected);
        assert_eq!(plans[1].price.display, "R$ 34,90/mês");
    }

    #[tokio::test]
    async fn test_card_details_view() {
        let format = CurrencyFormat::default();
        let mut session = session();
        session.dispatch(Action::SelectPlan(PlanId::Premium)).await.unwrap();
        session.dispatch(Action::ContinueFromPlan).await.unwrap();
        session.dispatch(Action::ChooseCreditCard).await.unwrap();
        session
            .dispatch(Action::SelectInstallments(Installments::new(3).unwrap()))
            .await
            .unwrap();

        let View::CardDetails {
            annual_framing,
            monthly_price,
            installment_options,
            submit_enabled,
            ..
        } = render(&session, &format)
        else {
            panic!("expected card details");
        };
        assert_eq!(annual_framing, "Assinatura anual (12x R$ 34,90)");
        assert_eq!(monthly_price.display, "R$ 34,90");
        assert_eq!(installment_options.len(), 12);
        assert_eq!(installment_options[0].text, "1x de R$ 418,80 (à vista)");
        assert_eq!(installment_options[2].amount, dec!(139.60));
        assert!(installment_options[2].selected);
        assert!(submit_enabled);
    }

    #[tokio::test]
    async fn test_pix_views() {
        let format = CurrencyFormat::default();
        let mut session = session();
        session.dispatch(Action::SelectPlan(PlanId::Silver)).await.unwrap();
        session.dispatch(Action::ContinueFromPlan).await.unwrap();
        session.dispatch(Action::ChoosePix).await.unwrap();

        let View::PixDetails { annual_framing, annual_price, .. } = render(&session, &format)
        else {
            panic!("expected PIX details");
        };
        assert_eq!(annual_framing, "Equivale a 12x R$ 20,90");
        assert_eq!(annual_price.display, "R$ 250,80");

        session.dispatch(Action::GeneratePixCode).await.unwrap();
        let View::PixGenerated { plan_name, pix_code, .. } = render(&session, &format) else {
            panic!("expected generated PIX");
        };
        assert_eq!(plan_name, "Plano Silver");
        assert_eq!(pix_code, PixCode::new("PIX-TEST"));
    }
}
