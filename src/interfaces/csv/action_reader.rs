use crate::application::action::Action;
use crate::domain::plan::PlanId;
use crate::domain::pricing::Installments;
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum ActionKind {
    SelectPlan,
    #[serde(alias = "continue")]
    ContinueFromPlan,
    #[serde(alias = "credit_card")]
    ChooseCreditCard,
    #[serde(alias = "pix")]
    ChoosePix,
    #[serde(alias = "back")]
    GoBack,
    HolderName,
    CardNumber,
    Expiry,
    Cvv,
    Phone,
    Installments,
    GeneratePixCode,
    CopyPixCode,
    SubmitPayment,
}

/// One row of an action script: `action, value`.
#[derive(Debug, Deserialize)]
struct ActionRecord {
    action: ActionKind,
    value: Option<String>,
}

impl ActionRecord {
    fn value(self) -> Result<String> {
        self.value.ok_or_else(|| {
            CheckoutError::ValidationError(format!("Action {:?} requires a value", self.action))
        })
    }
}

impl TryFrom<ActionRecord> for Action {
    type Error = CheckoutError;

    fn try_from(record: ActionRecord) -> Result<Self> {
        let action = match record.action {
            ActionKind::SelectPlan => Action::SelectPlan(record.value()?.parse::<PlanId>()?),
            ActionKind::ContinueFromPlan => Action::ContinueFromPlan,
            ActionKind::ChooseCreditCard => Action::ChooseCreditCard,
            ActionKind::ChoosePix => Action::ChoosePix,
            ActionKind::GoBack => Action::GoBack,
            ActionKind::HolderName => Action::EnterHolderName(record.value()?),
            ActionKind::CardNumber => Action::EnterCardNumber(record.value()?),
            ActionKind::Expiry => Action::EnterExpiry(record.value()?),
            ActionKind::Cvv => Action::EnterCvv(record.value()?),
            ActionKind::Phone => Action::EnterPhone(record.value()?),
            ActionKind::Installments => {
                let raw = record.value()?;
                let count = raw.parse::<u8>().map_err(|_| {
                    CheckoutError::ValidationError(format!("Invalid installments: {raw}"))
                })?;
                Action::SelectInstallments(Installments::new(count)?)
            }
            ActionKind::GeneratePixCode => Action::GeneratePixCode,
            ActionKind::CopyPixCode => Action::CopyPixCode,
            ActionKind::SubmitPayment => Action::SubmitPayment,
        };
        Ok(action)
    }
}

/// Reads UI actions from a CSV script.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Action>`.
/// Whitespace is trimmed and the `value` column may be left out for actions
/// that take none.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts actions.
    ///
    /// A malformed row yields an error without ending the stream.
    pub fn actions(self) -> impl Iterator<Item = Result<Action>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(CheckoutError::from)
                .and_then(|record: ActionRecord| Action::try_from(record))
        })
    }
}
