use super::plan::Plan;
use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Months billed by an annual subscription.
pub const MONTHS_PER_YEAR: u8 = 12;

/// A monetary value in BRL.
///
/// Wraps `rust_decimal::Decimal` so prices never go through floating point.
/// Values are kept at full precision; rounding is left to the formatting layer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;
    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

/// Number of installments an annual price is split into.
///
/// Always within `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Installments(u8);

impl Installments {
    pub const FULL_PAYMENT: Self = Self(1);
    pub const MAX: Self = Self(MONTHS_PER_YEAR);

    pub fn new(count: u8) -> Result<Self, CheckoutError> {
        if (1..=MONTHS_PER_YEAR).contains(&count) {
            Ok(Self(count))
        } else {
            Err(CheckoutError::ValidationError(format!(
                "Installments must be between 1 and {MONTHS_PER_YEAR}, got {count}"
            )))
        }
    }

    pub fn count(&self) -> u8 {
        self.0
    }

    pub fn is_full_payment(&self) -> bool {
        self.0 == 1
    }

    /// Every valid installment count, ascending.
    pub fn all() -> impl Iterator<Item = Installments> {
        (1..=MONTHS_PER_YEAR).map(Installments)
    }
}

impl TryFrom<u8> for Installments {
    type Error = CheckoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Installments> for u8 {
    fn from(installments: Installments) -> Self {
        installments.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentLabel {
    /// Single payment of the whole annual price ("à vista").
    FullPayment,
    InstallmentsOf,
}

/// One entry of the installment selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstallmentOption {
    pub installments: Installments,
    pub amount: Money,
    pub label: InstallmentLabel,
}

pub fn monthly_price(plan: &Plan) -> Money {
    Money(plan.price)
}

pub fn annual_price(plan: &Plan) -> Money {
    monthly_price(plan) * Decimal::from(MONTHS_PER_YEAR)
}

pub fn installment_price(plan: &Plan, installments: Installments) -> Money {
    annual_price(plan) / Decimal::from(installments.count())
}

/// Builds the twelve installment options offered for a plan, from 1x to 12x.
pub fn installment_options(plan: &Plan) -> Vec<InstallmentOption> {
    Installments::all()
        .map(|installments| InstallmentOption {
            installments,
            amount: installment_price(plan, installments),
            label: if installments.is_full_payment() {
                InstallmentLabel::FullPayment
            } else {
                InstallmentLabel::InstallmentsOf
            },
        })
        .collect()
}
