use crate::domain::pricing::{InstallmentLabel, InstallmentOption, Money};
use rust_decimal::RoundingStrategy;

/// Presentation of monetary values: symbol, decimal separator, 2 decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
        }
    }
}

impl CurrencyFormat {
    /// The amount alone, rounded half away from zero: `34,90`.
    pub fn amount(&self, money: Money) -> String {
        let rounded = money
            .value()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let plain = format!("{rounded:.2}");
        if self.decimal_separator == '.' {
            plain
        } else {
            plain.replace('.', &self.decimal_separator.to_string())
        }
    }

    /// `R$ 34,90`
    pub fn price(&self, money: Money) -> String {
        format!("{} {}", self.symbol, self.amount(money))
    }

    /// `R$ 34,90/mês`
    pub fn monthly(&self, money: Money) -> String {
        format!("{}/mês", self.price(money))
    }

    /// `12x R$ 34,90`
    pub fn twelve_times(&self, monthly: Money) -> String {
        format!("12x {}", self.price(monthly))
    }

    /// `1x de R$ 418,80 (à vista)` or `3x de R$ 139,60`.
    pub fn installment(&self, option: &InstallmentOption) -> String {
        let base = format!(
            "{}x de {}",
            option.installments.count(),
            self.price(option.amount)
        );
        match option.label {
            InstallmentLabel::FullPayment => format!("{base} (à vista)"),
            InstallmentLabel::InstallmentsOf => base,
        }
    }
}
