use crate::error::CheckoutError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the subscription tiers in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Silver,
    Premium,
}

impl PlanId {
    pub const ALL: [PlanId; 2] = [PlanId::Silver, PlanId::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Silver => "silver",
            PlanId::Premium => "premium",
        }
    }

    /// Looks the plan up in the catalog.
    pub fn plan(&self) -> &'static Plan {
        match self {
            PlanId::Silver => &SILVER,
            PlanId::Premium => &PREMIUM,
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silver" => Ok(PlanId::Silver),
            "premium" => Ok(PlanId::Premium),
            other => Err(CheckoutError::ValidationError(format!(
                "Unknown plan: {other}"
            ))),
        }
    }
}

/// A subscription tier with a fixed monthly price.
///
/// Plans only exist as entries of the static catalog and are always handed
/// out by reference.
#[derive(Debug, PartialEq, Serialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    /// Monthly price in BRL.
    pub price: Decimal,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub static SILVER: Plan = Plan {
    id: PlanId::Silver,
    name: "Plano Silver",
    price: dec!(20.90),
    description: "Todos os cursos liberados",
    features: &[
        "Qualidade Boa",
        "Suporte ao aluno",
        "Carta para Estágio",
        "Certificado",
    ],
};

pub static PREMIUM: Plan = Plan {
    id: PlanId::Premium,
    name: "Plano Premium",
    price: dec!(34.90),
    description: "Todos os cursos liberados",
    features: &[
        "Qualidade Fantástica",
        "Suporte ao aluno",
        "Com Carta para Estágio",
        "Com Certificado",
    ],
};

/// The full catalog, in display order.
pub fn catalog() -> [&'static Plan; 2] {
    PlanId::ALL.map(|id| id.plan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prices() {
        assert_eq!(PlanId::Silver.plan().price, dec!(20.90));
        assert_eq!(PlanId::Premium.plan().price, dec!(34.90));
    }

    #[test]
    fn test_catalog_order_and_ids() {
        let plans = catalog();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id, PlanId::Silver);
        assert_eq!(plans[1].id, PlanId::Premium);
        assert!(plans.iter().all(|p| p.features.len() == 4));
    }

    #[test]
    fn test_plan_id_parsing() {
        assert_eq!("premium".parse::<PlanId>().unwrap(), PlanId::Premium);
        assert_eq!(" Silver ".parse::<PlanId>().unwrap(), PlanId::Silver);
        assert!(matches!(
            "gold".parse::<PlanId>(),
            Err(CheckoutError::ValidationError(_))
        ));
    }
}
