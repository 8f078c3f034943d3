use super::masks;
use super::pricing::Installments;
use serde::Serialize;

/// Card form as typed by the user. Every field holds its masked display value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CardForm {
    pub holder_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub phone: String,
    pub installments: Option<Installments>,
}

/// Card data handed to the payment provider. Only built from a [`CardForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    holder_name: String,
    number: String,
    expiry: String,
    cvv: String,
    phone: String,
}

impl CardDetails {
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Digits only.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Up to the last four characters of the number.
    pub fn last_four(&self) -> &str {
        let start = self
            .number
            .char_indices()
            .rev()
            .nth(3)
            .map_or(0, |(i, _)| i);
        &self.number[start..]
    }
}

impl CardForm {
    pub fn set_holder_name(&mut self, raw: &str) {
        self.holder_name = masks::holder_name(raw);
    }

    pub fn set_card_number(&mut self, raw: &str) {
        self.card_number = masks::card_number(raw);
    }

    pub fn set_expiry(&mut self, raw: &str) {
        self.expiry = masks::expiry(raw);
    }

    pub fn set_cvv(&mut self, raw: &str) {
        self.cvv = masks::cvv(raw);
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.phone = masks::phone(raw);
    }

    /// The submit button stays disabled until an installment plan is chosen.
    pub fn can_submit(&self) -> bool {
        self.installments.is_some()
    }

    pub fn details(&self) -> CardDetails {
        CardDetails {
            holder_name: self.holder_name.clone(),
            number: self.card_number.chars().filter(char::is_ascii_digit).collect(),
            expiry: self.expiry.clone(),
            cvv: self.cvv.clone(),
            phone: self.phone.clone(),
        }
    }
}
