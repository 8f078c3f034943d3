//! Display masks for the checkout form inputs.
//!
//! Every mask first strips all non-digit characters and then re-applies the
//! layout, so feeding a mask its own output (or a pasted, already formatted
//! value) yields the same string.

pub const PHONE_MAX_DIGITS: usize = 11;
pub const CARD_NUMBER_MAX_DIGITS: usize = 16;
pub const EXPIRY_MAX_DIGITS: usize = 4;
pub const CVV_MAX_DIGITS: usize = 4;

fn digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Brazilian phone number: 2-digit area code followed by 8 or 9 digits.
///
/// `(11) 98765-4321` for mobile numbers, `(11) 8765-4321` for landlines.
/// Partial input is masked progressively while it is typed.
pub fn phone(raw: &str) -> String {
    let d = digits(raw, PHONE_MAX_DIGITS);
    match d.len() {
        0..=2 => d,
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// Card number in space-separated groups of four digits.
pub fn card_number(raw: &str) -> String {
    let d = digits(raw, CARD_NUMBER_MAX_DIGITS);
    let mut masked = String::with_capacity(d.len() + d.len() / 4);
    for (i, c) in d.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            masked.push(' ');
        }
        masked.push(c);
    }
    masked
}

/// Card expiry as `MM/YY`.
pub fn expiry(raw: &str) -> String {
    let d = digits(raw, EXPIRY_MAX_DIGITS);
    if d.len() < 2 {
        d
    } else {
        format!("{}/{}", &d[..2], &d[2..])
    }
}

pub fn cvv(raw: &str) -> String {
    digits(raw, CVV_MAX_DIGITS)
}

/// Cardholder name with surrounding and repeated whitespace removed.
pub fn holder_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
