pub mod card;
pub mod masks;
pub mod payment;
pub mod plan;
pub mod ports;
pub mod pricing;
pub mod wizard;
