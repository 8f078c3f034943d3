//! Application layer orchestrating a checkout session.
//!
//! UI events arrive as named `Action`s, which the `CheckoutSession` applies to
//! the wizard state through the pure transitions of the domain layer and to
//! the external collaborators behind the domain ports.

pub mod action;
pub mod session;
