mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_declined_card_payment_is_reported() {
    let script = common::action_script(&[
        "select_plan, silver",
        "continue,",
        "credit_card,",
        "card_number, 4111 1111 1111 9876",
        "installments, 12",
        "submit_payment,",
        "back,",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout-wizard"));
    cmd.arg(script.path()).arg("--decline-payments");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Error processing action: Payment error: card ending in 9876 was declined",
        ))
        .stdout(predicate::str::contains("payment_processed").not())
        // The session stays usable after the failure.
        .stdout(predicate::str::contains(
            r#""action":"go_back","step":2,"outcome":"applied""#,
        ));
}

#[test]
fn test_declined_pix_request_is_reported() {
    let script = common::action_script(&[
        "select_plan, premium",
        "continue,",
        "pix,",
        "generate_pix_code,",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout-wizard"));
    cmd.arg(script.path()).arg("--decline-payments");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error processing action"))
        .stdout(predicate::str::contains("pix_generated").not());
}
