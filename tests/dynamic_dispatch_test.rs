use checkout_wizard::domain::card::CardForm;
use checkout_wizard::domain::plan::PlanId;
use checkout_wizard::domain::ports::{ClipboardBox, FallbackClipboardBox, PaymentProviderBox};
use checkout_wizard::domain::pricing::Installments;
use checkout_wizard::infrastructure::in_memory::InMemoryClipboard;
use checkout_wizard::infrastructure::simulated::SimulatedPaymentProvider;

#[tokio::test]
async fn test_ports_as_trait_objects() {
    let provider: PaymentProviderBox = Box::new(SimulatedPaymentProvider::new());
    let clipboard: ClipboardBox = Box::new(InMemoryClipboard::new());
    let fallback: FallbackClipboardBox = Box::new(InMemoryClipboard::new());

    let mut form = CardForm::default();
    form.set_card_number("5555444433332222");
    let card = form.details();

    // Verify Send + Sync by spawning tasks
    let provider_handle = tokio::spawn(async move {
        let receipt = provider
            .submit_card_payment(PlanId::Premium, &card, Installments::new(6).unwrap())
            .await
            .unwrap();
        let code = provider.request_pix_code(PlanId::Premium).await.unwrap();
        (receipt, code)
    });

    let clipboard_handle = tokio::spawn(async move {
        clipboard.write_text("async").await.unwrap();
        fallback.copy_text("sync").unwrap();
    });

    let (receipt, code) = provider_handle.await.unwrap();
    assert_eq!(receipt.plan, PlanId::Premium);
    assert_eq!(receipt.installments.count(), 6);
    assert!(!code.as_str().is_empty());

    clipboard_handle.await.unwrap();
}
