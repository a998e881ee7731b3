//! # Storefront Handlers

use crate::app::{AppEvent, CheckoutForm, Tasks};
use crate::facades::CustomerDashboardFacade;

/// Place the order; the notes are cleared once the backend accepts it.
///
/// The cart is claimed before the task is spawned, so repeated clicks send one order.
pub(crate) fn handle_checkout(customer: &CustomerDashboardFacade, checkout: &CheckoutForm, tasks: &Tasks) {
    let pending = match customer.begin_order(&checkout.special_instructions) {
        Ok(pending) => pending,
        Err(err) => {
            tracing::debug!(error = %err, "Checkout not started");
            tasks.report(async { AppEvent::CheckoutFinished(false) });
            return;
        }
    };

    let customer = customer.clone();
    tasks.report(async move { AppEvent::CheckoutFinished(customer.submit_order(pending).await.is_ok()) });
}

pub(crate) fn handle_catalog_search(customer: &CustomerDashboardFacade, checkout: &CheckoutForm, tasks: &Tasks) {
    let customer = customer.clone();
    let query = checkout.catalog_query.clone();
    tasks.run(async move {
        let _ = customer.search_catalog(&query).await;
    });
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{apply_next_event, login_answer, test_app};
    use crate::app::AppEvent;
    use crate::services::auth::tests::MockAuthGateway;
    use shared::{Product, Role};

    fn brownie() -> Product {
        Product {
            id: 1,
            name: "Brownie".to_string(),
            description: String::new(),
            price: 3.0,
            image: None,
            category_id: 1,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_checkout_clears_notes_after_success() {
        let gateway = MockAuthGateway::default();
        *gateway.login.lock() = Some(login_answer(Role::Customer));
        let mut app = test_app(gateway);
        app.login.email = "ana@bakery.test".to_string();
        app.login.password = "secret1".to_string();
        app.handle_login_submit();
        apply_next_event(&mut app).await;

        app.customer.add_to_cart(&brownie());
        app.checkout.special_instructions = "Happy birthday Leo".to_string();
        app.handle_checkout();
        apply_next_event(&mut app).await;

        assert!(app.checkout.special_instructions.is_empty());
        assert!(app.customer.snapshot().cart.is_empty());
    }

    #[tokio::test]
    async fn test_double_checkout_places_one_order() {
        let gateway = MockAuthGateway::default();
        *gateway.login.lock() = Some(login_answer(Role::Customer));
        let mut app = test_app(gateway);
        app.login.email = "ana@bakery.test".to_string();
        app.login.password = "secret1".to_string();
        app.handle_login_submit();
        apply_next_event(&mut app).await;

        app.customer.add_to_cart(&brownie());
        app.checkout.special_instructions = "Two candles".to_string();
        app.handle_checkout();
        app.handle_checkout();
        assert!(app.customer.snapshot().is_creating_order);

        let mut placed = 0;
        for _ in 0..2 {
            let event = app.event_rx.recv().await.unwrap();
            if matches!(event, AppEvent::CheckoutFinished(true)) {
                placed += 1;
            }
            app.handle_event(event);
        }

        assert_eq!(placed, 1);
        assert!(app.checkout.special_instructions.is_empty());
    }

    #[tokio::test]
    async fn test_failed_checkout_keeps_notes() {
        let mut app = test_app(MockAuthGateway::default());
        app.checkout.special_instructions = "Leave at the door".to_string();

        app.handle_checkout();
        apply_next_event(&mut app).await;

        assert_eq!(app.checkout.special_instructions, "Leave at the door");
    }
}
