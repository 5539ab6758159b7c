//! Simulated order processing.
//!
//! There is no payment gateway behind this storefront. A validated
//! checkout submission waits a configurable processing delay, gets an
//! order number, and always succeeds.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::instrument;

use elitestore_core::checkout::CheckoutForm;
use elitestore_core::totals::OrderTotals;

/// Characters allowed after the `ORD-` prefix of an order number.
const ORDER_NUMBER_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the random portion of an order number.
const ORDER_NUMBER_LENGTH: usize = 9;

/// Days between order placement and estimated delivery.
const DELIVERY_WINDOW_DAYS: i64 = 5;

/// Confirmation for a successfully placed order.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    /// Customer-facing reference, `ORD-` plus nine random characters.
    pub order_number: String,
    /// Address the (notional) confirmation email goes to.
    pub email: String,
    pub item_count: u64,
    pub totals: OrderTotals,
    pub estimated_delivery: DateTime<Utc>,
}

/// Turns validated checkout submissions into order confirmations.
#[derive(Debug, Clone)]
pub struct CheckoutProcessor {
    processing_delay: Duration,
}

impl CheckoutProcessor {
    /// Create a processor with the given simulated processing delay.
    #[must_use]
    pub const fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    /// Simulate payment processing and produce a confirmation.
    ///
    /// Callers are responsible for validating `form` and for computing
    /// `totals` from a non-empty cart first.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn process_order(
        &self,
        form: &CheckoutForm,
        item_count: u64,
        totals: OrderTotals,
    ) -> OrderConfirmation {
        tokio::time::sleep(self.processing_delay).await;

        let order_number = generate_order_number();
        let estimated_delivery = Utc::now() + chrono::Duration::days(DELIVERY_WINDOW_DAYS);

        tracing::info!(
            order_number = %order_number,
            items = item_count,
            total = %totals.total,
            "Order placed"
        );

        OrderConfirmation {
            order_number,
            email: form.email.clone(),
            item_count,
            totals,
            estimated_delivery,
        }
    }
}

/// Generate an order number: `ORD-` plus nine random uppercase
/// alphanumeric characters.
fn generate_order_number() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ORDER_NUMBER_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..ORDER_NUMBER_CHARSET.len());
            // SAFETY: idx is always within bounds since random_range returns 0..CHARSET.len()
            char::from(*ORDER_NUMBER_CHARSET.get(idx).expect("idx within bounds"))
        })
        .collect();
    format!("ORD-{suffix}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            zip_code: "12345".into(),
            country: "US".into(),
            payment_method: elitestore_core::checkout::PaymentMethod::Card,
        }
    }

    #[test]
    fn test_order_number_shape() {
        let number = generate_order_number();
        assert_eq!(number.len(), 13);
        assert!(number.starts_with("ORD-"));
        assert!(
            number
                .chars()
                .skip(4)
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[tokio::test]
    async fn test_process_order_builds_confirmation() {
        let processor = CheckoutProcessor::new(Duration::ZERO);
        let totals = OrderTotals::from_subtotal(dec!(45.00));

        let before = Utc::now();
        let confirmation = processor.process_order(&filled_form(), 3, totals).await;

        assert!(confirmation.order_number.starts_with("ORD-"));
        assert_eq!(confirmation.email, "jane@example.com");
        assert_eq!(confirmation.item_count, 3);
        assert_eq!(confirmation.totals.total, dec!(58.59));

        let window = confirmation.estimated_delivery - before;
        assert_eq!(window.num_days(), DELIVERY_WINDOW_DAYS);
    }

    #[test]
    fn test_order_numbers_are_not_repeated() {
        let first = generate_order_number();
        let second = generate_order_number();
        assert_ne!(first, second);
    }
}
