//! Checkout form fields and per-field validation.
//!
//! Validation failures are data, not errors: a map from wire field name
//! to a stable message the client renders inline. An empty map means the
//! form is valid. Nothing here is fatal and nothing leaves the process.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field-name-to-message map returned by form validation.
///
/// Keys are the camelCase wire names the client submitted, so it can
/// attach each message to the matching input.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// How the customer pays for the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
    /// Cash on delivery.
    Cod,
}

/// The checkout form exactly as submitted by the client.
///
/// Every field defaults so a partial submission still deserializes and
/// validation can report what is missing, rather than the decoder
/// rejecting the request wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Validate every field, collecting one message per failing field.
    ///
    /// An empty email reports "required"; a non-empty but malformed one
    /// reports the format message instead.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.first_name.trim().is_empty() {
            errors.insert("firstName", "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert("lastName", "Last name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        }
        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone is required");
        }
        if self.address.trim().is_empty() {
            errors.insert("address", "Address is required");
        }
        if self.city.trim().is_empty() {
            errors.insert("city", "City is required");
        }
        if self.zip_code.trim().is_empty() {
            errors.insert("zipCode", "ZIP code is required");
        }
        if self.country.trim().is_empty() {
            errors.insert("country", "Country is required");
        }

        if !self.email.is_empty() && !is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email address");
        }

        errors
    }
}

/// Basic email shape check: non-empty local part, non-empty domain with
/// a dot, no whitespace anywhere.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !email.chars().any(char::is_whitespace)
}
