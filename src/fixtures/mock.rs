//! Canned dependency expectations registered at suite start.
//!
//! The order payloads produced by the request rewrite rules point at these
//! four resources, so the service under test resolves every dependency URL
//! against the mock backend instead of the real user and cart services.

use serde_json::json;

use crate::backend::Expectation;
use crate::constant::{MOCK_ADDRESS_ID, MOCK_CARD_ID, MOCK_CART_ID, MOCK_CUSTOMER_ID};

/// The fixed expectation set: customer, address, card, and cart items.
pub fn default_expectations() -> Vec<Expectation> {
    vec![
        Expectation::json(
            "GET",
            &format!("/customers/{MOCK_CUSTOMER_ID}"),
            json!({
                "id": MOCK_CUSTOMER_ID,
                "firstName": "Eve",
                "lastName": "Berger",
                "username": "Eve_Berger"
            }),
        ),
        Expectation::json(
            "GET",
            &format!("/addresses/{MOCK_ADDRESS_ID}"),
            json!({
                "id": MOCK_ADDRESS_ID,
                "number": "246",
                "street": "my road",
                "city": "Glasgow",
                "postcode": "G67 3DL",
                "country": "United Kingdom"
            }),
        ),
        Expectation::json(
            "GET",
            &format!("/cards/{MOCK_CARD_ID}"),
            json!({
                "id": MOCK_CARD_ID,
                "longNum": "5953580604169678",
                "expires": "08/19",
                "ccv": "678"
            }),
        ),
        Expectation::json(
            "GET",
            &format!("/carts/{MOCK_CART_ID}/items"),
            json!([
                {
                    "itemId": "819e1fbf-8b7e-4f6d-811f-693534916a8b",
                    "quantity": 20,
                    "unitPrice": 99.0
                }
            ]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expectations_cover_dependency_resources() {
        let expectations = default_expectations();

        let paths: Vec<&str> = expectations
            .iter()
            .map(|e| e.http_request.path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/customers/57a98d98e4b00679b4a830af",
                "/addresses/57a98d98e4b00679b4a830ad",
                "/cards/57a98d98e4b00679b4a830ae",
                "/carts/579f21ae98684924944651bf/items",
            ]
        );

        for expectation in &expectations {
            assert_eq!(expectation.http_request.method, "GET");
            assert_eq!(expectation.http_response.status_code, 200);
        }
    }
}
