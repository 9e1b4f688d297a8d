//! Store document models for the fixed fixture dataset.
//!
//! Field names and id types match the documents the service under test reads:
//! Mongo `_id`/`_class` metadata, camelCase value fields, and loose
//! `{"$ref", "$id"}` reference subdocuments. Customers keep their original
//! string ids while every other entity uses an `ObjectId`.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Loose reference to a document in another collection.
///
/// Nothing enforces that the target exists; the dataset deliberately contains
/// dangling references to exercise orphan handling in the service under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(rename = "$ref")]
    pub collection: String,
    #[serde(rename = "$id")]
    pub id: ObjectId,
}

impl EntityRef {
    pub fn new(collection: &str, id: ObjectId) -> Self {
        Self {
            collection: collection.to_string(),
            id,
        }
    }
}

/// Postal address tied to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "_class")]
    pub class: String,
    pub number: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
}

/// Payment card tied to a customer. `long_num` is the masked card number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCard {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "_class")]
    pub class: String,
    pub long_num: String,
    pub expires: String,
    pub ccv: String,
}

/// Registered customer with ordered address and card references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_class")]
    pub class: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub addresses: Vec<EntityRef>,
    pub cards: Vec<EntityRef>,
}

/// Shopping cart owned by a customer id, holding ordered item references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "_class")]
    pub class: String,
    pub customer_id: String,
    pub items: Vec<EntityRef>,
}

/// Single cart line: SKU, quantity, and unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "_class")]
    pub class: String,
    pub item_id: String,
    pub quantity: i32,
    pub unit_price: f64,
}
