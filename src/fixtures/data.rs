//! The fixed store dataset.
//!
//! Inserted verbatim before every test; no values are generated. Ids are
//! stable so rewritten requests and assertions in the contract suite can
//! refer to them directly. The second cart points at a customer id that does
//! not exist, and its sibling references an item that was never seeded;
//! both are fixed orphaned-reference scenarios, not bugs to fix.

use mongodb::bson::oid::ObjectId;

use crate::constant::{ADDRESS_COLLECTION, CARD_COLLECTION, ITEM_COLLECTION};
use crate::model::{Address, Cart, Customer, EntityRef, Item, PaymentCard};

/// One copy of every document the store holds between tests: 3 addresses,
/// 3 cards, 3 customers, 2 carts, 1 item.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureDataset {
    pub addresses: Vec<Address>,
    pub cards: Vec<PaymentCard>,
    pub customers: Vec<Customer>,
    pub carts: Vec<Cart>,
    pub items: Vec<Item>,
}

fn oid(hex: &str) -> ObjectId {
    ObjectId::parse_str(hex).unwrap()
}

fn users_class(namespace: &str, entity: &str) -> String {
    format!("{namespace}.users.entities.{entity}")
}

fn cart_class(namespace: &str, entity: &str) -> String {
    format!("{namespace}.cart.entities.{entity}")
}

impl FixtureDataset {
    /// Build the dataset with `_class` labels under the given namespace.
    pub fn new(namespace: &str) -> Self {
        let addresses = vec![
            Address {
                id: oid("579f21ae98684924944651bd"),
                class: users_class(namespace, "Address"),
                number: "69".to_string(),
                street: "Wilson Street".to_string(),
                city: "Hartlepool".to_string(),
                postcode: "TS26 8JU".to_string(),
                country: "United Kingdom".to_string(),
            },
            Address {
                id: oid("579f21ae98684924944651c0"),
                class: users_class(namespace, "Address"),
                number: "122".to_string(),
                street: "Radstone WayNet".to_string(),
                city: "Northampton".to_string(),
                postcode: "NN2 8NT".to_string(),
                country: "United Kingdom".to_string(),
            },
            Address {
                id: oid("579f21ae98684924944651c3"),
                class: users_class(namespace, "Address"),
                number: "3".to_string(),
                street: "Radstone Way".to_string(),
                city: "Northampton".to_string(),
                postcode: "NN2 8NT".to_string(),
                country: "United Kingdom".to_string(),
            },
        ];

        let cards = vec![
            PaymentCard {
                id: oid("579f21ae98684924944651be"),
                class: users_class(namespace, "Card"),
                long_num: "8575776807334952".to_string(),
                expires: "08/19".to_string(),
                ccv: "014".to_string(),
            },
            PaymentCard {
                id: oid("579f21ae98684924944651c1"),
                class: users_class(namespace, "Card"),
                long_num: "8918468841895184".to_string(),
                expires: "08/19".to_string(),
                ccv: "597".to_string(),
            },
            PaymentCard {
                id: oid("579f21ae98684924944651c4"),
                class: users_class(namespace, "Card"),
                long_num: "6426429851404909".to_string(),
                expires: "08/19".to_string(),
                ccv: "381".to_string(),
            },
        ];

        let customers = vec![
            Customer {
                id: "579f21ae98684924944651bf".to_string(),
                class: users_class(namespace, "Customer"),
                first_name: "Eve".to_string(),
                last_name: "Berger".to_string(),
                username: "Eve_Berger".to_string(),
                addresses: vec![EntityRef::new(
                    ADDRESS_COLLECTION,
                    oid("579f21ae98684924944651bd"),
                )],
                cards: vec![EntityRef::new(
                    CARD_COLLECTION,
                    oid("579f21ae98684924944651be"),
                )],
            },
            Customer {
                id: "579f21ae98684924944651c2".to_string(),
                class: users_class(namespace, "Customer"),
                first_name: "User".to_string(),
                last_name: "Name".to_string(),
                username: "user".to_string(),
                addresses: vec![EntityRef::new(
                    ADDRESS_COLLECTION,
                    oid("579f21ae98684924944651c0"),
                )],
                cards: vec![EntityRef::new(
                    CARD_COLLECTION,
                    oid("579f21ae98684924944651c1"),
                )],
            },
            Customer {
                id: "579f21ae98684924944651c5".to_string(),
                class: users_class(namespace, "Customer"),
                first_name: "User1".to_string(),
                last_name: "Name1".to_string(),
                username: "user1".to_string(),
                addresses: vec![EntityRef::new(
                    ADDRESS_COLLECTION,
                    oid("579f21ae98684924944651c3"),
                )],
                cards: vec![EntityRef::new(
                    CARD_COLLECTION,
                    oid("579f21ae98684924944651c4"),
                )],
            },
        ];

        let carts = vec![
            Cart {
                id: oid("579f21de98689ebf2bf1cd2f"),
                class: cart_class(namespace, "Cart"),
                customer_id: "579f21ae98684924944651bf".to_string(),
                items: vec![
                    EntityRef::new(ITEM_COLLECTION, oid("579f227698689ebf2bf1cd31")),
                    EntityRef::new(ITEM_COLLECTION, oid("579f22ac98689ebf2bf1cd32")),
                ],
            },
            // Owner id does not resolve to any seeded customer.
            Cart {
                id: oid("579f21e298689ebf2bf1cd30"),
                class: cart_class(namespace, "Cart"),
                customer_id: "579f21ae98684924944651bfaa".to_string(),
                items: vec![],
            },
        ];

        let items = vec![Item {
            id: oid("579f227698689ebf2bf1cd31"),
            class: cart_class(namespace, "Item"),
            item_id: "819e1fbf-8b7e-4f6d-811f-693534916a8b".to_string(),
            quantity: 20,
            unit_price: 99.0,
        }];

        Self {
            addresses,
            cards,
            customers,
            carts,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::constant::DEFAULT_ENTITY_NAMESPACE;

    use super::*;

    #[test]
    fn test_dataset_has_fixed_collection_sizes() {
        let dataset = FixtureDataset::new(DEFAULT_ENTITY_NAMESPACE);

        assert_eq!(dataset.addresses.len(), 3);
        assert_eq!(dataset.cards.len(), 3);
        assert_eq!(dataset.customers.len(), 3);
        assert_eq!(dataset.carts.len(), 2);
        assert_eq!(dataset.items.len(), 1);
    }

    #[test]
    fn test_dataset_is_deterministic() {
        let first = FixtureDataset::new(DEFAULT_ENTITY_NAMESPACE);
        let second = FixtureDataset::new(DEFAULT_ENTITY_NAMESPACE);

        assert_eq!(first, second, "two builds should yield identical documents");
    }

    #[test]
    fn test_class_labels_carry_namespace() {
        let dataset = FixtureDataset::new("works.weave.socks");

        assert_eq!(
            dataset.addresses[0].class,
            "works.weave.socks.users.entities.Address"
        );
        assert_eq!(
            dataset.carts[0].class,
            "works.weave.socks.cart.entities.Cart"
        );

        let relabeled = FixtureDataset::new("com.example.shop");
        assert_eq!(
            relabeled.items[0].class,
            "com.example.shop.cart.entities.Item"
        );
    }

    #[test]
    fn test_orphan_cart_is_preserved() {
        let dataset = FixtureDataset::new(DEFAULT_ENTITY_NAMESPACE);

        let orphan = &dataset.carts[1];
        assert_eq!(orphan.customer_id, "579f21ae98684924944651bfaa");
        assert!(
            !dataset.customers.iter().any(|c| c.id == orphan.customer_id),
            "the orphan cart owner must stay unresolvable"
        );
    }
}
