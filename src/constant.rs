//! Shared constants for the fixture harness.
//!
//! Endpoint defaults mirror the docker-compose layout the contract suite runs
//! against: MongoDB mapped to a local port and the dependency mock reachable
//! under its compose service name.

/// Environment variable naming the fixture store connection string.
pub static STORE_ENDPOINT_VAR: &str = "MONGO_ENDPOINT";

/// Fallback fixture store connection string when `MONGO_ENDPOINT` is unset.
pub static DEFAULT_STORE_ENDPOINT: &str = "mongodb://localhost:32769/data";

/// Database used when the connection string carries no default database.
pub static DEFAULT_DATABASE: &str = "data";

/// Environment variable naming the mock backend base URL.
pub static MOCK_ENDPOINT_VAR: &str = "MOCK_ENDPOINT";

/// Fallback mock backend base URL when `MOCK_ENDPOINT` is unset.
pub static DEFAULT_MOCK_ENDPOINT: &str = "http://users-orders-mock:80";

/// Java-package prefix stamped into the `_class` field of seeded documents.
pub static DEFAULT_ENTITY_NAMESPACE: &str = "works.weave.socks";

/// Expectation-registration path on the mock backend's administrative API.
pub static EXPECTATION_PATH: &str = "/mockserver/expectation";

/// Store collection holding address documents.
pub static ADDRESS_COLLECTION: &str = "address";
/// Store collection holding payment card documents.
pub static CARD_COLLECTION: &str = "card";
/// Store collection holding cart documents.
pub static CART_COLLECTION: &str = "cart";
/// Store collection holding customer documents.
pub static CUSTOMER_COLLECTION: &str = "customer";
/// Store collection holding cart item documents.
pub static ITEM_COLLECTION: &str = "item";

/// Customer resource served by the mock backend.
pub static MOCK_CUSTOMER_ID: &str = "57a98d98e4b00679b4a830af";
/// Address resource served by the mock backend.
pub static MOCK_ADDRESS_ID: &str = "57a98d98e4b00679b4a830ad";
/// Card resource served by the mock backend.
pub static MOCK_CARD_ID: &str = "57a98d98e4b00679b4a830ae";
/// Cart whose item list is served by the mock backend.
pub static MOCK_CART_ID: &str = "579f21ae98684924944651bf";
