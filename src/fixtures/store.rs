//! Store access for wiping and reseeding the fixture dataset.

use mongodb::Database;
use serde::Serialize;

use crate::constant::{
    ADDRESS_COLLECTION, CARD_COLLECTION, CART_COLLECTION, CUSTOMER_COLLECTION, ITEM_COLLECTION,
};
use crate::{error::FixtureError, fixtures::data::FixtureDataset, session::FixtureSession};

impl FixtureSession {
    pub fn store(&self) -> StoreFixtures<'_> {
        StoreFixtures { session: self }
    }
}

/// Store-side fixture operations, borrowed from a live session.
pub struct StoreFixtures<'a> {
    pub(crate) session: &'a FixtureSession,
}

impl<'a> StoreFixtures<'a> {
    /// Drop every document in the store.
    pub async fn wipe(&self) -> Result<(), FixtureError> {
        self.session.db.drop().await.map_err(FixtureError::Wipe)
    }

    /// Insert the fixed dataset, one concurrent insert per collection.
    ///
    /// All five inserts must land before this returns; the first failure
    /// aborts the seed with no rollback.
    pub async fn seed(&self, dataset: &FixtureDataset) -> Result<(), FixtureError> {
        let db = &self.session.db;

        tokio::try_join!(
            insert(db, CUSTOMER_COLLECTION, &dataset.customers),
            insert(db, CARD_COLLECTION, &dataset.cards),
            insert(db, CART_COLLECTION, &dataset.carts),
            insert(db, ADDRESS_COLLECTION, &dataset.addresses),
            insert(db, ITEM_COLLECTION, &dataset.items),
        )?;

        Ok(())
    }

    /// Wipe then reseed: the baseline every test starts from. No partial
    /// state is observable afterwards unless an insert failed.
    pub async fn reset(&self, dataset: &FixtureDataset) -> Result<(), FixtureError> {
        self.wipe().await?;
        self.seed(dataset).await
    }
}

async fn insert<T>(
    db: &Database,
    collection: &'static str,
    documents: &[T],
) -> Result<(), FixtureError>
where
    T: Serialize + Send + Sync,
{
    db.collection::<T>(collection)
        .insert_many(documents)
        .await
        .map(|_| ())
        .map_err(|source| FixtureError::Seed { collection, source })
}
