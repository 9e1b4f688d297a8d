//! Live fixture session: one store connection and one mock backend client,
//! opened at suite start and owned by the controller until suite end.

use mongodb::{bson::doc, options::ClientOptions, Client, Database};

use crate::{
    backend::MockBackend, config::FixtureConfig, constant::DEFAULT_DATABASE, error::FixtureError,
};

/// The shared resources every lifecycle call after suite start runs against.
///
/// Created by [`FixtureSession::connect`] and held by
/// [`crate::lifecycle::FixtureController`]; the runner integration layer
/// never touches a global handle.
pub struct FixtureSession {
    /// The fixture database. Wiped and reseeded between tests; the service
    /// under test only reads it.
    pub db: Database,
    pub(crate) backend: MockBackend,
    client: Client,
}

impl FixtureSession {
    /// Open the store connection and build the mock backend client.
    ///
    /// The driver connects lazily, so a `ping` forces server selection here;
    /// an unreachable store fails the suite at start instead of mid-test.
    pub(crate) async fn connect(config: &FixtureConfig) -> Result<Self, FixtureError> {
        let endpoint = config.store_endpoint.clone();
        let connection_error = |source| FixtureError::Connection {
            endpoint: endpoint.clone(),
            source,
        };

        let mut options = ClientOptions::parse(&endpoint)
            .await
            .map_err(connection_error)?;
        if config.server_selection_timeout.is_some() {
            options.server_selection_timeout = config.server_selection_timeout;
        }

        let client = Client::with_options(options).map_err(connection_error)?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(connection_error)?;

        Ok(Self {
            db,
            backend: MockBackend::new(&config.mock_endpoint),
            client,
        })
    }

    /// Administrative client for the dependency mock.
    pub fn backend(&self) -> &MockBackend {
        &self.backend
    }

    /// Drop the fixture database and release the connection.
    ///
    /// The client is shut down even when the drop fails; by this point test
    /// results are final and the error is only surfaced.
    pub(crate) async fn teardown(self) -> Result<(), FixtureError> {
        let outcome = self.db.drop().await.map_err(FixtureError::Teardown);
        self.client.shutdown().await;

        outcome
    }
}
