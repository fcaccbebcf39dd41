use std::sync::Arc;

use crate::{
    common::{pg_store::PgStore, server_error::ServerError, store::TriviaStore},
    config::config::CONFIG,
};

pub struct AppState {
    store: Arc<dyn TriviaStore>,
    page_size: u16,
}

impl AppState {
    pub async fn from_connection_string(connection_string: &str) -> Result<Arc<Self>, ServerError> {
        let store = PgStore::connect(connection_string).await?;
        let state = Self::from_store(Arc::new(store), CONFIG.server.page_size);

        Ok(state)
    }

    pub fn from_store(store: Arc<dyn TriviaStore>, page_size: u16) -> Arc<Self> {
        Arc::new(Self { store, page_size })
    }

    pub fn get_store(&self) -> &dyn TriviaStore {
        self.store.as_ref()
    }

    pub fn get_page_size(&self) -> u16 {
        self.page_size
    }
}
