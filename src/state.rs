use crate::config::Config;
use crate::models::AppData;
use crate::storage::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(config: Config, data: AppData) -> Self {
        let store = Store::new(config.data_path.clone(), data);
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
