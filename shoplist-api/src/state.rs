use std::sync::Arc;

use shoplist_core::ItemRepository;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}
