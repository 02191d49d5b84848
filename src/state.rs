use std::sync::Arc;

use crate::catalog::CatalogPage;
use crate::listing::ListingPage;
use crate::store::StoreFactory;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogPage>,
    pub stores: Arc<dyn StoreFactory>,
    pub courses_table: String,
}

impl AppState {
    pub fn new(stores: Arc<dyn StoreFactory>, courses_table: impl Into<String>) -> Self {
        Self {
            catalog: Arc::new(CatalogPage::default()),
            stores,
            courses_table: courses_table.into(),
        }
    }

    pub fn listing_page(&self) -> ListingPage {
        ListingPage::new(self.stores.clone(), self.courses_table.clone())
    }
}
