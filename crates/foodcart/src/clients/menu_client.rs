use crate::menu_actor::{MenuError, MenuFilter};
use crate::model::{MenuId, MenuItem, MenuItemCreate, MenuItemUpdate, RestaurantId};
use actor_store::{StoreClient, StoreError, StoreHandle};
use async_trait::async_trait;
use tracing::instrument;

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: StoreClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: StoreClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Add a dish to a restaurant's catalog.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<MenuId, MenuError> {
        self.inner.create(params).await.map_err(MenuError::from_store)
    }

    /// Apply a partial update to a catalog entry.
    #[instrument(skip(self, update))]
    pub async fn update_item(
        &self,
        id: MenuId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        self.inner
            .update(id, update)
            .await
            .map_err(MenuError::from_store)
    }

    /// A restaurant's orderable menu (unavailable items filtered out).
    #[instrument(skip(self))]
    pub async fn menu_for(&self, restaurant_id: RestaurantId) -> Result<Vec<MenuItem>, MenuError> {
        self.find(MenuFilter::available_at(restaurant_id)).await
    }

    /// A restaurant's full catalog, unavailable items included.
    #[instrument(skip(self))]
    pub async fn full_catalog(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<MenuItem>, MenuError> {
        self.find(MenuFilter::all_at(restaurant_id)).await
    }
}

#[async_trait]
impl StoreHandle<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &StoreClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        MenuError::from_store(e)
    }
}
