use crate::model::{CustomerId, LineItemId, NewLineItem, Order, OrderId, OrderStage, RestaurantId};
use crate::order_actor::{CartCommand, CartUpdate, OrderAction, OrderError, OrderFilter, OrderUpdate};
use actor_store::{StoreClient, StoreError, StoreHandle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the order actor.
///
/// Cart methods are customer-keyed and translate to collection-level
/// commands; lifecycle methods are order-keyed and translate to document
/// actions. All find-or-mutate logic lives in the actor, so this wrapper is
/// a thin typed surface plus error mapping.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Add an item to the customer's cart, opening a cart if none is open.
    #[instrument(skip(self, item))]
    pub async fn add_to_cart(
        &self,
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        item: NewLineItem,
        pickup_time: DateTime<Utc>,
    ) -> Result<CartUpdate, OrderError> {
        debug!(menu_id = %item.menu_id, quantity = item.quantity, "add_to_cart called");
        self.inner
            .command(CartCommand::AddItem {
                customer_id,
                restaurant_id,
                item,
                pickup_time,
            })
            .await
            .map_err(OrderError::from_store)
    }

    /// Remove one line from the customer's open cart.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(
        &self,
        customer_id: CustomerId,
        item_id: LineItemId,
    ) -> Result<Order, OrderError> {
        self.inner
            .command(CartCommand::RemoveItem {
                customer_id,
                item_id,
            })
            .await
            .map(|update| update.order)
            .map_err(OrderError::from_store)
    }

    /// Empty the customer's cart.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self, customer_id: CustomerId) -> Result<Order, OrderError> {
        self.inner
            .command(CartCommand::ClearItems { customer_id })
            .await
            .map(|update| update.order)
            .map_err(OrderError::from_store)
    }

    /// Change the quantity of a line already in the cart.
    #[instrument(skip(self))]
    pub async fn set_item_quantity(
        &self,
        customer_id: CustomerId,
        item_id: LineItemId,
        quantity: u32,
    ) -> Result<Order, OrderError> {
        self.inner
            .command(CartCommand::UpdateItemQuantity {
                customer_id,
                item_id,
                quantity,
            })
            .await
            .map(|update| update.order)
            .map_err(OrderError::from_store)
    }

    /// Move the customer's pending order to a new stage, optionally
    /// rescheduling pickup.
    #[instrument(skip(self))]
    pub async fn advance_stage(
        &self,
        customer_id: CustomerId,
        stage: OrderStage,
        pickup_time: Option<DateTime<Utc>>,
    ) -> Result<Order, OrderError> {
        self.inner
            .command(CartCommand::AdvanceStage {
                customer_id,
                stage,
                pickup_time,
            })
            .await
            .map(|update| update.order)
            .map_err(OrderError::from_store)
    }

    /// Mark an order as picked up.
    #[instrument(skip(self))]
    pub async fn complete_pickup(
        &self,
        order_id: OrderId,
        customer_id: CustomerId,
    ) -> Result<Order, OrderError> {
        self.inner
            .perform_action(order_id, OrderAction::CompletePickup { customer_id })
            .await
            .map_err(OrderError::from_store)
    }

    /// Cancel a pending order.
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        order_id: OrderId,
        customer_id: CustomerId,
    ) -> Result<Order, OrderError> {
        self.inner
            .perform_action(order_id, OrderAction::Cancel { customer_id })
            .await
            .map_err(OrderError::from_store)
    }

    /// Rate a completed order.
    #[instrument(skip(self))]
    pub async fn rate_order(
        &self,
        order_id: OrderId,
        customer_id: CustomerId,
        rating: u8,
    ) -> Result<Order, OrderError> {
        self.inner
            .perform_action(order_id, OrderAction::Rate {
                customer_id,
                rating,
            })
            .await
            .map_err(OrderError::from_store)
    }

    /// Reschedule an order's pickup time.
    #[instrument(skip(self))]
    pub async fn set_pickup_time(
        &self,
        order_id: OrderId,
        pickup_time: DateTime<Utc>,
    ) -> Result<Order, OrderError> {
        self.inner
            .update(
                order_id,
                OrderUpdate {
                    pickup_time: Some(pickup_time),
                },
            )
            .await
            .map_err(OrderError::from_store)
    }

    /// The cart the customer is currently building or checking out, if any.
    /// When the filter matches more than one order, the newest wins.
    #[instrument(skip(self))]
    pub async fn active_cart(&self, customer_id: CustomerId) -> Result<Option<Order>, OrderError> {
        let hits = self.find(OrderFilter::active_cart(customer_id)).await?;
        Ok(hits.into_iter().max_by_key(|order| order.created_at))
    }

    /// Orders the customer has placed that the restaurant has not started
    /// on yet, newest first.
    #[instrument(skip(self))]
    pub async fn pending_orders(&self, customer_id: CustomerId) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.find(OrderFilter::placed_pending(customer_id)).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// The customer's completed orders, newest first.
    #[instrument(skip(self))]
    pub async fn completed_orders(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.find(OrderFilter::completed(customer_id)).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Every order a customer has placed, newest first.
    #[instrument(skip(self))]
    pub async fn order_history(&self, customer_id: CustomerId) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.find(OrderFilter::for_customer(customer_id)).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}

#[async_trait]
impl StoreHandle<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from_store(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_store::mock::{self, MockStore};

    fn sample_order(customer_id: CustomerId) -> Order {
        Order::open_cart(
            OrderId::generate(),
            customer_id,
            RestaurantId::generate(),
            NewLineItem {
                menu_id: crate::model::MenuId::generate(),
                name: "Bibimbap".to_string(),
                image: "bibimbap.jpg".to_string(),
                unit_price: 11.0,
                quantity: 1,
            }
            .into_line_item(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn add_to_cart_sends_add_item_command() {
        let (client, mut receiver) = mock::create_mock_client::<Order>(10);
        let client = OrderClient::new(client);

        let customer_id = CustomerId::generate();
        let restaurant_id = RestaurantId::generate();
        let order = sample_order(customer_id.clone());

        let send_customer = customer_id.clone();
        let send_restaurant = restaurant_id.clone();
        let call = tokio::spawn(async move {
            client
                .add_to_cart(
                    send_customer,
                    send_restaurant,
                    NewLineItem {
                        menu_id: crate::model::MenuId::generate(),
                        name: "Bibimbap".to_string(),
                        image: "bibimbap.jpg".to_string(),
                        unit_price: 11.0,
                        quantity: 2,
                    },
                    Utc::now(),
                )
                .await
        });

        let (command, responder) = mock::expect_command(&mut receiver)
            .await
            .expect("expected Command request");
        match &command {
            CartCommand::AddItem {
                customer_id: sent_customer,
                item,
                ..
            } => {
                assert_eq!(sent_customer, &customer_id);
                assert_eq!(item.quantity, 2);
            }
            other => panic!("wrong command: {other:?}"),
        }
        responder
            .send(Ok(CartUpdate {
                order,
                created: true,
            }))
            .unwrap();

        let update = call.await.unwrap().unwrap();
        assert!(update.created);
    }

    #[tokio::test]
    async fn entity_errors_surface_with_their_kind() {
        let mut mock = MockStore::<Order>::new();
        mock.expect_command().return_err(StoreError::Entity(Box::new(
            OrderError::DuplicateItem("m1".into()),
        )));

        let client = OrderClient::new(mock.client());
        let err = client
            .clear_cart(CustomerId::generate())
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::DuplicateItem("m1".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn history_sorts_newest_first() {
        let customer_id = CustomerId::generate();
        let mut older = sample_order(customer_id.clone());
        older.created_at = Utc::now() - chrono::Duration::hours(2);
        let newer = sample_order(customer_id.clone());

        let mut mock = MockStore::<Order>::new();
        mock.expect_query()
            .return_ok(vec![older.clone(), newer.clone()]);

        let client = OrderClient::new(mock.client());
        let history = client.order_history(customer_id).await.unwrap();
        assert_eq!(history[0].id, newer.id);
        assert_eq!(history[1].id, older.id);
        mock.verify();
    }

    #[tokio::test]
    async fn missing_order_maps_to_order_not_found() {
        let mut mock = MockStore::<Order>::new();
        let order_id = OrderId::generate();
        mock.expect_action(order_id.clone())
            .return_err(StoreError::NotFound(order_id.to_string()));

        let client = OrderClient::new(mock.client());
        let err = client
            .cancel_order(order_id.clone(), CustomerId::generate())
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::OrderNotFound(order_id.to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn get_goes_through_the_shared_handle() {
        let mut mock = MockStore::<Order>::new();
        let order = sample_order(CustomerId::generate());
        mock.expect_get(order.id.clone()).return_ok(Some(order.clone()));

        let client = OrderClient::new(mock.client());
        let fetched = client.get(order.id.clone()).await.unwrap();
        assert_eq!(fetched, Some(order));
        mock.verify();
    }
}
