//! Demo entry point: stands up the system, walks one order from cart to
//! pickup, and shuts down.

use actor_store::tracing::setup_tracing;
use foodcart::lifecycle::OrderSystem;
use foodcart::model::{CustomerId, MenuItemCreate, NewLineItem, OrderStage, RestaurantId};
use foodcart::order_actor::OrderError;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("starting foodcart demo");

    let system = OrderSystem::new();

    let restaurant_id = RestaurantId::generate();
    let customer_id = CustomerId::generate();

    // Seed the catalog
    let menu_id = system
        .menu_client
        .add_item(MenuItemCreate {
            restaurant_id: restaurant_id.clone(),
            name: "Pad See Ew".to_string(),
            description: "Wide rice noodles, chinese broccoli".to_string(),
            price: 13.5,
            image_url: "pad-see-ew.jpg".to_string(),
            category: "mains".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%menu_id, "menu item created");

    let span = tracing::info_span!("order_flow");
    let result: Result<(), OrderError> = async {
        // First add opens the cart
        let pickup = chrono::Utc::now() + chrono::Duration::minutes(45);
        let cart = system
            .order_client
            .add_to_cart(
                customer_id.clone(),
                restaurant_id.clone(),
                NewLineItem {
                    menu_id: menu_id.clone(),
                    name: "Pad See Ew".to_string(),
                    image: "pad-see-ew.jpg".to_string(),
                    unit_price: 13.5,
                    quantity: 2,
                },
                pickup,
            )
            .await?;
        info!(
            order_code = %cart.order.order_code,
            created = cart.created,
            total = cart.order.total_amount,
            "cart updated"
        );

        // Walk it through checkout and placement
        system
            .order_client
            .advance_stage(customer_id.clone(), OrderStage::Checkout, None)
            .await?;
        let placed = system
            .order_client
            .advance_stage(customer_id.clone(), OrderStage::PlaceOrder, None)
            .await?;
        info!(order_id = %placed.id, "order placed");

        // Customer picks up and rates
        let picked_up = system
            .order_client
            .complete_pickup(placed.id.clone(), customer_id.clone())
            .await?;
        info!(order_id = %picked_up.id, "order picked up");

        let rated = system
            .order_client
            .rate_order(placed.id, customer_id.clone(), 5)
            .await?;
        info!(rating = ?rated.rating, "order rated");
        Ok(())
    }
    .instrument(span)
    .await;
    result.map_err(|e| e.to_string())?;

    let history = system
        .order_client
        .order_history(customer_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(orders = history.len(), "order history fetched");

    system.shutdown().await?;

    info!("demo complete");
    Ok(())
}
