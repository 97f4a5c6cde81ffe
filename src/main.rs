//! # Shop Store Demo
//!
//! Boots a seeded [`StoreSystem`], walks one customer from login to a shipped order, then
//! races several buyers for the last units of a product to show that stock never goes
//! negative.

use shop_store::lifecycle::{setup_tracing, StoreSystem, SystemConfig};
use shop_store::model::{OrderStatus, SimpleProduct};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!(?config, "Starting store system");
    let system = StoreSystem::new(&config)?;

    if !config.seed_sample_data {
        info!("Sample data disabled; nothing to demo");
        return Ok(());
    }

    // One customer, start to finish
    let span = tracing::info_span!("checkout");
    let order = async {
        let user = system.auth_service().login("rey", "rey123")?;
        info!(user_id = %user.id, "Logged in");

        let carts = system.cart_service();
        carts.put(&user.id, "P0001".into(), 2)?;
        carts.put(&user.id, "P0004".into(), 1)?;
        let items = carts.put(&user.id, "P0001".into(), 1)?;
        info!(lines = items.len(), "Cart ready");

        let stock = system.stock_service();
        for item in &items {
            stock.withdraw(item.clone())?;
        }

        let orders = system.order_service();
        let order = orders.create(user.id.clone(), items.clone())?;
        for item in &items {
            carts.remove(&user.id, &item.product_id)?;
        }
        orders.update_status(&order.id, OrderStatus::PaymentSuccessful)?;
        let order = orders.update_status(&order.id, OrderStatus::Shipped)?;
        Ok::<_, Box<dyn std::error::Error>>(order)
    }
    .instrument(span)
    .await?;
    info!(order_id = %order.id, status = %order.status, "Order shipped");

    // Five buyers, two Carbonite Freezers
    let span = tracing::info_span!("rush");
    let sold = async {
        let buyers: Vec<_> = (0..5)
            .map(|buyer| {
                let stock = system.stock_service();
                tokio::spawn(async move {
                    let result = stock.withdraw(SimpleProduct::new("P0005", 1));
                    if let Err(e) = &result {
                        warn!(buyer, error = %e, "Buyer missed out");
                    }
                    result.is_ok()
                })
            })
            .collect();

        let mut sold = 0;
        for buyer in buyers {
            if buyer.await? {
                sold += 1;
            }
        }
        Ok::<_, Box<dyn std::error::Error>>(sold)
    }
    .instrument(span)
    .await?;

    let left = system.products.find(&"P0005".into())?.quantity;
    info!(sold, left, "Rush over");

    for order in system.order_service().find_all() {
        info!(order_id = %order.id, user_id = %order.user_id, status = %order.status, "Order");
    }

    info!("Demo completed successfully");
    Ok(())
}
