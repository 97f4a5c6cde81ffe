use super::{seed, SystemConfig, SystemError};
use crate::cart_store::CartStore;
use crate::order_store::OrderStore;
use crate::product_store::ProductStore;
use crate::services::{AuthService, CartService, OrderService, StockService};
use crate::user_store::{CredentialHasher, UserStore};
use std::sync::Arc;
use tracing::info;

/// The process-wide container holding the four stores.
///
/// `StoreSystem` is responsible for:
/// - **Construction**: Building every store exactly once at startup
/// - **Seeding**: Optionally loading the sample records
/// - **Dependency Injection**: Handing out shared `Arc` handles and service façades
///
/// # Architecture
///
/// The stores are independent leaves; none holds a reference to another:
/// - **UserStore**: accounts and credential checks
/// - **ProductStore**: stock with the non-negative quantity invariant
/// - **CartStore**: one cart per user
/// - **OrderStore**: orders and their status
///
/// There is no teardown. The stores live until the last handle is dropped, normally at
/// process exit.
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::new(&SystemConfig::from_env()?)?;
///
/// let user = system.auth_service().login("rey", "rey123")?;
/// system.cart_service().put(&user.id, "P0001".into(), 2)?;
/// ```
#[derive(Clone)]
pub struct StoreSystem {
    pub users: Arc<UserStore>,
    pub products: Arc<ProductStore>,
    pub carts: Arc<CartStore>,
    pub orders: Arc<OrderStore>,
}

impl StoreSystem {
    /// Creates all four stores, seeding them if `config.seed_sample_data` is set.
    pub fn new(config: &SystemConfig) -> Result<Self, SystemError> {
        let hasher = CredentialHasher::new(config.hash_params()?)?;

        let system = if config.seed_sample_data {
            let users = UserStore::new(hasher);
            for params in seed::sample_users() {
                users.register(params)?;
            }

            Self::from_stores(
                users,
                ProductStore::with_products(seed::sample_products()),
                CartStore::new(),
                OrderStore::with_orders(seed::sample_orders()),
            )
        } else {
            Self::from_stores(
                UserStore::new(hasher),
                ProductStore::new(),
                CartStore::new(),
                OrderStore::new(),
            )
        };

        info!(
            seeded = config.seed_sample_data,
            users = system.users.find_all().len(),
            products = system.products.find_all().len(),
            orders = system.orders.find_all().len(),
            "Store system ready"
        );
        Ok(system)
    }

    fn from_stores(
        users: UserStore,
        products: ProductStore,
        carts: CartStore,
        orders: OrderStore,
    ) -> Self {
        Self {
            users: Arc::new(users),
            products: Arc::new(products),
            carts: Arc::new(carts),
            orders: Arc::new(orders),
        }
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(Arc::clone(&self.users))
    }

    pub fn stock_service(&self) -> StockService {
        StockService::new(Arc::clone(&self.products))
    }

    pub fn cart_service(&self) -> CartService {
        CartService::new(Arc::clone(&self.carts))
    }

    pub fn order_service(&self) -> OrderService {
        OrderService::new(Arc::clone(&self.orders))
    }
}
