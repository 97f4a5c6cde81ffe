//! Sample records loaded when [`SystemConfig::seed_sample_data`](super::SystemConfig) is set.

use crate::model::{Order, OrderStatus, Product, Role, SimpleProduct, UserCreate};

pub fn sample_users() -> Vec<UserCreate> {
    let user = |id: &str, name: &str, email: &str, username: &str, password: &str, role| UserCreate {
        id: id.into(),
        name: name.to_string(),
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        role,
    };

    vec![
        user("U0001", "Rey", "rey@jedi.com", "rey", "rey123", Role::Standard),
        user("U0002", "Kylo", "kylo@firstorder.com", "kylo", "kylo123", Role::Standard),
        user("U0003", "Luke", "luke@jedi.com", "luke", "luke123", Role::Admin),
    ]
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("P0001", "Lightsaber", 999.99, 10)
            .with_description("The perfect lightsaber for every aspiring Jedi")
            .with_category("Weapons")
            .with_image_url("http://images.buystarwarstoys.com/products/9288/1-1/ahsoka-tano-toy-lightsaber.jpg"),
        Product::new("P0002", "The Millenium Falcon", 30000.00, 1)
            .with_description("The fastest ship in the entire gallaxy - finished the Kessel Run in less than 12 parsecs")
            .with_category("Mobility")
            .with_image_url("http://ksassets.timeincuk.net/wp/uploads/sites/54/2017/11/Millenium-Falcon.jpg"),
        Product::new("P0003", "BB 8", 12499.00, 3)
            .with_description("Extraordinarily helpful droid")
            .with_category("Droids")
            .with_image_url("https://images.fun.com/products/34909/2-1-63328/star-wars-episode-7-rey-jakku-and-bb8-black-series-set.jpg"),
        Product::new("P0004", "Podracer", 3499.00, 6)
            .with_description("Lightning-fast podracer - nobody will be able to beat you")
            .with_category("Mobility")
            .with_image_url("https://images-na.ssl-images-amazon.com/images/I/41j3vMHSX0L._AA300_.jpg"),
        Product::new("P0005", "Carbonite Freezer", 39999.99, 2)
            .with_description("Very useful in case you need to freeze someone in carbonite")
            .with_category("Utilities")
            .with_image_url("https://s-i.huffpost.com/gen/1359887/images/o-HAN-SOLO-CARBONITE-facebook.jpg"),
    ]
}

pub fn sample_orders() -> Vec<Order> {
    let mut shipped = Order::new("etd4cs5d3", "U0002", vec![SimpleProduct::new("P0002", 1)]);
    shipped.status = OrderStatus::Shipped;

    vec![
        Order::new(
            "zdsklde4d",
            "U0001",
            vec![SimpleProduct::new("P0001", 2), SimpleProduct::new("P0003", 1)],
        ),
        shipped,
    ]
}
