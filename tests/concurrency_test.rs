use shop_store::cart_store::CartStore;
use shop_store::model::{Order, OrderStatus, Product, SimpleProduct, UserId};
use shop_store::order_store::OrderStore;
use shop_store::product_store::{ProductError, ProductStore};
use shop_store::services::OrderService;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

/// Stock 5, two concurrent withdrawals of 5: exactly one wins.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_no_oversell_between_two_buyers() {
    for _ in 0..50 {
        let products = Arc::new(ProductStore::with_products(vec![Product::new("P1", "BB 8", 1.0, 5)]));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let products = Arc::clone(&products);
                tokio::spawn(async move { products.withdraw(&SimpleProduct::new("P1", 5)) })
            })
            .collect();

        let mut successes = 0;
        let mut rejections = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(ProductError::InsufficientStock { requested: 5, available: 0 }) => rejections += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!((successes, rejections), (1, 1));
        assert_eq!(products.find(&"P1".into()).unwrap().quantity, 0);
    }
}

/// Final stock = seed + adds - successful withdrawals, and never below zero on the way.
#[test]
fn test_stock_accounting_under_mixed_contention() {
    const THREADS: u32 = 8;
    const ROUNDS: u32 = 200;

    let products = Arc::new(ProductStore::with_products(vec![Product::new("P1", "Podracer", 1.0, 20)]));
    let added = Arc::new(AtomicU32::new(0));
    let withdrawn = Arc::new(AtomicU32::new(0));
    let barrier = Arc::new(Barrier::new(THREADS as usize));

    thread::scope(|scope| {
        for worker in 0..THREADS {
            let products = Arc::clone(&products);
            let added = Arc::clone(&added);
            let withdrawn = Arc::clone(&withdrawn);
            let barrier = Arc::clone(&barrier);

            scope.spawn(move || {
                barrier.wait();
                for round in 0..ROUNDS {
                    if (worker + round) % 3 == 0 {
                        products.add(Product::new("P1", "Podracer", 1.0, 2)).unwrap();
                        added.fetch_add(2, Ordering::SeqCst);
                    } else {
                        let quantity = 1 + round % 4;
                        match products.withdraw(&SimpleProduct::new("P1", quantity)) {
                            Ok(_) => {
                                withdrawn.fetch_add(quantity, Ordering::SeqCst);
                            }
                            Err(ProductError::InsufficientStock { requested, available }) => {
                                assert!(requested > available);
                            }
                            Err(e) => panic!("unexpected error: {e}"),
                        }
                    }
                }
            });
        }
    });

    let expected = 20 + added.load(Ordering::SeqCst) - withdrawn.load(Ordering::SeqCst);
    assert_eq!(products.find(&"P1".into()).unwrap().quantity, expected);
}

/// Concurrent adds of a brand-new id: one insert, the rest increments.
#[test]
fn test_concurrent_adds_of_new_product_all_count() {
    let products = Arc::new(ProductStore::new());
    let barrier = Arc::new(Barrier::new(16));

    thread::scope(|scope| {
        for _ in 0..16 {
            let products = Arc::clone(&products);
            let barrier = Arc::clone(&barrier);
            scope.spawn(move || {
                barrier.wait();
                products.add(Product::new("P9", "Carbonite Freezer", 1.0, 3)).unwrap();
            });
        }
    });

    assert_eq!(products.find(&"P9".into()).unwrap().quantity, 48);
    assert_eq!(products.find_all().len(), 1);
}

/// Concurrent puts of different products into one cart all land.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cart_puts_on_same_user_are_not_lost() {
    let carts = Arc::new(CartStore::new());
    let user: UserId = "U1".into();

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let carts = Arc::clone(&carts);
            let user = user.clone();
            tokio::spawn(async move { carts.put(&user, format!("P{i}").into(), 1) })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let items = carts.get_cart(&user);
    assert_eq!(items.len(), 32);
    for i in 0..32 {
        let product_id = format!("P{i}");
        assert_eq!(
            items.iter().filter(|item| item.product_id.as_str() == product_id).count(),
            1
        );
    }
}

/// Racing first reads of a new user's cart never yield two different carts.
#[test]
fn test_first_cart_access_races_create_one_cart() {
    let carts = Arc::new(CartStore::new());
    let user: UserId = "U7".into();
    let barrier = Arc::new(Barrier::new(8));

    thread::scope(|scope| {
        for i in 0..8 {
            let carts = Arc::clone(&carts);
            let barrier = Arc::clone(&barrier);
            let user = user.clone();
            scope.spawn(move || {
                barrier.wait();
                if i % 2 == 0 {
                    carts.get_cart(&user);
                } else {
                    carts.put(&user, format!("P{i}").into(), 1);
                }
            });
        }
    });

    assert_eq!(carts.get_cart(&user).len(), 4);
}

/// Services racing over one store never hand out the same order id.
#[test]
fn test_concurrent_order_creation_never_reuses_ids() {
    let orders = Arc::new(OrderStore::new());
    let barrier = Arc::new(Barrier::new(8));

    thread::scope(|scope| {
        for worker in 0..8 {
            let service = OrderService::new(Arc::clone(&orders));
            let barrier = Arc::clone(&barrier);
            scope.spawn(move || {
                barrier.wait();
                for _ in 0..25 {
                    service
                        .create(format!("U{worker}").into(), vec![SimpleProduct::new("P1", 1)])
                        .unwrap();
                }
            });
        }
    });

    let all = orders.find_all();
    assert_eq!(all.len(), 200);
    assert_eq!(all.first().unwrap().id.as_str(), "order_000001");
    assert_eq!(all.last().unwrap().id.as_str(), "order_000200");
}

/// Deterministic listing while writers are active on other orders.
#[test]
fn test_order_listing_stays_sorted_during_writes() {
    let orders = Arc::new(OrderStore::new());
    for i in 0..50 {
        orders.create(Order::new(format!("O{i:03}"), "U1", vec![SimpleProduct::new("P1", 1)]));
    }

    thread::scope(|scope| {
        let writer = Arc::clone(&orders);
        scope.spawn(move || {
            for i in 0..50 {
                writer
                    .update_status(&format!("O{i:03}").into(), OrderStatus::PaymentSuccessful)
                    .unwrap();
            }
        });

        let reader = Arc::clone(&orders);
        scope.spawn(move || {
            for _ in 0..50 {
                let ids: Vec<String> = reader.find_all().into_iter().map(|o| o.id.0).collect();
                let mut sorted = ids.clone();
                sorted.sort();
                assert_eq!(ids, sorted);
                assert_eq!(ids.len(), 50);
            }
        });
    });

    assert!(orders
        .find_all()
        .iter()
        .all(|o| o.status == OrderStatus::PaymentSuccessful));
}
