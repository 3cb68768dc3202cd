//! Loads the bundled `data/orders.csv` fixture.

use grocery_orders::prelude::*;

fn fixture() -> OrderRepository {
    OrderRepository::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/data/orders.csv"))
}

fn order(id: u32, products: &[(&str, &str)]) -> Order {
    Order::from_pairs(
        OrderId::new(id),
        products
            .iter()
            .map(|(name, price)| (*name, price.parse::<Money>().unwrap())),
    )
}

fn first_order() -> Order {
    order(
        1,
        &[
            ("Slivered Almonds", "22.88"),
            ("Wholewheat flour", "1.93"),
            ("Grape Seed Oil", "74.9"),
        ],
    )
}

fn last_order() -> Order {
    order(
        100,
        &[
            ("Allspice", "64.74"),
            ("Bran", "14.72"),
            ("UnbleachedFlour", "80.59"),
        ],
    )
}

#[test]
fn all_returns_every_order() {
    let orders = fixture().all().unwrap();
    assert_eq!(orders.len(), 100);
    assert!(orders.iter().all(|o| !o.is_empty()));
}

#[test]
fn all_returns_ids_in_file_order() {
    let ids: Vec<u32> = fixture().ids().unwrap().iter().map(OrderId::get).collect();
    assert_eq!(ids, (1..=100).collect::<Vec<_>>());
}

#[test]
fn all_first_order_matches() {
    let orders = fixture().all().unwrap();
    let expected = first_order();

    assert_eq!(orders[0].id(), expected.id());
    assert_eq!(orders[0].products(), expected.products());
}

#[test]
fn all_last_order_matches() {
    let orders = fixture().all().unwrap();
    let expected = last_order();

    assert_eq!(orders[99].id(), expected.id());
    assert_eq!(orders[99].products(), expected.products());
}

#[test]
fn find_first_order() {
    let found = fixture().find(OrderId::new(1)).unwrap().unwrap();
    assert_eq!(found, first_order());
}

#[test]
fn find_last_order() {
    let found = fixture().find(OrderId::new(100)).unwrap().unwrap();
    assert_eq!(found, last_order());
}

#[test]
fn find_missing_order_is_none() {
    assert!(fixture().find(OrderId::new(101)).unwrap().is_none());
}

#[test]
fn loaded_order_totals() {
    let repository = fixture();

    // 99.71 + 7.48 tax
    let first = repository.find(OrderId::new(1)).unwrap().unwrap();
    assert_eq!(first.total(), Money::new(10719));

    // 160.05 + 12.00 tax
    let last = repository.find(OrderId::new(100)).unwrap().unwrap();
    assert_eq!(last.total(), Money::new(17205));
    assert_eq!(last.total().to_decimal(), 172.05);
}

#[test]
fn loaded_orders_are_independent() {
    let repository = fixture();
    let mut order = repository.find(OrderId::new(1)).unwrap().unwrap();

    assert!(order.remove_product("Grape Seed Oil", Money::new(7490)));
    assert!(order.add_product("Honey", Money::new(899)));

    // Mutations are never written back.
    let reloaded = repository.find(OrderId::new(1)).unwrap().unwrap();
    assert_eq!(reloaded, first_order());
}
