//! End-to-end flows: customer cart → checkout → waiter → admin analytics

use rust_decimal::Decimal;
use shared::models::{MenuCategory, MenuData, MenuItem};
use shared::order::{OrderStatus, GUEST_TABLE};
use tandoor_core::analytics;
use tandoor_core::persist::{JsonFileStore, MemoryStore};
use tandoor_core::utils::init_logger;
use tandoor_core::{AnalyticsConfig, Session};
use std::sync::Once;

static LOGGER: Once = Once::new();

fn setup() {
    LOGGER.call_once(init_logger);
}

fn item(id: &str, price: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: format!("Item {id}"),
        price: price.to_string(),
        category: "Mains".to_string(),
        image_url: None,
        image_prompt: None,
    }
}

#[test]
fn customer_cart_lifecycle() {
    setup();
    let mut session = Session::open(Box::new(MemoryStore::new()));
    assert!(session.cart().is_empty());

    session.add_to_cart(&item("m1", "220"));
    assert_eq!(session.cart().total_count(), 1);
    assert_eq!(session.cart().total_price(), Decimal::from(220));

    session.increase_qty("m1");
    assert_eq!(session.cart().total_count(), 2);
    assert_eq!(session.cart().total_price(), Decimal::from(440));

    session.decrease_qty("m1");
    session.decrease_qty("m1");
    assert!(session.cart().is_empty());
}

#[test]
fn checkout_to_waiter_to_admin() {
    setup();
    let mut session = Session::open(Box::new(MemoryStore::new()));
    session.add_to_cart(&item("m1", "220"));
    session.increase_qty("m1");

    let order = session.place_order(Some("5".to_string())).unwrap();
    assert_eq!(session.orders().len(), 1);
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.total_text, "440");

    // Waiter marks it served
    session.update_order_status(&order.id, OrderStatus::Served);
    assert_eq!(
        session.orders().get(&order.id).unwrap().status,
        OrderStatus::Served
    );

    // Admin sees table 5 with one order worth 440
    let summary = analytics::table_sales_summary(session.orders().orders());
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].table, "5");
    assert_eq!(summary[0].order_count, 1);
    assert_eq!(summary[0].total_sales, Decimal::from(440));

    let stats = analytics::revenue_stats(session.orders().orders(), &AnalyticsConfig::default());
    assert_eq!(stats.orders_today, 1);
    assert_eq!(stats.daily_revenue, Decimal::from(440));
    assert_eq!(stats.historical_revenue, Decimal::from(440));
}

#[test]
fn table_ranking_across_multiple_orders() {
    setup();
    let mut session = Session::open(Box::new(MemoryStore::new()));

    session.add_to_cart(&item("m1", "100"));
    session.place_order(Some("A".to_string())).unwrap();

    session.add_to_cart(&item("m2", "200"));
    session.place_order(Some("A".to_string())).unwrap();

    session.add_to_cart(&item("m3", "500"));
    session.place_order(Some("B".to_string())).unwrap();

    let summary = analytics::table_sales_summary(session.orders().orders());
    assert_eq!(summary.len(), 2);
    assert_eq!((summary[0].table.as_str(), summary[0].order_count), ("B", 1));
    assert_eq!(summary[0].total_sales, Decimal::from(500));
    assert_eq!((summary[1].table.as_str(), summary[1].order_count), ("A", 2));
    assert_eq!(summary[1].total_sales, Decimal::from(300));
}

#[test]
fn catalog_lookup_feeds_the_cart() {
    setup();
    let menu = MenuData {
        restaurant_name: "Tandoor".to_string(),
        categories: vec![
            MenuCategory {
                category_name: "Starters".to_string(),
                items: vec![item("s1", "120")],
                image_url: None,
            },
            MenuCategory {
                category_name: "Mains".to_string(),
                items: vec![item("m1", "220")],
                image_url: None,
            },
        ],
    };

    // The customer view resolves tapped item IDs against the catalog
    let mut session = Session::open(Box::new(MemoryStore::new()));
    for id in ["m1", "s1", "m1"] {
        session.add_to_cart(menu.find_item(id).unwrap());
    }
    assert!(menu.find_item("ghost").is_none());

    assert_eq!(session.cart().total_count(), 3);
    assert_eq!(session.cart().total_price(), Decimal::from(560));
    assert_eq!(session.cart().get("m1").unwrap().quantity, 2);
}

#[test]
fn no_table_link_scans_as_guest() {
    setup();
    let mut session = Session::open(Box::new(MemoryStore::new()));
    session.add_to_cart(&item("m1", "220"));
    let order = session.place_order(None).unwrap();
    assert_eq!(order.table.as_deref(), Some(GUEST_TABLE));
}

#[test]
fn state_survives_a_restart() {
    setup();
    let dir = tempfile::tempdir().unwrap();

    let placed = {
        let mut session = Session::open(Box::new(JsonFileStore::new(dir.path())));
        session.add_to_cart(&item("m1", "220"));
        let order = session.place_order(Some("5".to_string())).unwrap();
        session.add_to_cart(&item("m2", "100"));
        order
    };

    // New session over the same directory restores both blobs
    let mut session = Session::open(Box::new(JsonFileStore::new(dir.path())));
    assert_eq!(session.cart().total_count(), 1);
    assert_eq!(session.cart().get("m2").unwrap().price, "100");
    assert_eq!(session.orders().len(), 1);
    assert_eq!(session.orders().get(&placed.id).unwrap(), &placed);

    // And the restored ledger still accepts status updates
    session.update_order_status(&placed.id, OrderStatus::Served);
    let reread = Session::open(Box::new(JsonFileStore::new(dir.path())));
    assert_eq!(
        reread.orders().get(&placed.id).unwrap().status,
        OrderStatus::Served
    );
}

#[test]
fn clearing_orders_resets_analytics() {
    setup();
    let mut session = Session::open(Box::new(MemoryStore::new()));
    session.add_to_cart(&item("m1", "220"));
    session.place_order(None).unwrap();

    session.clear_orders();
    assert!(session.orders().is_empty());

    let stats = analytics::revenue_stats(session.orders().orders(), &AnalyticsConfig::default());
    assert_eq!(stats.historical_revenue, Decimal::ZERO);
    assert_eq!(stats.profit_margin_percent, Decimal::ZERO);
}
