//! Tests for command dispatch over the in-memory stores.

use std::sync::Arc;

use crate::catalog::{
    adapters::memory::InMemoryProductRepository,
    domain::{NewProduct, Price, Product, ProductFilter, ProductPatch, Slug},
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};
use crate::command::{
    domain::{CommandInvocation, CommandReply},
    services::CommandDispatcher,
};
use crate::orders::{
    adapters::memory::InMemoryOrderRepository,
    domain::{CustomerDetails, NewOrder, NewOrderItem, OrderNumber},
    ports::OrderRepository,
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;

type Products = InMemoryProductRepository<DefaultClock>;
type Orders = InMemoryOrderRepository<DefaultClock>;

const ADMIN: &str = "447700900123";

struct Harness {
    products: Arc<Products>,
    orders: Arc<Orders>,
    dispatcher: CommandDispatcher<Products, Orders>,
}

impl Harness {
    async fn send(&self, text: &str) -> CommandReply {
        let invocation = CommandInvocation::parse(text).expect("command text");
        self.dispatcher.dispatch(&invocation, ADMIN).await
    }

    async fn stock_product(&self, name: &str, price: &str) -> Product {
        let product = NewProduct::new(
            name,
            Slug::from_name(name).expect("slug"),
            Price::parse(price).expect("price"),
        )
        .expect("product");
        self.products
            .insert(&product)
            .await
            .expect("insert should succeed")
    }
}

#[fixture]
fn harness() -> Harness {
    let products = Arc::new(InMemoryProductRepository::new(DefaultClock));
    let orders = Arc::new(InMemoryOrderRepository::new(DefaultClock));
    let dispatcher = CommandDispatcher::new(Arc::clone(&products), Arc::clone(&orders));
    Harness {
        products,
        orders,
        dispatcher,
    }
}

mockall::mock! {
    BrokenCatalog {}

    #[async_trait]
    impl ProductRepository for BrokenCatalog {
        async fn insert(&self, product: &NewProduct) -> ProductRepositoryResult<Product>;
        async fn find_by_slug(&self, slug: &Slug) -> ProductRepositoryResult<Option<Product>>;
        async fn update_by_slug(
            &self,
            slug: &Slug,
            patch: &ProductPatch,
        ) -> ProductRepositoryResult<Option<Product>>;
        async fn list(
            &self,
            filter: ProductFilter,
            limit: usize,
        ) -> ProductRepositoryResult<Vec<Product>>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn help_lists_every_command(harness: Harness) {
    let reply = harness.send("/help").await;

    assert!(reply.succeeded);
    for usage in ["/list type=products", "/add name=", "/stock <slug>", "/order <number>"] {
        assert!(reply.text.contains(usage), "missing {usage} in {}", reply.text);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_reports_slug_and_price(harness: Harness) {
    let reply = harness.send("/add name=Pie price=50").await;

    assert!(reply.succeeded, "{}", reply.text);
    assert!(reply.text.contains("Slug: pie"));
    assert!(reply.text.contains("Price: 50"));
    let stored = harness
        .products
        .find_by_slug(&Slug::new("pie").expect("slug"))
        .await
        .expect("lookup should succeed");
    assert!(stored.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_with_negative_price_fails_without_store_write(harness: Harness) {
    let reply = harness.send("/add name=Pie price=-5").await;

    assert!(!reply.succeeded);
    assert_eq!(reply.error_message, None);
    let listed = harness
        .products
        .list(ProductFilter::All, 20)
        .await
        .expect("list should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_with_taken_slug_is_a_store_fault(harness: Harness) {
    harness.stock_product("Pie", "4").await;

    let reply = harness.send("/add name=Pie price=5").await;

    assert!(!reply.succeeded);
    assert_eq!(reply.text, "⚠️ Could not complete /add. Please try again later.");
    assert!(
        reply
            .error_message
            .as_deref()
            .is_some_and(|detail| detail.contains("pie"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_with_unknown_category_names_the_category(harness: Harness) {
    let reply = harness.send("/add name=Pie price=5 category=desserts").await;

    assert!(!reply.succeeded);
    assert!(reply.text.contains("desserts"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stock_on_missing_slug_replies_not_found(harness: Harness) {
    let reply = harness.send("/stock missing-slug active").await;

    assert_eq!(
        reply,
        CommandReply {
            text: "❌ Product 'missing-slug' not found.".to_owned(),
            succeeded: false,
            error_message: None,
        }
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stock_toggles_availability(harness: Harness) {
    harness.stock_product("Pie", "4").await;

    let reply = harness.send("/stock pie inactive").await;

    assert!(reply.succeeded);
    assert_eq!(reply.text, "✅ Pie (pie) is now inactive");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_fields_and_echoes_them(harness: Harness) {
    harness.stock_product("Pie", "4").await;

    let reply = harness.send("/update pie price=6.5 stock=9").await;

    assert!(reply.succeeded);
    assert!(reply.text.contains("Price: 6.5"));
    assert!(reply.text.contains("Stock: 9"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_shows_active_products_by_default(harness: Harness) {
    harness.stock_product("Pie", "4").await;
    harness.stock_product("Tart", "3").await;
    harness.send("/stock tart inactive").await;

    let active = harness.send("/list type=products").await;
    let all = harness.send("/list type=products filter=all").await;

    assert!(active.text.contains("Pie (pie)"));
    assert!(!active.text.contains("Tart"));
    assert!(all.text.contains("Tart (tart) - 3 [inactive]"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_with_no_products_says_so(harness: Harness) {
    let reply = harness.send("/list type=products").await;

    assert!(reply.succeeded);
    assert_eq!(reply.text, "📦 No active products.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_command_is_a_failure_reply(harness: Harness) {
    let reply = harness.send("/dance").await;

    assert!(!reply.succeeded);
    assert!(reply.text.contains("/dance"));
    assert_eq!(reply.error_message, None);
}

async fn place_order(orders: &Orders, number: &str) -> OrderNumber {
    let number = OrderNumber::new(number).expect("order number");
    let customer = CustomerDetails {
        name: "Ada".to_owned(),
        phone: "+447700900999".to_owned(),
        email: None,
        delivery_address: "1 Analytical Row".to_owned(),
        special_instructions: None,
    };
    let item = NewOrderItem {
        product_id: None,
        product_name: "Pie".to_owned(),
        product_price: Decimal::new(45, 1),
        quantity: 2,
        total_price: Decimal::new(9, 0),
        product_image_url: None,
        product_slug: Some("pie".to_owned()),
    };
    let order = NewOrder::new(customer, vec![item], Decimal::new(9, 0)).expect("order");
    orders
        .place(&number, &order)
        .await
        .expect("place should succeed");
    number
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn order_shows_itemised_summary(harness: Harness) {
    place_order(&harness.orders, "ORD-1-001").await;

    let reply = harness.send("/order ORD-1-001").await;

    assert!(reply.succeeded);
    assert!(reply.text.starts_with("🧾 Order ORD-1-001\nStatus: pending"));
    assert!(reply.text.contains("• 2 x Pie @ 4.5 = 9"));
    assert!(reply.text.ends_with("Total: 9"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn order_with_status_updates_it(harness: Harness) {
    let number = place_order(&harness.orders, "ORD-1-001").await;

    let reply = harness.send("/order ORD-1-001 status=ready").await;
    let orders = harness.send("/orders status=ready").await;

    assert_eq!(reply.text, "✅ Order ORD-1-001 is now ready");
    assert!(orders.text.contains(number.as_str()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn order_on_missing_number_replies_not_found(harness: Harness) {
    let reply = harness.send("/order ORD-0-000 status=ready").await;

    assert!(!reply.succeeded);
    assert_eq!(reply.text, "❌ Order ORD-0-000 not found.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failure_is_redacted_in_reply() {
    let mut catalog = MockBrokenCatalog::new();
    catalog.expect_list().returning(|_, _| {
        Err(ProductRepositoryError::persistence(std::io::Error::other(
            "connection refused",
        )))
    });
    let dispatcher = CommandDispatcher::new(
        Arc::new(catalog),
        Arc::new(InMemoryOrderRepository::new(DefaultClock)),
    );
    let invocation = CommandInvocation::parse("/list type=products").expect("command");

    let reply = dispatcher.dispatch(&invocation, ADMIN).await;

    assert!(!reply.succeeded);
    assert!(!reply.text.contains("connection refused"));
    assert!(
        reply
            .error_message
            .as_deref()
            .is_some_and(|detail| detail.contains("connection refused"))
    );
}
