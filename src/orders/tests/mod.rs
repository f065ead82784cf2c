//! Unit tests for orders.


use crate::orders::domain::{CustomerDetails, NewOrder, NewOrderItem};
use rust_decimal::Decimal;

pub(super) fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Ada".to_owned(),
        phone: "+447700900123".to_owned(),
        email: None,
        delivery_address: "1 Analytical Row".to_owned(),
        special_instructions: Some("Ring twice".to_owned()),
    }
}

pub(super) fn item(name: &str, price: i64, quantity: u32) -> NewOrderItem {
    let unit = Decimal::new(price, 0);
    NewOrderItem {
        product_id: None,
        product_name: name.to_owned(),
        product_price: unit,
        quantity,
        total_price: unit * Decimal::from(quantity),
        product_image_url: None,
        product_slug: None,
    }
}

pub(super) fn order() -> NewOrder {
    NewOrder::new(
        customer(),
        vec![item("Pie", 12, 2), item("Soup", 5, 1)],
        Decimal::new(29, 0),
    )
    .expect("valid order")
}
