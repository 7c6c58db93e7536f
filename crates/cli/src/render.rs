//! Text rendering of store entities.

use domain::{Order, Product, User};

pub fn product(product: &Product) -> String {
    format!(
        "Name: {}, Price: {}, Category: {}, Rating: {:.1}, Description: {}",
        product.name(),
        product.price(),
        product.category(),
        product.rating(),
        product.description()
    )
}

pub fn order(order: &Order) -> String {
    let mut text = String::from("Order:\n");
    for item in order.items() {
        text.push_str(&format!(
            "- {} (x{})\n",
            item.product().name(),
            item.quantity()
        ));
    }
    text.push_str(&format!(
        "Total: {}, Status: {}",
        order.total(),
        order.status()
    ));
    if let Some(placed_at) = order.placed_at() {
        text.push_str(&format!(", Placed: {}", placed_at.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    text
}

pub fn user(user: &User) -> String {
    format!(
        "User: {}, Orders: {}",
        user.login(),
        user.order_history().len()
    )
}
