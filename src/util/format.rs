//! Display formatting for prices and counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Amount with exactly two decimals, e.g. `$ 19.98`.
pub fn format_currency(amount: f64) -> String {
    format!("$ {amount:.2}")
}

/// Unit price in its shortest decimal form, e.g. `$ 109.95` or `$ 55`.
pub fn format_price(price: f64) -> String {
    format!("$ {price}")
}

/// Cart line quantity, e.g. `2 x $ 9.99`.
pub fn format_line_quantity(qty: u32, price: f64) -> String {
    format!("{qty} x {}", format_price(price))
}

pub fn format_item_count(count: u32) -> String {
    format!("{count} items")
}
