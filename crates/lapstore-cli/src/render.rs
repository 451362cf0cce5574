use lapstore_core::{format_price, ProductDisplayRecord};

/// Prints one line per product: id, name, price (struck original when on
/// sale), rating and stock.
pub(crate) fn print_products(products: &[ProductDisplayRecord]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }
    for product in products {
        println!("{}", product_line(product));
    }
}

pub(crate) fn product_line(product: &ProductDisplayRecord) -> String {
    let price = match (product.sale_price, product.original_price) {
        (Some(sale), Some(original)) if product.is_discounted() => {
            format!("{}₫ (was {}₫)", format_price(sale), format_price(original))
        }
        (Some(price), _) | (None, Some(price)) => format!("{}₫", format_price(price)),
        (None, None) => "price n/a".to_owned(),
    };
    let rating = match (product.rate, product.num_rate) {
        (Some(rate), Some(n)) => format!("{rate:.1}★ ({n})"),
        (Some(rate), None) => format!("{rate:.1}★"),
        _ => "unrated".to_owned(),
    };
    let stock = if product.in_stock { "in stock" } else { "out of stock" };
    format!(
        "#{:<6} {}  |  {}  |  {}  |  {}",
        product.product_id, product.product_name, price, rating, stock
    )
}
