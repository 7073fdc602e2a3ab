//! Cart rendering for the terminal.

use shoebox_cart::{Catalog, CartStore, Notifier, SnapshotStore};
use shoebox_core::format_usd;

/// Print the current cart as a table with line totals and a subtotal.
#[allow(clippy::print_stdout)]
pub async fn print_cart<C, S, N>(store: &CartStore<C, S, N>)
where
    C: Catalog,
    S: SnapshotStore,
    N: Notifier,
{
    let cart = store.cart().await;

    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    println!("{:>6}  {:<30} {:>6} {:>10} {:>10}", "id", "product", "qty", "price", "total");
    for item in cart.items() {
        println!(
            "{:>6}  {:<30} {:>6} {:>10} {:>10}",
            item.id,
            item.name,
            item.amount,
            format_usd(item.price),
            format_usd(item.line_total()),
        );
    }
    let summary = format!(
        "subtotal ({} items): {}",
        cart.total_quantity(),
        format_usd(cart.subtotal())
    );
    println!("{summary:>66}");
}
