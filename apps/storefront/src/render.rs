//! # Text Views
//!
//! Plain-text rendering of the three screens for the terminal session. A
//! graphical front end would consume the same session queries (and the
//! `ts-rs` bindings of the core types) instead.

use std::fmt::{self, Write};

use blvd_core::{format_gbp, CartTotals, Product, Size};

use crate::checkout::CheckoutGateway;
use crate::state::{Screen, StoreConfig, Storefront};

/// Renders the active screen under the store header.
pub fn render<G: CheckoutGateway>(store: &Storefront<G>, config: &StoreConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write_screen(&mut out, store, config).ok();
    out
}

fn write_screen<G: CheckoutGateway>(
    out: &mut String,
    store: &Storefront<G>,
    config: &StoreConfig,
) -> fmt::Result {
    writeln!(out, "=== {} ===", config.store_name)?;
    writeln!(out, "[{} item(s) in cart]", store.cart().len())?;
    writeln!(out)?;

    match store.screen() {
        Screen::Catalog => render_catalog(out, store),
        Screen::ProductDetail => render_detail(out, store),
        Screen::Cart => render_cart(out, store, config),
    }
}

fn stock_badge(product: &Product) -> &'static str {
    if product.in_stock() {
        "In Stock"
    } else {
        "Out of Stock"
    }
}

fn render_catalog<G: CheckoutGateway>(out: &mut String, store: &Storefront<G>) -> fmt::Result {
    for product in store.catalog().list() {
        writeln!(
            out,
            "#{} {}  {}  [{}]  {}",
            product.id(),
            product.name(),
            format_gbp(product.price()),
            stock_badge(product),
            product.primary_image()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "view <id> | cart")?;
    Ok(())
}

fn render_detail<G: CheckoutGateway>(out: &mut String, store: &Storefront<G>) -> fmt::Result {
    // An unknown product renders nothing.
    let Some(product) = store.selected_product() else {
        return Ok(());
    };
    let selection = store.selection();

    writeln!(out, "{}", product.name())?;
    writeln!(
        out,
        "Image: {}",
        product
            .images()
            .get(selection.active_image())
            .map(String::as_str)
            .unwrap_or_default()
    )?;

    let thumbnails: Vec<String> = (0..product.images().len())
        .map(|i| {
            if i == selection.active_image() {
                format!("[{}]*", i)
            } else {
                format!("[{}]", i)
            }
        })
        .collect();
    writeln!(out, "Thumbnails: {}", thumbnails.join(" "))?;

    writeln!(out, "{}", product.description())?;
    writeln!(out, "{}  [{}]", format_gbp(product.price()), stock_badge(product))?;

    let sizes: Vec<String> = Size::ALL
        .iter()
        .map(|size| {
            if *size == selection.size() {
                format!("({})", size)
            } else {
                size.to_string()
            }
        })
        .collect();
    writeln!(out, "Size: {}", sizes.join(" "))?;
    writeln!(out, "Quantity: {}", selection.quantity())?;
    writeln!(out)?;

    let add = if product.is_available() { "add" } else { "add (unavailable)" };
    writeln!(out, "back | image <n> | size <s> | qty <n> | {} | toggle", add)?;
    Ok(())
}

fn render_cart<G: CheckoutGateway>(
    out: &mut String,
    store: &Storefront<G>,
    config: &StoreConfig,
) -> fmt::Result {
    writeln!(out, "Cart")?;

    let cart = store.cart();
    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
    }

    let unreserved = store.unreserved_items();
    for item in cart.items() {
        write!(
            out,
            "#{} {}  {} x{}  {}",
            item.product_id(),
            item.product().name(),
            item.size(),
            item.quantity(),
            format_gbp(item.line_total())
        )?;
        if unreserved.contains(&item.product_id()) {
            write!(out, "  (no longer reserved)")?;
        }
        writeln!(out)?;
    }

    let totals = CartTotals::from(cart);
    writeln!(out)?;
    writeln!(out, "Total: {}", format_gbp(totals.total))?;
    writeln!(out, "Support: {}", config.support_email)?;
    writeln!(out)?;
    writeln!(out, "remove <id> | shop | checkout (GBP)")?;
    Ok(())
}
