// ABOUTME: Fridge commands for fridgechef-cli
// ABOUTME: List, add, remove, and quick-add suggestions for the user's inventory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use anyhow::Result;
use fridgechef::errors::AppError;
use fridgechef::intelligence::{format_amount, normalize_text};
use fridgechef::models::Product;
use fridgechef::notifications::Notification;

use super::Session;
use crate::helpers::display::{print_inventory, print_notification, print_products};

/// Print the inventory
pub async fn list(session: &Session) {
    print_inventory(&session.inventory.snapshot().await.items);
}

/// Add a catalog product, or replace its quantity when `replace` is set
pub async fn add(session: &Session, reference: &str, quantity: f64, replace: bool) -> Result<()> {
    let user_id = session.user_id().await?;
    let product = resolve_catalog_product(session, reference).await?;
    let name = product.name.clone();
    let unit = product.default_unit.clone();

    if replace {
        session
            .inventory
            .replace_product(&user_id, product, quantity)
            .await?;
    } else {
        session
            .inventory
            .add_product(&user_id, product, quantity)
            .await?;
    }

    print_notification(&Notification::success(
        "Product added",
        format!("{} {unit} of {name} in your fridge", format_amount(quantity)),
    ));
    Ok(())
}

/// Remove a product held in the fridge, matched by id or name
pub async fn remove(session: &Session, reference: &str) -> Result<()> {
    let user_id = session.user_id().await?;
    let wanted = normalize_text(reference.trim());
    let held = session
        .inventory
        .snapshot()
        .await
        .items
        .into_iter()
        .find(|item| item.product_id() == reference || normalize_text(item.name()) == wanted);

    let Some(item) = held else {
        print_notification(&Notification::success(
            "Nothing to remove",
            format!("{reference} is not in your fridge"),
        ));
        return Ok(());
    };

    session
        .inventory
        .remove_product(&user_id, item.product_id())
        .await?;
    print_notification(&Notification::success(
        "Product removed",
        format!("{} removed from your fridge", item.name()),
    ));
    Ok(())
}

/// Catalog products not yet in the fridge
pub async fn suggest(session: &Session, query: Option<&str>, limit: usize) -> Result<()> {
    session.catalog.fetch_products().await?;
    let inventory = session.inventory.snapshot().await.items;
    let catalog = session.catalog.snapshot().await;

    let suggestions = match query {
        Some(query) => {
            let matching = catalog.search(query);
            matching
                .into_iter()
                .filter(|product| !inventory.iter().any(|item| item.product_id() == product.id))
                .take(limit)
                .collect()
        }
        None => catalog.quick_add_candidates(&inventory, limit),
    };
    print_products(&suggestions);
    Ok(())
}

async fn resolve_catalog_product(session: &Session, reference: &str) -> Result<Product> {
    session.catalog.fetch_products().await?;
    let catalog = session.catalog.snapshot().await;
    let product = catalog
        .resolve(reference)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Product '{reference}'")))?;
    Ok(product)
}
