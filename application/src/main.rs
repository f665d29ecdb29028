use std::{convert::Infallible, io, sync::OnceLock};

use application::{Action, Args, Config, Service};
use common::operations::{By, Select};
use service::{
    command,
    domain::{cart, customer, order, Product},
    infra::{
        catalog::{All, Menu},
        payment::Simulated,
        storage::File,
        Catalog as _,
    },
    query, read, Command as _, Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    if start().await.is_err() {
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ()> {
    let Args { config, action } = Args::parse().map_err(|e| {
        _ = e.print();
    })?;

    let Config {
        service,
        storage,
        payment,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let storage = File::with_namespace(storage.dir, storage.namespace);
    let gateway = Simulated::from(payment);

    let service = Service::load(service.into(), storage, gateway)
        .await
        .map_err(|e| {
            log::error!("failed to load persisted cart snapshot: {e}");
        })?;

    run(&service, action).await
}

/// Executes the requested [`Action`] and prints its outcome.
async fn run(service: &Service, action: Action) -> Result<(), ()> {
    match action {
        Action::Menu { category } => {
            let products = match category {
                Some(kind) => {
                    infallible(Menu.execute(Select(By::new(kind))).await)
                }
                None => infallible(Menu.execute(Select(All)).await),
            };
            for p in &products {
                print_product(p);
            }
        }

        Action::Show => {
            let snapshot =
                infallible(service.execute(query::cart::Snapshot).await);
            let totals =
                infallible(service.execute(query::cart::Totals).await);
            print_cart(&snapshot, &totals);
        }

        Action::Add { product, qty, note } => {
            let found: Option<Product> =
                infallible(Menu.execute(Select(By::new(product.clone()))).await);
            let Some(found) = found else {
                log::error!("no `{product}` product on the menu");
                return Err(());
            };
            let line = service
                .execute(command::AddItem {
                    product: found,
                    quantity: qty,
                    notes: note,
                })
                .await
                .map_err(|e| log::error!("cannot add item: {}", e.as_ref()))?;
            println!(
                "{} x {} in cart ({})",
                line.quantity.get(),
                line.product.name,
                line.line_total(),
            );
        }

        Action::Remove { product } => {
            infallible(service.execute(command::RemoveItem(product)).await);
        }

        Action::SetQty { product, qty } => {
            infallible(
                service
                    .execute(command::SetQuantity {
                        product,
                        quantity: qty,
                    })
                    .await,
            );
        }

        Action::Note { product, note } => {
            infallible(
                service
                    .execute(command::UpdateLineNotes {
                        product,
                        notes: note,
                    })
                    .await,
            );
        }

        Action::OrderType { kind } => {
            infallible(service.execute(command::SetOrderKind(kind)).await);
        }

        Action::Customer {
            name,
            phone,
            email,
            address,
            dine_in_time,
        } => {
            infallible(
                service
                    .execute(command::UpdateCustomer(customer::Update {
                        name,
                        phone,
                        email,
                        address,
                        dine_in_time,
                    }))
                    .await,
            );
        }

        Action::Notes { notes } => {
            infallible(service.execute(command::SetOrderNotes(notes)).await);
        }

        Action::Clear => {
            infallible(service.execute(command::ClearCart).await);
        }

        Action::Checkout => {
            let order = service
                .execute(command::Checkout)
                .await
                .map_err(|e| log::error!("checkout failed: {}", e.as_ref()))?;
            print_order(&order);
        }
    }
    Ok(())
}

/// Unwraps a [`Result`] that cannot fail.
fn infallible<T>(result: Result<T, Infallible>) -> T {
    result.unwrap_or_else(|e| match e {})
}

/// Prints a single menu [`Product`] listing line.
fn print_product(p: &Product) {
    let mut price = p.price.to_string();
    if let (Some(original), Some(discount)) = (p.original_price, p.discount())
    {
        price = format!("{price} (was {original}, -{discount})");
    }
    let availability = if p.is_available { "" } else { " [unavailable]" };
    println!("{:<20} {:<28} {price}{availability}", p.id, p.name);
}

/// Prints the current [`cart::Cart`] with its derived totals.
fn print_cart(cart: &cart::Cart, totals: &read::cart::Totals) {
    if cart.is_empty() {
        println!("Cart is empty.");
    } else {
        for item in cart.items() {
            let note = if item.notes.is_empty() {
                String::new()
            } else {
                format!("  [{}]", item.notes)
            };
            println!(
                "{} x {:<28} {}{note}",
                item.quantity.get(),
                item.product.name,
                item.line_total(),
            );
        }
    }
    println!("Order type:   {}", cart.kind());
    if !cart.notes().is_empty() {
        println!("Notes:        {}", cart.notes());
    }
    println!("Items:        {}", totals.items);
    println!("Subtotal:     {}", totals.subtotal);
    println!("Delivery fee: {}", totals.delivery_fee);
    println!("Total:        {}", totals.total);
}

/// Prints a placed [`order::Order`] confirmation.
fn print_order(order: &order::Order) {
    println!("Order {} is {}.", order.id, order.status);
    println!("Type:         {}", order.kind);
    println!("Items:        {}", order.items.len());
    println!("Subtotal:     {}", order.subtotal);
    println!("Delivery fee: {}", order.delivery_fee);
    println!("Total:        {}", order.total);
    println!("Placed at:    {}", order.placed_at.to_rfc3339());
    println!("Ready by:     {}", order.estimated_ready_at.to_rfc3339());
}
