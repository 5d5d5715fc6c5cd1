//! # Session Commands
//!
//! Translates one line of input into one [`Store`] operation and a JSON reply.
//!
//! ## Command Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Line                        Store operation              Reply kind   │
//! │  ────                        ───────────────              ──────────   │
//! │  view <name>                 set_view                     state        │
//! │  open <id>                   open_product_by_id           state        │
//! │  close                       close_modal                  state        │
//! │  buy                         buy_from_modal               cart         │
//! │  add <id>                    add_to_cart_by_id            cart         │
//! │  remove <id>                 remove_from_cart             cart         │
//! │  remove-all <id>             remove_all_from_cart         cart         │
//! │  clear                       clear_cart                   cart         │
//! │  search [--premium] [q..]    filtered(&FilterState)       products     │
//! │  featured                    featured_products            products     │
//! │  cart                        cart_entries + summary       cart         │
//! │  state                       current_view + modal         state        │
//! │  confirm                     confirm_order                receipt      │
//! │  fail [reason..]             fail_order                   cart         │
//! │  quit | exit                 (ends the session)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Replies are `{"ok":true,"data":{"kind":...}}` or
//! `{"ok":false,"error":{"code":...,"message":...}}`.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use luxsite_core::{FilterState, OrderReceipt, Product, Store, View};

use crate::config::StorefrontConfig;
use crate::error::ApiError;

// =============================================================================
// Command
// =============================================================================

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    View(String),
    Open(String),
    Close,
    Buy,
    Add(String),
    Remove(String),
    RemoveAll(String),
    Clear,
    Search(FilterState),
    Featured,
    Cart,
    State,
    Confirm,
    Fail(String),
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| ApiError::invalid_command("empty command"))?;
        let args: Vec<&str> = tokens.collect();

        let command = match name {
            "view" => Command::View(single_arg(name, &args)?),
            "open" => Command::Open(single_arg(name, &args)?),
            "add" => Command::Add(single_arg(name, &args)?),
            "remove" => Command::Remove(single_arg(name, &args)?),
            "remove-all" => Command::RemoveAll(single_arg(name, &args)?),
            "close" => no_args(name, &args, Command::Close)?,
            "buy" => no_args(name, &args, Command::Buy)?,
            "clear" => no_args(name, &args, Command::Clear)?,
            "featured" => no_args(name, &args, Command::Featured)?,
            "cart" => no_args(name, &args, Command::Cart)?,
            "state" => no_args(name, &args, Command::State)?,
            "confirm" => no_args(name, &args, Command::Confirm)?,
            "quit" | "exit" => no_args(name, &args, Command::Quit)?,
            "search" => {
                let premium_only = args.contains(&"--premium");
                let query = args
                    .iter()
                    .filter(|a| **a != "--premium")
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ");
                Command::Search(FilterState::new(query, premium_only))
            }
            "fail" => {
                let reason = if args.is_empty() {
                    "unspecified".to_string()
                } else {
                    args.join(" ")
                };
                Command::Fail(reason)
            }
            other => {
                return Err(ApiError::invalid_command(format!(
                    "unknown command '{}'",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn single_arg(name: &str, args: &[&str]) -> Result<String, ApiError> {
    match args {
        [arg] => Ok((*arg).to_string()),
        _ => Err(ApiError::invalid_command(format!(
            "'{}' takes exactly one argument",
            name
        ))),
    }
}

fn no_args(name: &str, args: &[&str], command: Command) -> Result<Command, ApiError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ApiError::invalid_command(format!(
            "'{}' takes no arguments",
            name
        )))
    }
}

// =============================================================================
// Replies
// =============================================================================

/// How many features a product card lists.
pub const CARD_FEATURE_COUNT: usize = 2;

/// Product as shown to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub title: String,
    pub price_cents: i64,
    /// Formatted with the configured currency, e.g. `$25,000.00`.
    pub price: String,
    pub industry: String,
    pub features: Vec<String>,
    /// The first [`CARD_FEATURE_COUNT`] features, for the product card.
    pub card_features: Vec<String>,
    pub thumbnail: String,
    pub premium: bool,
}

impl ProductDto {
    pub fn new(product: &Product, config: &StorefrontConfig) -> Self {
        ProductDto {
            id: product.id.clone(),
            title: product.title.clone(),
            price_cents: product.price_cents,
            price: config.format_currency(product.price_cents),
            industry: product.industry.clone(),
            features: product.features.clone(),
            card_features: product.feature_summary(CARD_FEATURE_COUNT).to_vec(),
            thumbnail: product.thumbnail.clone(),
            premium: product.premium,
        }
    }
}

/// Cart contents and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<ProductDto>,
    pub item_count: usize,
    pub subtotal_cents: i64,
    pub subtotal: String,
    pub total_cents: i64,
    pub total: String,
}

impl CartResponse {
    fn from_store(store: &Store, config: &StorefrontConfig) -> Self {
        let summary = store.checkout_summary();
        CartResponse {
            items: store
                .cart_entries()
                .iter()
                .map(|p| ProductDto::new(p, config))
                .collect(),
            item_count: summary.item_count,
            subtotal_cents: summary.subtotal.cents(),
            subtotal: config.format_currency(summary.subtotal.cents()),
            total_cents: summary.total.cents(),
            total: config.format_currency(summary.total.cents()),
        }
    }
}

/// What the page chrome needs: current view, open modal, cart badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    pub store_name: String,
    pub view: View,
    pub modal: Option<ProductDto>,
    pub cart_count: usize,
}

impl StateResponse {
    fn from_store(store: &Store, config: &StorefrontConfig) -> Self {
        StateResponse {
            store_name: config.store_name.clone(),
            view: store.current_view(),
            modal: store
                .current_modal()
                .product()
                .map(|p| ProductDto::new(p, config)),
            cart_count: store.cart_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub order_id: String,
    pub item_count: usize,
    pub total_cents: i64,
    pub total: String,
    pub placed_at: DateTime<Utc>,
}

impl ReceiptResponse {
    fn new(receipt: OrderReceipt, config: &StorefrontConfig) -> Self {
        ReceiptResponse {
            total: config.format_currency(receipt.total.cents()),
            total_cents: receipt.total.cents(),
            order_id: receipt.order_id,
            item_count: receipt.item_count,
            placed_at: receipt.placed_at,
        }
    }
}

/// Successful reply payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Reply {
    State(StateResponse),
    Cart(CartResponse),
    Products { products: Vec<ProductDto> },
    Receipt(ReceiptResponse),
}

#[derive(Serialize)]
struct Envelope<'a> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Reply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a ApiError>,
}

/// Encodes a command outcome as a single JSON line (without newline).
pub fn render(outcome: &Result<Reply, ApiError>) -> Result<String, serde_json::Error> {
    let envelope = match outcome {
        Ok(reply) => Envelope {
            ok: true,
            data: Some(reply),
            error: None,
        },
        Err(err) => Envelope {
            ok: false,
            data: None,
            error: Some(err),
        },
    };
    serde_json::to_string(&envelope)
}

// =============================================================================
// Execution
// =============================================================================

/// Runs `command` against `store`.
///
/// [`Command::Quit`] is handled by the session loop; executing it here just
/// reports the current state.
pub fn execute(
    store: &mut Store,
    config: &StorefrontConfig,
    command: Command,
) -> Result<Reply, ApiError> {
    debug!(?command, "execute");

    let reply = match command {
        Command::View(name) => {
            store.set_view(&name)?;
            Reply::State(StateResponse::from_store(store, config))
        }
        Command::Open(id) => {
            store.open_product_by_id(&id)?;
            Reply::State(StateResponse::from_store(store, config))
        }
        Command::Close => {
            store.close_modal();
            Reply::State(StateResponse::from_store(store, config))
        }
        Command::Buy => {
            store.buy_from_modal();
            Reply::Cart(CartResponse::from_store(store, config))
        }
        Command::Add(id) => {
            store.add_to_cart_by_id(&id)?;
            Reply::Cart(CartResponse::from_store(store, config))
        }
        Command::Remove(id) => {
            store.remove_from_cart(&id);
            Reply::Cart(CartResponse::from_store(store, config))
        }
        Command::RemoveAll(id) => {
            store.remove_all_from_cart(&id);
            Reply::Cart(CartResponse::from_store(store, config))
        }
        Command::Clear => {
            store.clear_cart();
            Reply::Cart(CartResponse::from_store(store, config))
        }
        Command::Search(filter) => Reply::Products {
            products: store
                .filtered(&filter)
                .iter()
                .map(|p| ProductDto::new(p, config))
                .collect(),
        },
        Command::Featured => Reply::Products {
            products: store
                .featured_products()
                .iter()
                .map(|p| ProductDto::new(p, config))
                .collect(),
        },
        Command::Cart => Reply::Cart(CartResponse::from_store(store, config)),
        Command::State | Command::Quit => Reply::State(StateResponse::from_store(store, config)),
        Command::Confirm => Reply::Receipt(ReceiptResponse::new(store.confirm_order(), config)),
        Command::Fail(reason) => {
            store.fail_order(&reason);
            Reply::Cart(CartResponse::from_store(store, config))
        }
    };

    Ok(reply)
}
