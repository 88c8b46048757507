//! # Commands
//!
//! Visitor actions, parsed from one line of input and routed to the
//! storefront session.
//!
//! ## Command Reference
//! ```text
//! ┌──────────────────┬───────────────────┬─────────────────────────────────┐
//! │ Input            │ Screen            │ Effect                          │
//! ├──────────────────┼───────────────────┼─────────────────────────────────┤
//! │ view <id>        │ catalog           │ open product detail             │
//! │ back             │ product detail    │ return to catalog               │
//! │ image <n>        │ product detail    │ show image n (0-based)          │
//! │ size <S|M|L|XL>  │ product detail    │ choose size                     │
//! │ qty <n>          │ product detail    │ choose quantity                 │
//! │ add              │ product detail    │ add to cart, show cart          │
//! │ toggle [id]      │ any               │ flip stock (default: displayed) │
//! │ remove <id>      │ any               │ remove cart item                │
//! │ shop             │ any               │ show catalog                    │
//! │ cart             │ any               │ show cart                       │
//! │ checkout         │ cart              │ hand off to payment provider    │
//! └──────────────────┴───────────────────┴─────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;

use std::str::FromStr;

use blvd_core::{ProductId, Size, ValidationError};
use tracing::warn;

use crate::checkout::CheckoutGateway;
use crate::error::StorefrontError;
use crate::state::{Storefront, StorefrontResult};

/// A single visitor action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    OpenCatalog,
    View(ProductId),
    Back,
    Image(usize),
    Size(Size),
    Quantity(i64),
    Add,
    Toggle(Option<ProductId>),
    Remove(ProductId),
    OpenCart,
    Checkout,
}

impl FromStr for Command {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(StorefrontError::UnknownCommand(s.trim().to_string()));
        }

        let command = match (name.as_str(), arg) {
            ("shop" | "catalog", None) => Command::OpenCatalog,
            ("view", Some(id)) => Command::View(id.parse()?),
            ("back", None) => Command::Back,
            ("image", Some(index)) => Command::Image(parse_number("image", index)?),
            ("size", Some(size)) => Command::Size(size.parse()?),
            ("qty" | "quantity", Some(qty)) => Command::Quantity(parse_number("quantity", qty)?),
            ("add", None) => Command::Add,
            ("toggle", id) => Command::Toggle(id.map(str::parse::<ProductId>).transpose()?),
            ("remove", Some(id)) => Command::Remove(id.parse()?),
            ("cart", None) => Command::OpenCart,
            ("checkout", None) => Command::Checkout,
            _ => return Err(StorefrontError::UnknownCommand(s.trim().to_string())),
        };
        Ok(command)
    }
}

fn parse_number<T: FromStr>(field: &str, raw: &str) -> Result<T, ValidationError> {
    raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not a whole number", raw),
    })
}

/// Runs one command against the session.
///
/// Failures are logged here and returned to the caller for display; the
/// session is unchanged by a failed command.
pub fn execute<G: CheckoutGateway>(
    store: &mut Storefront<G>,
    command: Command,
) -> StorefrontResult<()> {
    let result = match command {
        Command::OpenCatalog => {
            catalog::open_catalog(store);
            Ok(())
        }
        Command::View(id) => catalog::view_product(store, id),
        Command::Back => catalog::back(store),
        Command::Image(index) => catalog::select_image(store, index),
        Command::Size(size) => catalog::select_size(store, size),
        Command::Quantity(qty) => catalog::select_quantity(store, qty),
        Command::Toggle(id) => catalog::toggle_stock(store, id).map(|_| ()),
        Command::Add => cart::add_to_cart(store),
        Command::Remove(id) => cart::remove_from_cart(store, id).map(|_| ()),
        Command::OpenCart => {
            cart::open_cart(store);
            Ok(())
        }
        Command::Checkout => cart::checkout(store),
    };

    if let Err(err) = &result {
        warn!(?command, code = ?err.code(), %err, "Command rejected");
    }
    result
}

/// Replays a recorded session, returning each command's outcome in order.
pub fn replay<G, I>(store: &mut Storefront<G>, commands: I) -> Vec<StorefrontResult<()>>
where
    G: CheckoutGateway,
    I: IntoIterator<Item = Command>,
{
    commands
        .into_iter()
        .map(|command| execute(store, command))
        .collect()
}
