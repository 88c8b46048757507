//! # Session State
//!
//! Everything the storefront holds in memory for one visitor session.
//!
//! ```text
//! state/
//! ├── config.rs      ◄─── StoreConfig (env + defaults)
//! ├── seed.rs        ◄─── Seed catalog (built-in or JSON file)
//! ├── selection.rs   ◄─── Transient product-detail selection
//! └── storefront.rs  ◄─── Storefront aggregate + screen state machine
//! ```

mod config;
pub mod seed;
mod selection;
mod storefront;

pub use config::{ConfigError, StoreConfig};
pub use selection::Selection;
pub use storefront::{Screen, Storefront, StorefrontResult};
