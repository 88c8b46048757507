//! # BLVD SAINT Storefront Entry Point
//!
//! ```text
//! $ blvd-storefront
//! === BLVD SAINT® Streetwear ===
//! > view 1
//! > size m
//! > add
//! > checkout
//! ```
//!
//! Setup lives in lib.rs so the session can be driven from tests.

fn main() -> anyhow::Result<()> {
    blvd_storefront::run()
}
