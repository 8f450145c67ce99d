// Design Patterns Catalog
// Eight classic object-oriented patterns, one self-contained module each.

//! # Design Patterns Catalog
//!
//! Every pattern module exposes its types plus a `run` function that plays a
//! short scenario into a [`Transcript`]. The [`catalog`] module runs them in
//! order behind numbered banners.
//!
//! ## Structural
//! - [`p1_composite`]: articles and nested messages rendered depth-first
//! - [`p2_flyweight`]: one shared product group per name
//! - [`p5_adapter`]: a wallet behind the bank transfer interface
//!
//! ## Behavioral
//! - [`p3_template_method`]: fixed tea recipe with one pluggable step
//! - [`p4_visitor`]: portfolio items handled per kind
//! - [`p6_strategy`]: interchangeable basket discounts
//! - [`p7_iterator`]: forward-only cursor over employees
//! - [`p8_mediator`]: users sending through a bound messenger
//!
//! Run the whole catalog with:
//! ```bash
//! cargo run --bin patterns
//! cargo run --bin patterns -- --only strategy,iterator
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod transcript;

pub mod p1_composite;
pub mod p2_flyweight;
pub mod p3_template_method;
pub mod p4_visitor;
pub mod p5_adapter;
pub mod p6_strategy;
pub mod p7_iterator;
pub mod p8_mediator;

pub use catalog::{Catalog, Demo};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use transcript::Transcript;
