#![forbid(unsafe_code)]
//! Directory listings in grid, tree, long and long-tree views.

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod grid;
pub mod order;
pub mod paint;
pub mod select;
pub mod terminal;
pub mod tree;
pub mod view;
pub mod walk;

pub use config::ListingConfig;
pub use walk::render_listing;
