//! # Foodmarket Architecture
//!
//! Foodmarket is a small console ordering menu: pick a pizza or a burger,
//! optionally add a topping, get a price. The library holds the whole
//! ordering model; the binary only parses flags, sets up logging and wires
//! stdin/stdout into a [`session::Session`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Flags, logging setup, menu and summary printing          │
//! │  - The ONLY place that knows about process stdio            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs, input.rs)                             │
//! │  - Prompts and token parsing over any reader/writer         │
//! │  - Aborts on the first bad input, never retries             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (catalog.rs, model.rs, topping.rs, order_log.rs)     │
//! │  - Price and menu tables, the FoodItem trait                │
//! │  - Topping decorator, append-only order log                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`catalog`]: Price tables, menus, item factory
//! - [`model`]: `Category`, `Item` and the `FoodItem` trait
//! - [`topping`]: Topping decorator
//! - [`order_log`]: Append-only order log and its process-wide instance
//! - [`session`]: The interactive ordering conversation
//! - [`input`]: Whitespace token scanner
//! - [`config`]: Presentation settings
//! - [`error`]: Error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod order_log;
pub mod session;
pub mod topping;
