//! # Shop Store
//!
//! > **Concurrent in-memory stores for a small online shop.**
//!
//! Four independent stores (users, product stock, carts, and orders) shared by many
//! request handlers at once. Each store stays consistent on its own, with no
//! coordination from its callers.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One Lock, Whole Operation
//! Every store owns exactly one reader/writer lock over its whole key space. Lookups share
//! the read lock. Anything that might mutate takes the write lock for the *entire* logical
//! operation, including the "does it exist / is there enough" read that precedes the write.
//! That rule is what makes the interesting guarantees hold:
//! - **No oversell**: two concurrent withdrawals can't both pass the stock check.
//! - **No lost cart updates**: two concurrent puts on the same cart both land.
//! - **No clobbered inserts**: two concurrent adds of a new product can't both insert.
//!
//! ### Snapshots, Not Handles
//! Every read returns clones. Callers can't reach into a store and mutate a record behind
//! its lock.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceStore<T>`](framework::ResourceStore) that every store is built on.
//! - **Key items**: [`Entity`](framework::Entity), [`ResourceStore`](framework::ResourceStore).
//!
//! ### 2. The Stores ([`user_store`], [`product_store`], [`cart_store`], [`order_store`])
//! Thin domain wrappers with the operations each record type supports, and one error enum
//! per store.
//!
//! ### 3. The Façades ([`services`])
//! Validation in front of the stores: empty ids and zero quantities are rejected here, and
//! the order lifecycle is enforced here.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Builds the stores once, seeds them, and hands out shared handles.
//! - **Key items**: [`StoreSystem`](lifecycle::StoreSystem), [`SystemConfig`](lifecycle::SystemConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```
//!
//! ## Out of Scope
//!
//! HTTP transport, token issuance, mail, and payment are callers of this crate, not part of
//! it. Nothing is persisted, and no operation spans more than one store.

pub mod cart_store;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod product_store;
pub mod services;
pub mod user_store;
