//! # System Lifecycle
//!
//! This module builds the store system once at startup and hands out shared handles.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`SystemConfig`] with defaults and environment overrides
//! 2. **Store Creation** - [`StoreSystem::new`] builds all four stores, optionally seeded
//! 3. **Dependency Injection** - Stores are shared by `Arc`, never reached through globals
//! 4. **Observability Setup** - [`setup_tracing`] initializes structured logging
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! let system = StoreSystem::new(&SystemConfig::from_env()?)?;
//!
//! // Request handlers receive clones of the handles they need
//! let stock = system.stock_service();
//! tokio::spawn(async move { stock.withdraw(SimpleProduct::new("P0001", 1)) });
//! ```
//!
//! Because nothing is global, tests build as many independent systems as they like.

pub mod config;
pub mod error;
pub mod seed;
pub mod store_system;
pub mod tracing;

pub use self::config::*;
pub use self::error::*;
pub use self::store_system::*;
pub use self::tracing::*;
