//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Output uses the compact format without the crate/module prefix (`with_target(false)`);
//! stores tag every line with an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Store Reads**: `Get` and snapshot calls at `debug`, with the id and whether it was found
//! - **Store Writes**: Inserts, stock changes, cart changes, and status updates at `info`
//! - **Failures**: Oversell attempts, unknown ids, and failed logins at `warn`
//! - **Service Calls**: One span per façade call, carrying its arguments
//!
//! ## Usage Examples
//!
//! ```bash
//! # Writes and failures only
//! RUST_LOG=info cargo run
//!
//! # Include reads and full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the stock path
//! RUST_LOG=shop_store::product_store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, a contested withdrawal looks like:
//!
//! ```text
//! INFO withdraw{product_id=P0002 quantity=1}: Stock withdrawn product_id=P0002 quantity=0
//! WARN withdraw{product_id=P0002 quantity=1}: Withdraw failed product_id=P0002 error=Insufficient stock: requested 1, available 0
//! ```
//!
//! Passwords never appear: [`UserCreate`](crate::model::UserCreate) redacts its `Debug`
//! output and [`AuthService::login`](crate::services::AuthService::login) skips it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
