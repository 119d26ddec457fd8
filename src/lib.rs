//! # monkeylink
//!
//! A thread-safe client for driving an on-device UI-automation agent
//! over a persistent TCP connection, with:
//! - A line-oriented ASCII request/response protocol (one line each way)
//! - Strictly ordered 1:1 command/response exchanges
//! - Typed operations for touch, key, text, and view-query commands
//! - A single coarse per-instance lock so concurrent callers never
//!   interleave on the wire
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Caller Threads                          │
//! │               (tap / type / query / ...)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    MonkeyClient                              │
//! │         (exchange lock: write + flush + read)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │  Transport  │
//!   │ (line codec)│          │ (TcpStream) │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │Remote Agent │
//!                           │ (on device) │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod net;
pub mod view;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LinkError, Result};
pub use config::Config;
pub use client::MonkeyClient;
pub use protocol::PhysicalButton;
pub use view::{IdKind, ViewRef};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of monkeylink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
