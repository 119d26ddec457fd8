//! Network Module
//!
//! Transport abstraction and TCP connection helper.
//!
//! ## Architecture
//! - The client never dials: it is handed an already-open [`Transport`]
//! - [`connect`] is a convenience for callers (and the CLI) that want
//!   the conventional TCP setup

mod transport;

pub use transport::{connect, Transport};
