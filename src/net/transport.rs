//! Transport abstraction
//!
//! The client reads and writes through independent handles onto one
//! underlying duplex channel, so a blocked read never prevents an
//! out-of-band teardown from another thread.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{LinkError, Result};

/// An ordered, reliable duplex byte channel to the automation agent.
///
/// Implementations must hand out additional handles onto the same channel
/// (`try_clone`) and support tearing the channel down from any handle
/// (`shutdown`), which unblocks a reader parked on another handle.
pub trait Transport: Read + Write + Send + Sized {
    /// Open another handle onto the same underlying channel
    fn try_clone(&self) -> io::Result<Self>;

    /// Tear the channel down in both directions.
    ///
    /// After this call, reads on any handle observe end-of-stream or an
    /// error and writes fail.
    fn shutdown(&self) -> io::Result<()>;
}

impl Transport for TcpStream {
    fn try_clone(&self) -> io::Result<Self> {
        TcpStream::try_clone(self)
    }

    fn shutdown(&self) -> io::Result<()> {
        TcpStream::shutdown(self, Shutdown::Both)
    }
}

/// Establish a TCP connection to the agent described by `config`.
///
/// Connection establishment is the caller's concern, not the client's;
/// this helper just captures the conventional setup (connect timeout,
/// Nagle disabled for low latency).
pub fn connect(config: &Config) -> Result<TcpStream> {
    let addr = config
        .addr
        .to_socket_addrs()
        .map_err(|e| LinkError::Config(format!("invalid address '{}': {}", config.addr, e)))?
        .next()
        .ok_or_else(|| {
            LinkError::Config(format!("address '{}' resolved to nothing", config.addr))
        })?;

    let stream = if config.connect_timeout_ms > 0 {
        TcpStream::connect_timeout(&addr, Duration::from_millis(config.connect_timeout_ms))?
    } else {
        TcpStream::connect(addr)?
    };

    if config.nodelay {
        stream.set_nodelay(true)?;
    }

    tracing::debug!("Connected to agent at {}", addr);
    Ok(stream)
}
