//! Client Module
//!
//! The core protocol client that drives the automation agent.
//!
//! ## Responsibilities
//! - Serialize commands onto the wire, one line at a time
//! - Read back exactly one response line per command
//! - Translate raw response lines into typed results or errors
//! - Keep concurrent callers from interleaving exchanges
//!
//! ## Concurrency Model: One Coarse Lock Per Instance
//!
//! The only invariant that matters on the wire is that command/response
//! pairs never interleave: at most one outstanding command, and its
//! response is consumed before the next command is written. A single
//! mutex spanning the whole write+flush+read sequence makes that
//! trivially true, so that is what this client uses. Every public
//! operation blocks the calling thread until the agent answers or the
//! stream closes.
//!
//! There is no read timeout: a hung agent hangs the calling thread. The
//! escape hatch is [`MonkeyClient::close`] from another thread, which
//! tears the transport down and fails the in-flight read.

use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::{LinkError, Result};
use crate::net::Transport;
use crate::protocol::{response, Command, KeyAction, PhysicalButton, TouchAction};
use crate::view::{IdKind, ViewRef};

/// Thread-safe synchronous client for the agent's line protocol.
///
/// Construct it with an already-connected transport; the client owns the
/// transport for the rest of its life. A dropped connection is terminal
/// for the instance - there is no pooling and no reconnection.
pub struct MonkeyClient<T: Transport> {
    /// Extra handle used only for out-of-band teardown in `close`
    control: T,

    /// Buffered reader/writer pair, guarded by the exchange lock
    wire: Mutex<Wire<T>>,

    /// Set once `close` has run (also suppresses the drop-time quit)
    closed: AtomicBool,
}

/// The buffered halves of the connection
struct Wire<T: Transport> {
    reader: BufReader<T>,
    writer: BufWriter<T>,
}

impl<T: Transport> Wire<T> {
    /// Perform one full command/response exchange.
    ///
    /// Writes the trimmed command line, flushes, then blocks reading one
    /// line. Returns `None` if the agent closed the connection before
    /// answering. Callers hold the exchange lock for the whole call.
    fn exchange(&mut self, command: &Command) -> Result<Option<String>> {
        let line = command.to_line();
        let line = line.trim();
        tracing::debug!("Agent command: {}", line);

        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        let mut response = String::new();
        if self.reader.read_line(&mut response)? == 0 {
            // End of stream: the agent dropped the connection
            return Ok(None);
        }
        while response.ends_with('\n') || response.ends_with('\r') {
            response.pop();
        }
        tracing::trace!("Agent response: {}", response);
        Ok(Some(response))
    }
}

impl<T: Transport> MonkeyClient<T> {
    /// Create a new client over the given (already connected) transport.
    ///
    /// Fails if independent reader/writer handles cannot be established
    /// from the transport.
    pub fn new(transport: T) -> Result<Self> {
        let reader = BufReader::new(transport.try_clone()?);
        let writer = BufWriter::new(transport.try_clone()?);

        Ok(Self {
            control: transport,
            wire: Mutex::new(Wire { reader, writer }),
            closed: AtomicBool::new(false),
        })
    }

    // =========================================================================
    // Exchange Primitives
    // =========================================================================

    /// Send one command and return the raw response line (`None` = EOF)
    fn exchange(&self, command: &Command) -> Result<Option<String>> {
        let mut wire = self.wire.lock();
        wire.exchange(command)
    }

    /// Send one command and interpret the response as success/failure.
    ///
    /// A protocol-level rejection and a closed stream both degrade to
    /// `false`; only transport I/O failures surface as errors.
    fn send_event(&self, command: &Command) -> Result<bool> {
        let response = self.exchange(command)?;
        Ok(response::is_success(response.as_deref()))
    }

    // =========================================================================
    // Touch and Key Operations
    // =========================================================================

    /// Send a touch down event at the specified location
    pub fn touch_down(&self, x: i32, y: i32) -> Result<bool> {
        self.send_event(&Command::Touch {
            action: TouchAction::Down,
            x,
            y,
        })
    }

    /// Send a touch up event at the specified location
    pub fn touch_up(&self, x: i32, y: i32) -> Result<bool> {
        self.send_event(&Command::Touch {
            action: TouchAction::Up,
            x,
            y,
        })
    }

    /// Send a touch move event at the specified location
    pub fn touch_move(&self, x: i32, y: i32) -> Result<bool> {
        self.send_event(&Command::Touch {
            action: TouchAction::Move,
            x,
            y,
        })
    }

    /// Send a tap (touch down and then up) at the specified location
    pub fn tap(&self, x: i32, y: i32) -> Result<bool> {
        self.send_event(&Command::Tap { x, y })
    }

    /// Press a physical button by its protocol name
    pub fn press(&self, name: &str) -> Result<bool> {
        self.send_event(&Command::Press {
            name: name.to_string(),
        })
    }

    /// Press a physical button
    pub fn press_button(&self, button: PhysicalButton) -> Result<bool> {
        self.press(button.key_name())
    }

    /// Send a key down event for the named button
    pub fn key_down(&self, name: &str) -> Result<bool> {
        self.send_event(&Command::Key {
            action: KeyAction::Down,
            name: name.to_string(),
        })
    }

    /// Send a key up event for the named button
    pub fn key_up(&self, name: &str) -> Result<bool> {
        self.send_event(&Command::Key {
            action: KeyAction::Up,
            name: name.to_string(),
        })
    }

    /// Type a string on the device.
    ///
    /// The wire protocol cannot carry embedded line breaks, so the input
    /// is split here: each newline becomes a press of the enter button
    /// and each non-empty segment becomes its own `type` command, in the
    /// original order. The first failing sub-command short-circuits the
    /// rest and the whole call returns `false`.
    pub fn type_text(&self, text: &str) -> Result<bool> {
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 && !self.press_button(PhysicalButton::Enter)? {
                return Ok(false);
            }
            if !segment.is_empty()
                && !self.send_event(&Command::Type {
                    text: segment.to_string(),
                })?
            {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Type a single character on the device
    pub fn type_char(&self, c: char) -> Result<bool> {
        self.type_text(&c.to_string())
    }

    /// Wake the device up from sleep (the result is not interpreted)
    pub fn wake(&self) -> Result<()> {
        self.send_event(&Command::Wake)?;
        Ok(())
    }

    // =========================================================================
    // Query Operations
    // =========================================================================

    /// Read an agent variable.
    ///
    /// Returns the variable's value, or `None` if the agent rejected the
    /// request or closed the connection.
    pub fn get_variable(&self, name: &str) -> Result<Option<String>> {
        let response = self.exchange(&Command::GetVar {
            name: name.to_string(),
        })?;
        match response {
            Some(line) if response::is_success(Some(&line)) => {
                Ok(Some(response::extra(&line).to_string()))
            }
            _ => Ok(None),
        }
    }

    /// List the agent's variable names, in the order the agent reports them.
    ///
    /// Returns an empty list on a failure response.
    pub fn list_variables(&self) -> Result<Vec<String>> {
        self.fetch_list(&Command::ListVar)
    }

    /// List the view ids of the current application.
    ///
    /// Returns an empty list on a failure response.
    pub fn list_view_ids(&self) -> Result<Vec<String>> {
        self.fetch_list(&Command::ListViews)
    }

    fn fetch_list(&self, command: &Command) -> Result<Vec<String>> {
        let response = self.exchange(command)?;
        match response {
            Some(line) if response::is_success(Some(&line)) => {
                Ok(response::tokens(response::extra(&line)))
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Query a property of the views addressed by the given ids.
    ///
    /// The raw payload is returned for the caller to parse. An explicit
    /// rejection by the agent surfaces as [`LinkError::Remote`] carrying
    /// the rejection payload.
    pub fn query_view(&self, kind: IdKind, ids: &[String], query: &str) -> Result<String> {
        let response = self.exchange(&Command::QueryView {
            kind,
            ids: ids.to_vec(),
            query: query.to_string(),
        })?;
        let line = response.unwrap_or_default();
        if !response::is_success(Some(&line)) {
            return Err(LinkError::Remote(response::extra(&line).to_string()));
        }
        Ok(response::extra(&line).to_string())
    }

    /// Query a property of the given view
    pub fn query(&self, view: &ViewRef, query: &str) -> Result<String> {
        self.query_view(view.kind(), view.ids(), query)
    }

    /// Fetch the current root view of the device.
    ///
    /// The payload must be exactly two tokens (an accessibility-id
    /// pair); anything else is reported as [`LinkError::Remote`] with
    /// the literal payload as the detail.
    pub fn get_root_view(&self) -> Result<ViewRef> {
        let response = self.exchange(&Command::GetRootView)?;
        let line = response.unwrap_or_default();
        let extra = response::extra(&line);
        let ids = response::tokens(extra);
        if !response::is_success(Some(&line)) || ids.len() != 2 {
            return Err(LinkError::Remote(extra.to_string()));
        }
        Ok(ViewRef::new(IdKind::AccessibilityIds, ids))
    }

    /// Fetch the views whose text matches the given string.
    ///
    /// Multi-word text is quoted on the wire (the agent segments on
    /// unquoted whitespace but mis-parses a lone quoted word).
    pub fn get_views_with_text(&self, text: &str) -> Result<String> {
        let response = self.exchange(&Command::GetViewsWithText {
            text: text.to_string(),
        })?;
        let line = response.unwrap_or_default();
        if !response::is_success(Some(&line)) {
            return Err(LinkError::Remote(response::extra(&line).to_string()));
        }
        Ok(response::extra(&line).to_string())
    }

    // =========================================================================
    // Session Lifecycle
    // =========================================================================

    /// Tell the agent this session is over.
    ///
    /// The agent drops the connection in response; the response line, if
    /// one arrives at all, is not interpreted.
    pub fn done(&self) -> Result<()> {
        self.exchange(&Command::Done)?;
        Ok(())
    }

    /// Tell the agent to shut down entirely.
    ///
    /// The agent usually drops the connection before the flush lands, so
    /// broken-pipe-family failures are swallowed here.
    pub fn quit(&self) -> Result<()> {
        match self.exchange(&Command::Quit) {
            Ok(_) => Ok(()),
            Err(LinkError::Io(e)) if is_disconnect(&e) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Release the connection and both buffered halves.
    ///
    /// Idempotent and infallible: each teardown step is attempted
    /// independently and failures are logged, never propagated. Tearing
    /// the transport down also unblocks any thread parked in an exchange
    /// (its read fails or observes end-of-stream).
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        if let Err(e) = self.control.shutdown() {
            tracing::error!("Unable to shut down agent transport: {}", e);
        }

        // Flush whatever is still buffered. If another thread holds the
        // exchange lock it is parked in a read that the shutdown above
        // just failed; skipping the flush is the best we can do then.
        match self.wire.try_lock() {
            Some(mut wire) => {
                if let Err(e) = wire.writer.flush() {
                    tracing::error!("Unable to flush agent writer: {}", e);
                }
            }
            None => {
                tracing::debug!("Exchange in flight during close; writer flush skipped");
            }
        }
    }
}

/// Error kinds that mean the peer already dropped the connection
fn is_disconnect(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::BrokenPipe
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::UnexpectedEof
    )
}

impl<T: Transport> Drop for MonkeyClient<T> {
    /// Best-effort safety net: end the session and release the transport
    /// if the caller never did. Not a substitute for calling
    /// [`MonkeyClient::quit`]/[`MonkeyClient::close`] explicitly.
    fn drop(&mut self) {
        if !self.closed.load(Ordering::SeqCst) {
            let _ = self.quit();
            self.close();
        }
    }
}
