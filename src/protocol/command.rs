//! Command definitions
//!
//! Represents commands sent to the agent and renders them into wire lines.

use std::borrow::Cow;
use std::fmt;

use crate::view::IdKind;

/// Phase of a raw touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Up,
    Move,
}

impl TouchAction {
    fn as_str(self) -> &'static str {
        match self {
            TouchAction::Down => "down",
            TouchAction::Up => "up",
            TouchAction::Move => "move",
        }
    }
}

/// Phase of a raw key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

impl KeyAction {
    fn as_str(self) -> &'static str {
        match self {
            KeyAction::Down => "down",
            KeyAction::Up => "up",
        }
    }
}

/// A command to send to the agent
#[derive(Debug, Clone)]
pub enum Command {
    /// Raw touch event at a screen location
    Touch { action: TouchAction, x: i32, y: i32 },

    /// Touch down followed by touch up
    Tap { x: i32, y: i32 },

    /// Press a physical button by name
    Press { name: String },

    /// Raw key event for a named button
    Key { action: KeyAction, name: String },

    /// Type a single line of text (must not contain newlines; the client
    /// splits multi-line input before building Type commands)
    Type { text: String },

    /// Wake the device from sleep
    Wake,

    /// Read a single agent variable
    GetVar { name: String },

    /// List all agent variable names
    ListVar,

    /// List the view ids of the current application
    ListViews,

    /// Query a property of the views addressed by the given ids
    QueryView {
        kind: IdKind,
        ids: Vec<String>,
        query: String,
    },

    /// Fetch the accessibility-id pair of the root view
    GetRootView,

    /// Fetch the views whose text matches the given string
    GetViewsWithText { text: String },

    /// End the session (the agent drops the connection)
    Done,

    /// Shut the agent down entirely
    Quit,
}

impl Command {
    /// Render the exact wire line for this command (no newline terminator)
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Touch { action, x, y } => {
                write!(f, "touch {} {} {}", action.as_str(), x, y)
            }
            Command::Tap { x, y } => write!(f, "tap {} {}", x, y),
            Command::Press { name } => write!(f, "press {}", name),
            Command::Key { action, name } => write!(f, "key {} {}", action.as_str(), name),
            Command::Type { text } => write!(f, "type {}", text),
            Command::Wake => write!(f, "wake"),
            Command::GetVar { name } => write!(f, "getvar {}", name),
            Command::ListVar => write!(f, "listvar"),
            Command::ListViews => write!(f, "listviews"),
            Command::QueryView { kind, ids, query } => {
                write!(f, "queryview {} ", kind.as_str())?;
                for id in ids {
                    write!(f, "{} ", id)?;
                }
                write!(f, "{}", query)
            }
            Command::GetRootView => write!(f, "getrootview"),
            Command::GetViewsWithText { text } => {
                write!(f, "getviewswithtext {}", quote_text(text))
            }
            Command::Done => write!(f, "done"),
            Command::Quit => write!(f, "quit"),
        }
    }
}

/// Quote a text argument for verbs whose remote parser segments on
/// unquoted whitespace.
///
/// Multi-word text is wrapped in double quotes; a single word is left
/// bare, because the agent mis-parses a lone quoted token. Trailing
/// spaces do not count toward the word total.
pub fn quote_text(text: &str) -> Cow<'_, str> {
    if word_count(text) > 1 {
        Cow::Owned(format!("\"{}\"", text))
    } else {
        Cow::Borrowed(text)
    }
}

/// Number of space-separated segments, ignoring trailing empty ones
fn word_count(text: &str) -> usize {
    let mut count = 0;
    let mut pending_empty = 0;
    for segment in text.split(' ') {
        if segment.is_empty() {
            pending_empty += 1;
        } else {
            count += pending_empty + 1;
            pending_empty = 0;
        }
    }
    count
}
