//! Protocol Module
//!
//! Defines the wire protocol spoken to the on-device automation agent.
//!
//! ## Protocol Format (line-oriented ASCII)
//!
//! ### Request Format
//! ```text
//! <verb> [arg1 arg2 ...]\n
//! ```
//! One command per line. Arguments are separated by unquoted whitespace;
//! a multi-word text argument is wrapped in double quotes where the verb
//! requires it (see [`quote_text`]).
//!
//! ### Commands
//! - `touch down|up|move <x> <y>` - raw touch events
//! - `tap <x> <y>`                - touch down + up
//! - `press <name>`               - physical button press
//! - `key down|up <name>`         - raw key events
//! - `type <text>`                - type a line of text
//! - `wake`                       - wake the device
//! - `getvar <name>` / `listvar`  - agent variables
//! - `listviews`                  - view ids of the current app
//! - `queryview <idtype> <id...> <query>` - query a view property
//! - `getrootview`                - accessibility-id pair of the root view
//! - `getviewswithtext <text>`    - views matching the given text
//! - `done` / `quit`              - end the session (both drop the connection)
//!
//! ### Response Format
//! ```text
//! <status>[:<payload>]\n
//! ```
//! Exactly one response line per command, never unsolicited. A line
//! starting with `OK` is success; any other leading token is failure.
//! The payload, if any, is everything after the first `:`.

mod button;
mod command;
pub mod response;

pub use button::PhysicalButton;
pub use command::{quote_text, Command, KeyAction, TouchAction};
