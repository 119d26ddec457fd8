//! monkeylink CLI
//!
//! Command-line interface for sending one-off commands to the agent.

use clap::{Parser, Subcommand};
use monkeylink::{Config, MonkeyClient};
use monkeylink::net;
use tracing_subscriber::{fmt, EnvFilter};

/// monkeylink CLI
#[derive(Parser, Debug)]
#[command(name = "monkeylink-cli")]
#[command(about = "CLI for driving a device automation agent")]
#[command(version)]
struct Args {
    /// Agent address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:12345")]
    addr: String,

    /// Connect timeout in milliseconds (0 = no timeout)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tap at a screen location
    Tap {
        /// X coordinate
        x: i32,

        /// Y coordinate
        y: i32,
    },

    /// Press a physical button by name (e.g. home, back, enter)
    Press {
        /// The button name
        name: String,
    },

    /// Send a raw key down or key up event
    Key {
        /// Event phase: down or up
        action: String,

        /// The button name
        name: String,
    },

    /// Type a string on the device (newlines become enter presses)
    Type {
        /// The text to type
        text: String,
    },

    /// Read an agent variable
    Getvar {
        /// The variable name
        name: String,
    },

    /// List the agent's variable names
    Listvar,

    /// List the view ids of the current application
    Listviews,

    /// Print the accessibility ids of the root view
    Rootview,

    /// Find views matching the given text
    ViewsWithText {
        /// The text to match
        text: String,
    },

    /// Query a view property by id
    Query {
        /// Id type: viewid or accessibilityids
        #[arg(long, default_value = "accessibilityids")]
        kind: String,

        /// The query (e.g. gettext, getlocation)
        query: String,

        /// The view id(s)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Wake the device from sleep
    Wake,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,monkeylink=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .addr(&args.addr)
        .connect_timeout_ms(args.timeout_ms)
        .build();

    let stream = match net::connect(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to connect to {}: {}", args.addr, e);
            std::process::exit(1);
        }
    };

    let client = match MonkeyClient::new(stream) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to set up client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&client, args.command) {
        tracing::error!("Command failed: {}", e);
        let _ = client.done();
        client.close();
        std::process::exit(1);
    }

    if let Err(e) = client.done() {
        tracing::warn!("Failed to end session cleanly: {}", e);
    }
    client.close();
}

/// Execute one subcommand and print its result
fn run<T: monkeylink::net::Transport>(
    client: &MonkeyClient<T>,
    command: Commands,
) -> monkeylink::Result<()> {
    match command {
        Commands::Tap { x, y } => {
            println!("{}", client.tap(x, y)?);
        }
        Commands::Press { name } => {
            println!("{}", client.press(&name)?);
        }
        Commands::Key { action, name } => {
            let sent = match action.as_str() {
                "down" => client.key_down(&name)?,
                "up" => client.key_up(&name)?,
                other => {
                    return Err(monkeylink::LinkError::Config(format!(
                        "unknown key action '{}' (expected down or up)",
                        other
                    )))
                }
            };
            println!("{}", sent);
        }
        Commands::Type { text } => {
            println!("{}", client.type_text(&text)?);
        }
        Commands::Getvar { name } => match client.get_variable(&name)? {
            Some(value) => println!("{}", value),
            None => println!("(not set)"),
        },
        Commands::Listvar => {
            for name in client.list_variables()? {
                println!("{}", name);
            }
        }
        Commands::Listviews => {
            for id in client.list_view_ids()? {
                println!("{}", id);
            }
        }
        Commands::Rootview => {
            let root = client.get_root_view()?;
            println!("{}", root.ids().join(" "));
        }
        Commands::ViewsWithText { text } => {
            println!("{}", client.get_views_with_text(&text)?);
        }
        Commands::Query { kind, query, ids } => {
            let kind = match kind.as_str() {
                "viewid" => monkeylink::IdKind::ViewId,
                "accessibilityids" => monkeylink::IdKind::AccessibilityIds,
                other => {
                    return Err(monkeylink::LinkError::Config(format!(
                        "unknown id type '{}' (expected viewid or accessibilityids)",
                        other
                    )))
                }
            };
            println!("{}", client.query_view(kind, &ids, &query)?);
        }
        Commands::Wake => {
            client.wake()?;
        }
    }
    Ok(())
}
