//! Mcstatus Library
//!
//! This library probes Minecraft servers over the legacy (pre-1.7) server
//! list ping protocol and renders the returned MOTD markup into styled
//! spans.
//!
//! ## Modules
//!
//! - `config` - Configuration for the command-line probe
//! - `error` - Error types and result definitions
//! - `motd` - MOTD formatting-code rendering
//! - `probe` - Network probe (connect, ping, read)
//! - `protocol` - Legacy ping wire format and frame decoding
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! # async fn example() -> mcstatus::Result<()> {
//! let status = mcstatus::query("mc.example.com", 25565, Duration::from_secs(5)).await?;
//! let motd = mcstatus::render(&status.motd);
//! for span in &motd {
//!     println!("{:?} {:?} {}", span.color, span.style, span.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod motd;
pub mod probe;
pub mod protocol;

// Re-export commonly used types
pub use error::{ProbeError, Result};
pub use motd::{render, Color, StyleFlags, StyledSpan, StyledText};
pub use probe::query;
pub use protocol::ServerStatus;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
