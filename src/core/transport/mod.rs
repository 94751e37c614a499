//! Transport layer for the MCP server.
//!
//! Protocol messages travel over standard input/output, the standard MCP
//! byte-stream transport. The transport handles the connection lifecycle
//! and delegates message processing to the server handler; diagnostics
//! never touch stdout.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
