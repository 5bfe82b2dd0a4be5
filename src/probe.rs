//! Status probe module
//!
//! Opens a short-lived TCP connection to a server, sends the legacy ping
//! request and reads back the status frame. Every probe is independent:
//! no pooling, no retries, no shared state. The whole exchange (connect,
//! write, read) runs under one caller-supplied timeout, and the socket is
//! dropped on every path, success or failure.

use std::io;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time;
use tracing::{debug, trace};

use crate::error::{ProbeError, Result};
use crate::protocol::{self, ServerStatus, LEGACY_PING_REQUEST, MAX_RESPONSE_SIZE};

/// Query a server for its live status
///
/// Resolves `host`, connects to `host:port`, performs the legacy ping
/// exchange and decodes the response. Connectivity failures (DNS, refused,
/// reset, expired `timeout`) come back as [`ProbeError::Unreachable`];
/// replies that answer but do not match the frame layout come back as
/// [`ProbeError::MalformedResponse`].
pub async fn query(host: &str, port: u16, timeout: Duration) -> Result<ServerStatus> {
    if port == 0 {
        return Err(ProbeError::Unreachable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "port must be in 1..=65535",
        )));
    }

    debug!(host, port, ?timeout, "Probing server status");

    let frame = time::timeout(timeout, exchange(host, port))
        .await
        .map_err(|_| ProbeError::timed_out())??;

    let status = protocol::decode_status(&frame)?;
    debug!(
        version = %status.version,
        players = %status.current_players,
        max_players = %status.max_players,
        "Probe succeeded"
    );
    Ok(status)
}

/// Perform the raw request/response exchange
///
/// Reads until the server closes the connection or the response buffer is
/// full. Legacy servers send the status as a kick packet and close right
/// after, so EOF is the normal end of a response; the size cap keeps a
/// misbehaving peer from streaming forever.
async fn exchange(host: &str, port: u16) -> Result<BytesMut> {
    let mut stream = TcpStream::connect((host, port)).await?;
    stream.set_nodelay(true)?;
    stream.write_all(&LEGACY_PING_REQUEST).await?;

    let mut frame = BytesMut::with_capacity(MAX_RESPONSE_SIZE);
    while frame.len() < MAX_RESPONSE_SIZE {
        let read = stream.read_buf(&mut frame).await?;
        if read == 0 {
            break;
        }
    }
    trace!(bytes = frame.len(), "Response frame read");
    Ok(frame)
}
