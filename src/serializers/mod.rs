// Copyright (c) 2024-2026, Daily
// SPDX-License-Identifier: BSD-2-Clause

//! Frame serializers convert between pipeline [`Frame`] values and concrete
//! wire formats.
//!
//! A serializer is the boundary adapter between a websocket transport and
//! the pipeline behind it: inbound wire messages become typed frames,
//! outbound frames become wire messages. Available implementations:
//!
//! - [`audiofork`] -- raw-PCM passthrough for audio-forking gateways
//!
//! # Transport boundary
//!
//! The transport owns the websocket and classifies each incoming frame as
//! text or binary, constructing the matching [`WireMessage`] variant before
//! calling [`FrameSerializer::deserialize`]. Outbound, it writes the
//! [`WireMessage`] returned by [`FrameSerializer::serialize`] verbatim, with
//! no additional framing. The classification match looks like this:
//!
//! ```rust,no_run
//! use audiofork::serializers::WireMessage;
//! use axum::extract::ws::Message;
//!
//! fn classify(msg: Message) -> Option<WireMessage> {
//!     match msg {
//!         Message::Text(text) => Some(WireMessage::Text(text.to_string())),
//!         Message::Binary(bytes) => Some(WireMessage::Binary(bytes.to_vec())),
//!         // Ping/pong are answered by the websocket layer; a close frame
//!         // ends the read loop before reaching the serializer.
//!         _ => None,
//!     }
//! }
//! ```

use crate::frames::Frame;

pub mod audiofork;

// ---------------------------------------------------------------------------
// WireMessage
// ---------------------------------------------------------------------------

/// A wire-level message exchanged with the remote peer.
///
/// Websocket transports distinguish text and binary payloads at the protocol
/// level; this union carries that distinction through the serializer in both
/// directions. Text payloads are `String`s, so invalid UTF-8 is
/// unrepresentable here (RFC 6455 requires text frames to be valid UTF-8 and
/// the transport enforces that on receipt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireMessage {
    /// A text payload.
    Text(String),
    /// A binary payload.
    Binary(Vec<u8>),
}

// ---------------------------------------------------------------------------
// FrameSerializer
// ---------------------------------------------------------------------------

/// Bidirectional converter between pipeline frames and a wire format.
///
/// Implementations hold no per-call state and both operations are
/// synchronous and non-blocking, so they are safe to invoke directly on the
/// transport's read and write paths. One serializer instance serves one
/// connection for the lifetime of that connection.
///
/// `None` is a normal outcome on both paths, not an error: "nothing to
/// send" on serialize, "nothing to enqueue" on deserialize. Serializers
/// never fail loudly on unconvertible input; for best-effort real-time
/// media, dropping one unit beats aborting the stream.
pub trait FrameSerializer: Send + Sync {
    /// Convert an outbound pipeline frame to a wire message, or `None` if
    /// the wire format cannot express this frame.
    fn serialize(&self, frame: &Frame) -> Option<WireMessage>;

    /// Convert an inbound wire message to a pipeline frame, or `None` if
    /// the message carries nothing for the pipeline.
    ///
    /// Takes the message by value so binary payloads move into the produced
    /// frame without copying.
    fn deserialize(&self, message: WireMessage) -> Option<Frame>;
}
