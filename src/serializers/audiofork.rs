// Copyright (c) 2024-2026, Daily
// SPDX-License-Identifier: BSD-2-Clause

//! Serializer for raw-PCM audio-forking websocket streams.
//!
//! Media gateways such as FreeSWITCH's `mod_audio_fork` fork live call audio
//! to a websocket endpoint as plain binary frames and expect returned audio
//! in the same shape. There is no envelope, no handshake, and no per-message
//! format header; both sides agree on the stream format out-of-band.
//!
//! # Wire format
//!
//! ```text
//! binary frame:  raw 16-bit little-endian PCM samples (mono, 16 kHz)
//! text frame:    gateway metadata, e.g. {"event":"start","metadata":{...}}
//! ```
//!
//! Inbound binary frames map one-to-one onto audio frames stamped with the
//! configured stream format. Inbound text frames are metadata for the
//! operator, not the pipeline: they are logged at debug level and dropped.
//! Outbound, audio frames pass their sample bytes through unchanged and
//! every other frame is dropped, since the wire format cannot express it.

use tracing::debug;

use crate::frames::{AudioFrame, Frame};
use crate::serializers::{FrameSerializer, WireMessage};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Sample rate of a standard forked PCM stream.
const AUDIO_FORK_SAMPLE_RATE: u32 = 16000;

/// Channel count of a standard forked PCM stream.
const AUDIO_FORK_NUM_CHANNELS: u32 = 1;

// ---------------------------------------------------------------------------
// AudioForkFrameSerializer
// ---------------------------------------------------------------------------

/// A frame serializer for audio-fork gateways.
///
/// The adapter is a pure mapping pair: it keeps no state between calls and
/// performs no buffering, so one instance per connection needs no
/// synchronization. The stream format is fixed at construction; the wire
/// protocol carries no header to infer it from.
#[derive(Debug, Clone)]
pub struct AudioForkFrameSerializer {
    /// Sample rate stamped on produced audio frames.
    sample_rate: u32,
    /// Channel count stamped on produced audio frames.
    num_channels: u32,
}

impl AudioForkFrameSerializer {
    /// Create a serializer for the standard fork format (mono, 16 kHz).
    pub fn new() -> Self {
        Self {
            sample_rate: AUDIO_FORK_SAMPLE_RATE,
            num_channels: AUDIO_FORK_NUM_CHANNELS,
        }
    }

    /// Override the sample rate stamped on produced audio frames.
    ///
    /// Only for deployments whose gateway is configured to fork at a
    /// non-standard rate; the agreement stays out-of-band either way.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Override the channel count stamped on produced audio frames.
    pub fn with_num_channels(mut self, num_channels: u32) -> Self {
        self.num_channels = num_channels;
        self
    }

    /// The sample rate stamped on produced audio frames.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The channel count stamped on produced audio frames.
    pub fn num_channels(&self) -> u32 {
        self.num_channels
    }
}

impl Default for AudioForkFrameSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSerializer for AudioForkFrameSerializer {
    fn serialize(&self, frame: &Frame) -> Option<WireMessage> {
        match frame {
            // The gateway consumes the sample bytes exactly as the pipeline
            // produced them: no header, no transcoding, no resampling.
            Frame::Audio(audio) => Some(WireMessage::Binary(audio.audio.clone())),

            // The wire format has no representation for anything else.
            Frame::Start(_)
            | Frame::End(_)
            | Frame::Cancel(_)
            | Frame::Error(_)
            | Frame::Interruption(_)
            | Frame::Text(_)
            | Frame::Transcription(_)
            | Frame::TransportMessage(_) => None,
        }
    }

    fn deserialize(&self, message: WireMessage) -> Option<Frame> {
        match message {
            WireMessage::Text(text) => {
                debug!("AudioForkFrameSerializer: received text message: {}", text);
                None
            }
            WireMessage::Binary(bytes) => Some(Frame::Audio(AudioFrame::new(
                bytes,
                self.sample_rate,
                self.num_channels,
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
