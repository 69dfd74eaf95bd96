// Copyright (c) 2024-2026, Daily
// SPDX-License-Identifier: BSD-2-Clause

//! Typed frames exchanged at the transport boundary.
//!
//! Frames are the unit of data flowing between a websocket transport and the
//! media pipeline behind it. This module models the subset a wire adapter
//! sees: audio and text payloads plus the control frames a host pipeline
//! emits at its edges (start/end/cancel, interruptions, errors,
//! transcriptions, and opaque transport messages).
//!
//! The set is closed: [`Frame`] is an enum and serializers match on it
//! exhaustively, so growing the set is a compile-time event for every
//! adapter rather than a silently ignored runtime case.

use std::fmt;

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// Closed set of frames visible at a transport boundary.
///
/// Wire adapters consume and produce these; anything a concrete protocol
/// cannot express is simply not converted (see the serializer contract in
/// [`crate::serializers`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Pipeline startup parameters.
    Start(StartFrame),
    /// Graceful end of the stream.
    End(EndFrame),
    /// Abrupt cancellation of the stream.
    Cancel(CancelFrame),
    /// An error reported by the pipeline.
    Error(ErrorFrame),
    /// The user interrupted ongoing output.
    Interruption(InterruptionFrame),
    /// A chunk of raw PCM audio.
    Audio(AudioFrame),
    /// A piece of text (LLM output, TTS input, ...).
    Text(TextFrame),
    /// A finalized speech-to-text result.
    Transcription(TranscriptionFrame),
    /// An opaque structured message for the transport's signaling side.
    TransportMessage(TransportMessageFrame),
}

impl Frame {
    /// Short type name of the wrapped frame, suitable for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Frame::Start(_) => "StartFrame",
            Frame::End(_) => "EndFrame",
            Frame::Cancel(_) => "CancelFrame",
            Frame::Error(_) => "ErrorFrame",
            Frame::Interruption(_) => "InterruptionFrame",
            Frame::Audio(_) => "AudioFrame",
            Frame::Text(_) => "TextFrame",
            Frame::Transcription(_) => "TranscriptionFrame",
            Frame::TransportMessage(_) => "TransportMessageFrame",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Implement `From<FrameStruct> for Frame` for a variant.
macro_rules! impl_from_frame {
    ($variant:ident, $frame:ty) => {
        impl From<$frame> for Frame {
            fn from(frame: $frame) -> Self {
                Frame::$variant(frame)
            }
        }
    };
}

impl_from_frame!(Start, StartFrame);
impl_from_frame!(End, EndFrame);
impl_from_frame!(Cancel, CancelFrame);
impl_from_frame!(Error, ErrorFrame);
impl_from_frame!(Interruption, InterruptionFrame);
impl_from_frame!(Audio, AudioFrame);
impl_from_frame!(Text, TextFrame);
impl_from_frame!(Transcription, TranscriptionFrame);
impl_from_frame!(TransportMessage, TransportMessageFrame);

// ---------------------------------------------------------------------------
// Data frames
// ---------------------------------------------------------------------------

/// A chunk of raw PCM audio.
///
/// `audio` carries 16-bit little-endian samples with no container or header;
/// nothing in the byte stream encodes `sample_rate` or `num_channels`, so
/// the producing side fixes them out-of-band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFrame {
    /// Raw sample bytes.
    pub audio: Vec<u8>,
    /// Samples per second.
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub num_channels: u32,
}

impl AudioFrame {
    /// Create an audio frame from raw sample bytes.
    pub fn new(audio: Vec<u8>, sample_rate: u32, num_channels: u32) -> Self {
        Self {
            audio,
            sample_rate,
            num_channels,
        }
    }

    /// Number of sample frames in the payload, assuming 16-bit samples.
    pub fn num_frames(&self) -> u32 {
        if self.num_channels == 0 {
            return 0;
        }
        (self.audio.len() / (self.num_channels as usize * 2)) as u32
    }
}

/// A piece of text flowing through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    /// The text content.
    pub text: String,
}

impl TextFrame {
    /// Create a text frame.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for TextFrame {
    fn from(text: &str) -> Self {
        TextFrame::new(text)
    }
}

impl From<String> for TextFrame {
    fn from(text: String) -> Self {
        TextFrame::new(text)
    }
}

/// A finalized transcription produced by a speech-to-text stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionFrame {
    /// The transcribed text.
    pub text: String,
    /// Identifier of the speaking user.
    pub user_id: String,
    /// When the transcription was produced (ISO8601-style).
    pub timestamp: String,
    /// Detected language, if the STT stage reports one.
    pub language: Option<String>,
}

impl TranscriptionFrame {
    /// Create a transcription frame with no language annotation.
    pub fn new(
        text: impl Into<String>,
        user_id: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            user_id: user_id.into(),
            timestamp: timestamp.into(),
            language: None,
        }
    }
}

/// An opaque structured message exchanged with the transport's signaling
/// side, outside the audio path.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportMessageFrame {
    /// Arbitrary JSON payload; this crate never inspects it.
    pub message: serde_json::Value,
}

impl TransportMessageFrame {
    /// Wrap a JSON value as a transport message.
    pub fn new(message: serde_json::Value) -> Self {
        Self { message }
    }
}

// ---------------------------------------------------------------------------
// Control frames
// ---------------------------------------------------------------------------

/// First frame a pipeline sees; carries the negotiated stream parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartFrame {
    /// Sample rate of audio entering the pipeline.
    pub audio_in_sample_rate: u32,
    /// Sample rate of audio leaving the pipeline.
    pub audio_out_sample_rate: u32,
    /// Whether user speech may interrupt ongoing output.
    pub allow_interruptions: bool,
}

impl StartFrame {
    /// Create a start frame.
    pub fn new(
        audio_in_sample_rate: u32,
        audio_out_sample_rate: u32,
        allow_interruptions: bool,
    ) -> Self {
        Self {
            audio_in_sample_rate,
            audio_out_sample_rate,
            allow_interruptions,
        }
    }
}

/// Marks the graceful end of the stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndFrame;

impl EndFrame {
    /// Create an end frame.
    pub fn new() -> Self {
        Self
    }
}

/// Aborts the stream immediately, with an optional reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelFrame {
    /// Why the stream is being cancelled, if known.
    pub reason: Option<String>,
}

impl CancelFrame {
    /// Create a cancel frame.
    pub fn new(reason: Option<String>) -> Self {
        Self { reason }
    }
}

/// An error reported by a pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFrame {
    /// Human-readable error description.
    pub error: String,
    /// Fatal errors stop the stream; non-fatal ones are informational.
    pub fatal: bool,
}

impl ErrorFrame {
    /// Create an error frame.
    pub fn new(error: impl Into<String>, fatal: bool) -> Self {
        Self {
            error: error.into(),
            fatal,
        }
    }

    /// Convenience constructor for a non-fatal error.
    pub fn non_fatal(error: impl Into<String>) -> Self {
        Self::new(error, false)
    }
}

/// The user started speaking over ongoing output; downstream stages flush.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterruptionFrame;

impl InterruptionFrame {
    /// Create an interruption frame.
    pub fn new() -> Self {
        Self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
