// Copyright (c) 2024-2026, Daily
// SPDX-License-Identifier: BSD-2-Clause

//! Common re-exports for convenient use of the crate.
//!
//! ```
//! use audiofork::prelude::*;
//! ```

pub use crate::frames::{
    AudioFrame, CancelFrame, EndFrame, ErrorFrame, Frame, InterruptionFrame, StartFrame, TextFrame,
    TranscriptionFrame, TransportMessageFrame,
};

pub use crate::serializers::audiofork::AudioForkFrameSerializer;
pub use crate::serializers::{FrameSerializer, WireMessage};
