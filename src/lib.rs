// Copyright (c) 2024-2026, Daily
// SPDX-License-Identifier: BSD-2-Clause

//! Audiofork - Wire-format serialization for raw-PCM audio-fork streams.
//!
//! Media gateways that fork live call audio over a websocket exchange plain
//! binary PCM frames with the far end. This crate provides the boundary
//! adapter between that wire representation and the typed frames a media
//! pipeline consumes: a closed [`frames::Frame`] model, the
//! [`serializers::FrameSerializer`] contract with its two-variant
//! [`serializers::WireMessage`] union, and the concrete
//! [`serializers::audiofork::AudioForkFrameSerializer`] adapter.

pub mod frames;
pub mod prelude;
pub mod serializers;
