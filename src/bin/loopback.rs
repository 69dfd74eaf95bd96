// Copyright (c) 2024-2026, Daily
// SPDX-License-Identifier: BSD-2-Clause

//! Audio loopback server for fork gateways.
//!
//! Accepts websocket connections from an audio-forking gateway and echoes
//! every audio frame straight back, exercising both directions of the
//! serializer. Loopback is the standard end-to-end check for a fork path:
//! if you hear yourself, framing and format agree on both sides.
//!
//! ```sh
//! cargo run --bin loopback
//! ```
//!
//! Then point the gateway at the endpoint, e.g. from FreeSWITCH:
//!
//! ```text
//! uuid_audio_fork <uuid> start ws://127.0.0.1:8765/ws mono 16k
//! ```
//!
//! Configuration comes from the `HOST` and `PORT` environment variables
//! (also read from a local `.env` file), defaulting to `0.0.0.0:8765`.

use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::ws::{Message as WsMsg, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

use audiofork::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,audiofork=debug")),
        )
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8765".to_string())
        .parse()
        .context("PORT must be a number")?;

    let app = Router::new().route("/ws", get(handle_ws));

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("invalid HOST/PORT")?;
    info!(%addr, "audio fork loopback server starting");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

async fn handle_ws(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_connection)
}

/// Serve one gateway connection.
///
/// The read task classifies incoming websocket messages into wire messages
/// and deserializes them; the write task serializes frames back onto the
/// socket. The channel between them stands where a media pipeline would
/// sit; the loopback forwards input frames straight to the output side.
async fn handle_connection(socket: WebSocket) {
    info!("fork gateway connected");

    // One serializer per connection, standard mono 16 kHz fork format.
    let serializer = AudioForkFrameSerializer::new();

    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (frame_tx, mut frame_rx) = mpsc::channel::<Frame>(1024);

    let read_serializer = serializer.clone();
    let read_handle = tokio::spawn(async move {
        while let Some(Ok(msg)) = ws_receiver.next().await {
            let message = match msg {
                WsMsg::Text(text) => WireMessage::Text(text.to_string()),
                WsMsg::Binary(bytes) => WireMessage::Binary(bytes.to_vec()),
                WsMsg::Close(_) => {
                    info!("fork gateway closed the stream");
                    break;
                }
                // The websocket layer answers pings on its own.
                WsMsg::Ping(_) | WsMsg::Pong(_) => continue,
            };

            if let Some(frame) = read_serializer.deserialize(message) {
                if frame_tx.send(frame).await.is_err() {
                    break;
                }
            }
        }
    });

    let write_serializer = serializer;
    let write_handle = tokio::spawn(async move {
        while let Some(frame) = frame_rx.recv().await {
            let Some(message) = write_serializer.serialize(&frame) else {
                continue;
            };
            let msg = match message {
                WireMessage::Text(text) => WsMsg::Text(text.into()),
                WireMessage::Binary(bytes) => WsMsg::Binary(bytes.into()),
            };
            if let Err(e) = ws_sender.send(msg).await {
                warn!("loopback: send failed: {}", e);
                break;
            }
        }
    });

    let _ = tokio::join!(read_handle, write_handle);
    info!("fork gateway disconnected");
}
