//! WebSocket runner for the calendar channel.
//!
//! Connects once, joins with the session token, then pumps messages both
//! ways until the peer closes or the bridge's outbound queue is dropped.
//! Reconnection/backoff policy belongs to whoever spawns this task, not
//! here.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use opsdeck_types::{ChannelCommand, ChannelEvent};

use crate::errors::AppError;
use crate::realtime::CalendarBridge;

/// Run the channel connection to completion.
///
/// Inbound text frames decode to [`ChannelEvent`] and fan out through the
/// bridge; frames outside the closed vocabulary are logged and skipped so
/// a backend rollout with new event types cannot wedge the connection.
pub async fn run_channel(
    channel_url: &str,
    session_token: &str,
    bridge: CalendarBridge,
    mut outbound: mpsc::UnboundedReceiver<ChannelCommand>,
) -> Result<(), AppError> {
    let (ws, _response) = connect_async(channel_url)
        .await
        .map_err(|e| AppError::channel(format!("connect failed: {e}")))?;
    let (mut sink, mut stream) = ws.split();

    let join = serde_json::to_string(&ChannelCommand::JoinCalendar {
        token: session_token.to_string(),
    })
    .map_err(|e| AppError::internal(format!("failed to encode join: {e}")))?;
    sink.send(Message::Text(join))
        .await
        .map_err(|e| AppError::channel(format!("join failed: {e}")))?;
    tracing::debug!(url = channel_url, "calendar channel joined");

    loop {
        tokio::select! {
            inbound = stream.next() => match inbound {
                None => break,
                Some(Err(e)) => {
                    return Err(AppError::channel(format!("receive failed: {e}")));
                }
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<ChannelEvent>(&text) {
                    Ok(event) => bridge.dispatch(&event),
                    Err(e) => tracing::warn!(error = %e, "unrecognized channel event"),
                },
                Some(Ok(Message::Ping(payload))) => {
                    sink.send(Message::Pong(payload))
                        .await
                        .map_err(|e| AppError::channel(format!("pong failed: {e}")))?;
                }
                Some(Ok(Message::Close(_))) => break,
                Some(Ok(_)) => {}
            },
            command = outbound.recv() => match command {
                // All bridge handles dropped their sender; shut down politely.
                None => {
                    let leave = serde_json::to_string(&ChannelCommand::LeaveCalendar)
                        .map_err(|e| AppError::internal(format!("failed to encode leave: {e}")))?;
                    let _ = sink.send(Message::Text(leave)).await;
                    break;
                }
                Some(command) => {
                    let text = serde_json::to_string(&command)
                        .map_err(|e| AppError::internal(format!("failed to encode command: {e}")))?;
                    sink.send(Message::Text(text))
                        .await
                        .map_err(|e| AppError::channel(format!("send failed: {e}")))?;
                }
            },
        }
    }

    tracing::debug!("calendar channel closed");
    Ok(())
}
