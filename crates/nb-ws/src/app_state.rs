use crate::{ShutdownCoordinator, StatsBroadcaster};

use nb_auth::{IdentityProvider, SessionStore};
use nb_storage::ObjectStorage;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use log::{debug, warn};
use sqlx::SqlitePool;
use tokio::sync::broadcast::error::RecvError;

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: SessionStore,
    pub provider: IdentityProvider,
    pub storage: ObjectStorage,
    pub stats: StatsBroadcaster,
    pub shutdown: ShutdownCoordinator,
}

/// WebSocket upgrade handler. The first connection starts the stats
/// sampler; later ones only subscribe to it.
pub async fn websocket_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    state
        .stats
        .ensure_started(state.pool.clone(), &state.shutdown)
        .await;

    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Push stats frames until the client leaves or the server stops.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let mut updates = state.stats.subscribe();
    let mut shutdown = state.shutdown.subscribe();
    let (mut sender, mut receiver) = socket.split();

    debug!("WebSocket client connected");

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(update) => {
                    let frame = match update.wire_frame() {
                        Ok(frame) => frame,
                        Err(e) => {
                            warn!("Dropping stats frame: {e}");
                            continue;
                        }
                    };

                    if sender.send(Message::Text(frame.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("WebSocket client lagging, skipped {skipped} updates");
                }
                Err(RecvError::Closed) => break,
            },
            message = receiver.next() => match message {
                // Clients never send application frames; drain until close.
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            _ = shutdown.wait() => {
                let _ = sender.send(Message::Close(None)).await;
                break;
            }
        }
    }

    debug!("WebSocket client disconnected");
}
