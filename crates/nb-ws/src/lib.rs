pub mod app_state;
pub mod error;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod stats_broadcaster;
pub mod stats_update;

pub use app_state::{AppState, websocket_handler};
pub use error::{WsError, WsErrorResult};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use stats_broadcaster::StatsBroadcaster;
pub use stats_update::StatsUpdate;

#[cfg(test)]
mod tests;
