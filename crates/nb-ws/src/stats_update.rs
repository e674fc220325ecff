use crate::WsErrorResult;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One sample of the usage counter, stamped with the wall-clock time it
/// was taken at.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsUpdate {
    pub value: i64,
    pub date: String,
}

#[derive(Serialize)]
struct WireFrame<'a> {
    event: &'static str,
    value: i64,
    date: &'a str,
}

impl StatsUpdate {
    pub fn new(value: i64, at: DateTime<Utc>) -> Self {
        Self {
            value,
            date: at.format("%H:%M:%S").to_string(),
        }
    }

    /// Serialize into the frame pushed to WebSocket clients.
    pub fn wire_frame(&self) -> WsErrorResult<String> {
        let frame = WireFrame {
            event: "updateData",
            value: self.value,
            date: &self.date,
        };

        Ok(serde_json::to_string(&frame)?)
    }
}
