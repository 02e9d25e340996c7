use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for a published notice: delivery metadata + payload.
///
/// Notes:
/// - `notice_id` is a UUIDv7, so envelope ids sort by publication time.
/// - `source` labels the emitting component (e.g. "operators", "warehouse").
/// - `payload` is the domain-agnostic notice payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeEnvelope<N> {
    notice_id: Uuid,
    source: String,
    payload: N,
}

impl<N> NoticeEnvelope<N> {
    pub fn new(source: impl Into<String>, payload: N) -> Self {
        Self {
            notice_id: Uuid::now_v7(),
            source: source.into(),
            payload,
        }
    }

    pub fn notice_id(&self) -> Uuid {
        self.notice_id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn payload(&self) -> &N {
        &self.payload
    }

    pub fn into_payload(self) -> N {
        self.payload
    }
}
