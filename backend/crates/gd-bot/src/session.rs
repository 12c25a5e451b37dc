use std::collections::HashMap;

use gd_core::{DescriptionMode, Operation};
use tokio::sync::Mutex;

/// What the next archive from a caller will be used for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingUpload {
    Create { mode: DescriptionMode },
    Refresh { name: String, mode: DescriptionMode },
}

impl PendingUpload {
    pub fn operation(&self) -> Operation {
        match self {
            PendingUpload::Create { .. } => Operation::Create,
            PendingUpload::Refresh { .. } => Operation::Refresh,
        }
    }

    pub fn mode(&self) -> DescriptionMode {
        match self {
            PendingUpload::Create { mode } | PendingUpload::Refresh { mode, .. } => *mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingArchive(PendingUpload),
}

/// Per-caller session state; absent callers are `Idle`
#[derive(Default)]
pub struct SessionStore {
    pending: Mutex<HashMap<u64, PendingUpload>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn arm(&self, user_id: u64, upload: PendingUpload) {
        self.pending.lock().await.insert(user_id, upload);
    }

    pub async fn clear(&self, user_id: u64) {
        self.pending.lock().await.remove(&user_id);
    }

    /// Current state, leaving it in place
    pub async fn state(&self, user_id: u64) -> SessionState {
        match self.pending.lock().await.get(&user_id) {
            Some(upload) => SessionState::AwaitingArchive(upload.clone()),
            None => SessionState::Idle,
        }
    }

    /// Current state, resetting the caller to `Idle`
    pub async fn take(&self, user_id: u64) -> SessionState {
        match self.pending.lock().await.remove(&user_id) {
            Some(upload) => SessionState::AwaitingArchive(upload),
            None => SessionState::Idle,
        }
    }
}
