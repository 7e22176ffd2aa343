// ABOUTME: Toast notification store with typed kinds and per-toast display durations
// ABOUTME: Toasts stay until removed; the renderer decides when a duration has elapsed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use super::{Observable, Subscription};
use crate::constants::toast::DEFAULT_DURATION_MS;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
    /// Needs attention
    Warning,
    /// Neutral information
    #[default]
    Info,
}

/// Unique toast identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(pub Uuid);

impl ToastId {
    /// Fresh random id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A toast notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Identifier returned by [`ToastStore::add`]
    pub id: ToastId,
    /// Text shown to the user
    pub message: String,
    /// Severity
    #[serde(rename = "type")]
    pub kind: ToastKind,
    /// Suggested display time in milliseconds
    pub duration_ms: u64,
}

/// Ordered list of visible toasts
#[derive(Debug, Clone, Default)]
pub struct ToastStore {
    toasts: Observable<Vec<Toast>>,
}

impl ToastStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast; `duration_ms` defaults to 3000
    pub fn add(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        duration_ms: Option<u64>,
    ) -> ToastId {
        let toast = Toast {
            id: ToastId::new(),
            message: message.into(),
            kind,
            duration_ms: duration_ms.unwrap_or(DEFAULT_DURATION_MS),
        };
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));
        id
    }

    /// Append a success toast
    pub fn success(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.add(message, ToastKind::Success, duration_ms)
    }

    /// Append an error toast
    pub fn error(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.add(message, ToastKind::Error, duration_ms)
    }

    /// Append a warning toast
    pub fn warning(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.add(message, ToastKind::Warning, duration_ms)
    }

    /// Append an info toast
    pub fn info(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.add(message, ToastKind::Info, duration_ms)
    }

    /// Remove a toast; unknown ids are ignored. Returns whether one was removed.
    pub fn remove(&self, id: ToastId) -> bool {
        self.toasts.update_if(|toasts| {
            let Some(index) = toasts.iter().position(|toast| toast.id == id) else {
                return false;
            };
            toasts.remove(index);
            true
        })
    }

    /// Snapshot of the visible toasts, oldest first
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Number of visible toasts
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.with(Vec::len)
    }

    /// Whether no toast is visible
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.with(Vec::is_empty)
    }

    /// Listen for list changes
    pub fn subscribe(&self, listener: impl Fn(&[Toast]) + Send + Sync + 'static) -> Subscription {
        self.toasts.subscribe(move |toasts| listener(toasts))
    }
}
