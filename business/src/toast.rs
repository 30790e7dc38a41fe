//! Transient notifications.

use chrono::{DateTime, TimeDelta, Utc};

/// How long a success toast stays visible.
pub const SUCCESS_TOAST_SECS: i64 = 2;
/// How long a failure toast stays visible.
pub const FAILURE_TOAST_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

impl ToastKind {
    pub fn duration(self) -> TimeDelta {
        match self {
            Self::Success => TimeDelta::seconds(SUCCESS_TOAST_SECS),
            Self::Failure => TimeDelta::seconds(FAILURE_TOAST_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + self.kind.duration()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

/// Stack of live toasts.
///
/// Identical messages are not merged; every push shows its own toast.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes `now` as a parameter so expiry stays testable.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
            created_at: now,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.push(ToastKind::Success, message, now)
    }

    pub fn failure(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.push(ToastKind::Failure, message, now)
    }

    /// Drops every toast that has expired by `now`.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.items.retain(|toast| !toast.is_expired(now));
    }

    pub fn active(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Toast> {
        self.items.iter().filter(move |toast| !toast.is_expired(now))
    }

    /// Time until the next toast expires, used to schedule a repaint.
    pub fn next_expiry(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.active(now)
            .map(|toast| toast.expires_at() - now)
            .min()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
