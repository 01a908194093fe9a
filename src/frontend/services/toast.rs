//! Toast notifications.

use crate::backend::utils::config::ToastOptions;
use dioxus::prelude::*;
use std::time::Duration;

/// Horizontal distance a toast has to be dragged before it is dismissed.
pub const DRAG_DISMISS_DISTANCE: f64 = 80.0;

pub static TOASTS: GlobalSignal<ToastQueue> = Signal::global(ToastQueue::default);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "toast info",
            Self::Success => "toast success",
            Self::Warning => "toast warning",
            Self::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    remaining: Duration,
    paused: bool,
    drag_origin: Option<f64>,
    /// Set when a drag moved the toast; swallows the click that ends it.
    dragged: bool,
}

impl Toast {
    #[cfg(test)]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    options: ToastOptions,
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub const fn options(&self) -> &ToastOptions {
        &self.options
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            remaining: self.options.timeout(),
            paused: false,
            drag_origin: None,
            dragged: false,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn click(&mut self, id: u64) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) else {
            return false;
        };
        if std::mem::take(&mut toast.dragged) {
            return false;
        }
        self.options.close_on_click && self.dismiss(id)
    }

    pub fn pause(&mut self, id: u64) {
        if self.options.pause_on_hover {
            self.set_paused(id, true);
        }
    }

    pub fn resume(&mut self, id: u64) {
        self.set_paused(id, false);
    }

    fn set_paused(&mut self, id: u64, paused: bool) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.paused = paused;
        }
    }

    /// Advances the clock and drops expired toasts.
    pub fn tick(&mut self, elapsed: Duration) {
        for toast in self.toasts.iter_mut().filter(|toast| !toast.paused) {
            toast.remaining = toast.remaining.saturating_sub(elapsed);
        }
        self.toasts.retain(|toast| !toast.remaining.is_zero());
    }

    pub fn begin_drag(&mut self, id: u64, x: f64) {
        if !self.options.draggable {
            return;
        }
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.drag_origin = Some(x);
        }
    }

    /// Finishes a drag; returns whether the toast was dismissed.
    pub fn end_drag(&mut self, id: u64, x: f64) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) else {
            return false;
        };
        let Some(origin) = toast.drag_origin.take() else {
            return false;
        };

        let distance = (x - origin).abs();
        if distance >= DRAG_DISMISS_DISTANCE {
            return self.dismiss(id);
        }
        toast.dragged = distance > 0.0;
        false
    }
}

pub fn info(message: impl Into<String>) {
    TOASTS.write().push(ToastKind::Info, message);
}

pub fn success(message: impl Into<String>) {
    TOASTS.write().push(ToastKind::Success, message);
}

pub fn warning(message: impl Into<String>) {
    TOASTS.write().push(ToastKind::Warning, message);
}

pub fn error(message: impl Into<String>) {
    TOASTS.write().push(ToastKind::Error, message);
}
