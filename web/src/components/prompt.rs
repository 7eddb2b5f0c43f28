use std::time::Duration;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thaw::{Toast, ToastIntent, ToastOptions, ToastPosition, ToastTitle, ToasterInjection};

/// How long a notification stays up before dismissing itself. Hovering the
/// toast pauses the countdown; it resumes on pointer-exit (toaster behavior).
const DISMISS_AFTER: Duration = Duration::from_millis(1000);

/// Icon shown on a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastIcon {
    #[default]
    Success,
    Warning,
    Error,
    Info,
}

/// Screen corner a notification is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastAnchor {
    TopStart,
    Top,
    #[default]
    TopEnd,
    BottomStart,
    Bottom,
    BottomEnd,
}

/// Per-notification configuration. Omitted fields take the defaults: empty
/// message, success icon, top-end anchor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub msg: String,
    pub icon: ToastIcon,
    pub position: ToastAnchor,
}

impl From<ToastIcon> for ToastIntent {
    fn from(icon: ToastIcon) -> Self {
        match icon {
            ToastIcon::Success => ToastIntent::Success,
            ToastIcon::Warning => ToastIntent::Warning,
            ToastIcon::Error => ToastIntent::Error,
            ToastIcon::Info => ToastIntent::Info,
        }
    }
}

impl From<ToastAnchor> for ToastPosition {
    fn from(anchor: ToastAnchor) -> Self {
        match anchor {
            ToastAnchor::TopStart => ToastPosition::TopStart,
            ToastAnchor::Top => ToastPosition::Top,
            ToastAnchor::TopEnd => ToastPosition::TopEnd,
            ToastAnchor::BottomStart => ToastPosition::BottomStart,
            ToastAnchor::Bottom => ToastPosition::Bottom,
            ToastAnchor::BottomEnd => ToastPosition::BottomEnd,
        }
    }
}

/// Page-level notification capability.
///
/// Every instance is independent and carries no cross-call state; timers and
/// hover handling belong to the toast layer underneath.
#[derive(Clone)]
pub struct Prompt {
    toaster: ToasterInjection,
}

impl Prompt {
    /// Captures the page toaster. Must be created under a `ToasterProvider`.
    pub fn new() -> Self {
        Self {
            toaster: ToasterInjection::expect_context(),
        }
    }

    /// Shows a short-lived, self-dismissing notification.
    pub fn toast(&self, config: ToastConfig) {
        let ToastConfig {
            msg,
            icon,
            position,
        } = config;

        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{msg}</ToastTitle>
                    </Toast>
                }
            },
            ToastOptions::default()
                .with_intent(icon.into())
                .with_position(position.into())
                .with_timeout(DISMISS_AFTER),
        );
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}
