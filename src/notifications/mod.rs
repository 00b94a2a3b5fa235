// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, its `Kind` and display `Phase`
//! - [`manager`] - `Manager` registry and timed lifecycle
//! - [`toast`] - Toast widget rendering the registry
//!
//! # Usage
//!
//! ```ignore
//! let now = Instant::now();
//! let mut manager = Manager::new();
//! let id = manager.success(now, "Escala aplicada: 2.0m", None, Options::default());
//!
//! // Drive timers from a periodic tick
//! manager.tick(now + Duration::from_millis(50));
//!
//! // In the view, render toasts
//! let overlay = Toast::view_overlay(&manager, now, true).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Entry, Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, Options, Phase};
pub use toast::Toast;
