//! `shopkeeper-admin` — panel session state.
//!
//! Each screen of the panel is a plain state machine over the store seams:
//! [`ProductForm`] for the product editor, [`UserDirectory`] for the users
//! screen. Rendering and routing live with the caller.

pub mod notify;
pub mod product_form;
pub mod user_directory;

pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use product_form::{FormError, ProductForm};
pub use user_directory::UserDirectory;
