//! Career Recommendation Portal client
//!
//! - `client` - [`AuthClient`]: register, login, logout, current user
//! - `storage` - key/value session persistence (memory or files)
//! - `forms` - registration and login form validation
//! - `dashboard` - text rendering of the logged-in landing page

pub mod client;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod models;
pub mod notify;
pub mod session;
pub mod storage;

pub use client::AuthClient;
pub use dashboard::Dashboard;
pub use error::ClientError;
pub use forms::{FieldError, FormErrors, LoginForm, RegistrationForm};
pub use models::{Credentials, RegistrationData, User};
pub use notify::{Notifier, TerminalNotifier, TracingNotifier};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
