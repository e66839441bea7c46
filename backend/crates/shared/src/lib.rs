//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - The unified [`error::app_error::AppError`] and its result alias
//! - [`error::kind::ErrorKind`], the HTTP-facing error classification
//! - Storage error classification and the JSON error envelope (feature-gated)
//!
//! Only things whose meaning is stable across the whole portal belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
