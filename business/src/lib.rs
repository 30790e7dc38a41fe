pub mod api;
pub mod config;
pub mod envelope;
pub mod http;
pub mod models;
pub mod table;
pub mod toast;
pub mod user_general;

pub use api::{ApiClient, ApiError, ApiResult, CallOptions, UsersApi};
pub use config::{BusinessConfig, ConfigError};
pub use envelope::ResponseEnvelope;
pub use toast::{Toast, ToastKind, Toasts};
pub use user_general::{Mutation, PageModal, RowAction, UserGeneralState};
