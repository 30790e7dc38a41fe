//! Wire types of the admin API.

pub mod codes;
pub mod page;
pub mod profiles;
pub mod registrations;
pub mod users;

pub use codes::{
    BlacklistFlag, Completion, Gender, ParseCodeError, ReviewStatus, UnknownCode, UserType,
};
pub use page::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageRequest, PageResult};
pub use profiles::{AppearanceRating, ProfileQuery, ProfileRecord};
pub use registrations::{RegistrationEdit, RegistrationRecord, ReviewDecision};
pub use users::{UserQuery, UserRecord};
