pub mod users;

pub use users::UserGeneralPage;
