pub mod authenticated_user;
pub mod authentication_request;
pub mod session;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::AuthMode;
pub use session::SessionRecord;
