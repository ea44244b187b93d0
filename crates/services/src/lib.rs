//! # services
//!
//! Application logic on top of `domains`: the persistence gateway, the pure
//! mutation API, learner-facing catalog views, and the session container
//! that ties them together.

pub mod catalog;
pub mod error;
pub mod gateway;
pub mod mutations;
pub mod session;

pub use catalog::CourseView;
pub use error::{Result, ServiceError};
pub use gateway::{StateGateway, DEFAULT_STORAGE_KEY};
pub use session::LmsSession;
