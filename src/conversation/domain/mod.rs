//! Domain model for chat conversations.
//!
//! Sessions are replaced as whole records; there is no API for changing a
//! single field of a stored session.

mod action;
mod error;
mod event;
mod ids;
mod replies;
mod session;

pub use action::OutboundAction;
pub use error::{EmptyMessageError, ReplyTemplateError, SessionDomainError};
pub use event::InboundEvent;
pub use ids::ChatId;
pub use replies::Replies;
pub use session::{Session, SessionState};
