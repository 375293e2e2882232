/// Database models for EventDesk
///
/// Each model owns its SQL: handlers call these associated functions and
/// never build queries themselves.
///
/// # Models
///
/// - `user`: Accounts, roles, and credential lookup
/// - `event`: Events with organizer ownership
/// - `ticket`: Ticket claims and per-user listings

pub mod event;
pub mod ticket;
pub mod user;
