/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `events`: Event CRUD with organizer ownership checks
/// - `users`: Registration and credential-check login
/// - `tickets`: Ticket claims and per-user listings
/// - `weather`: Upstream weather proxy

pub mod events;
pub mod health;
pub mod tickets;
pub mod users;
pub mod weather;
