/// Authentication and authorization utilities
///
/// - `password`: Argon2id password hashing and verification
/// - `identity`: Caller roles and the event ownership decision logic

pub mod identity;
pub mod password;
