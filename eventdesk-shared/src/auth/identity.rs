/// Caller identity and the event ownership decision logic
///
/// EventDesk carries caller identity in plain `x-user-role` / `x-user-id`
/// request headers. The headers are asserted by the client and are not
/// verified against a session or signature; any caller can claim any role.
/// That spoofing gap is a documented property of the external contract, so
/// this module keeps the decision table explicit and testable rather than
/// hiding it inside individual handlers.
///
/// Decision table for event mutation:
///
/// | op            | admin | organizer (owner) | organizer (other) | customer / none |
/// |---------------|-------|-------------------|-------------------|-----------------|
/// | create        | allow | allow             | allow             | deny            |
/// | update/delete | allow | allow             | deny              | deny            |

use uuid::Uuid;

use crate::models::user::UserRole;

/// Identity asserted by the caller via request headers
///
/// Both fields are optional: public routes carry neither, and a malformed or
/// unknown header value is treated the same as an absent one (the protected
/// handlers then deny access).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Role from `x-user-role`, if present and recognized
    pub role: Option<UserRole>,

    /// User id from `x-user-id`, if present and a valid UUID
    pub user_id: Option<Uuid>,
}

impl CallerIdentity {
    /// Builds an identity from raw header values
    ///
    /// Unrecognized role strings and non-UUID user ids collapse to `None`.
    pub fn from_asserted(role: Option<&str>, user_id: Option<&str>) -> Self {
        Self {
            role: role.and_then(|r| r.parse().ok()),
            user_id: user_id.and_then(|id| Uuid::parse_str(id).ok()),
        }
    }

    /// Whether this caller may create events (organizer or admin)
    pub fn may_create_events(&self) -> bool {
        matches!(self.role, Some(UserRole::Organizer) | Some(UserRole::Admin))
    }

    /// Resolves this identity to an event mutation actor
    ///
    /// Returns `None` for customers and anonymous callers, who may never
    /// mutate events regardless of ownership.
    pub fn event_actor(&self) -> Option<EventActor> {
        match self.role {
            Some(UserRole::Admin) => Some(EventActor::Admin),
            Some(UserRole::Organizer) => Some(EventActor::Organizer(self.user_id)),
            _ => None,
        }
    }
}

/// An actor allowed to attempt event mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventActor {
    /// Admins may mutate any event
    Admin,

    /// Organizers may mutate only events they own
    ///
    /// `None` means the caller asserted the organizer role without an id;
    /// the ownership check then fails for every event.
    Organizer(Option<Uuid>),
}

impl EventActor {
    /// Applies the ownership rule against an event's organizer
    pub fn may_modify(&self, organizer_id: Uuid) -> bool {
        match self {
            EventActor::Admin => true,
            EventActor::Organizer(Some(id)) => *id == organizer_id,
            EventActor::Organizer(None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_asserted_parses_known_roles() {
        let id = CallerIdentity::from_asserted(Some("organizer"), None);
        assert_eq!(id.role, Some(UserRole::Organizer));

        let id = CallerIdentity::from_asserted(Some("admin"), None);
        assert_eq!(id.role, Some(UserRole::Admin));

        let id = CallerIdentity::from_asserted(Some("customer"), None);
        assert_eq!(id.role, Some(UserRole::Customer));
    }

    #[test]
    fn test_from_asserted_collapses_garbage() {
        let id = CallerIdentity::from_asserted(Some("superuser"), Some("not-a-uuid"));
        assert_eq!(id.role, None);
        assert_eq!(id.user_id, None);
    }

    #[test]
    fn test_create_permission() {
        assert!(CallerIdentity::from_asserted(Some("organizer"), None).may_create_events());
        assert!(CallerIdentity::from_asserted(Some("admin"), None).may_create_events());
        assert!(!CallerIdentity::from_asserted(Some("customer"), None).may_create_events());
        assert!(!CallerIdentity::default().may_create_events());
    }

    #[test]
    fn test_ownership_decision_table() {
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        assert!(EventActor::Admin.may_modify(owner));
        assert!(EventActor::Organizer(Some(owner)).may_modify(owner));
        assert!(!EventActor::Organizer(Some(other)).may_modify(owner));
        assert!(!EventActor::Organizer(None).may_modify(owner));
    }

    #[test]
    fn test_customer_is_never_an_event_actor() {
        let user_id = Uuid::new_v4().to_string();
        let id = CallerIdentity::from_asserted(Some("customer"), Some(user_id.as_str()));
        assert!(id.event_actor().is_none());
        assert!(CallerIdentity::default().event_actor().is_none());
    }
}
