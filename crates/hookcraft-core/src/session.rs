//! Caller identity, passed explicitly to screens that need it

use crate::actor::AccountActor;
use crate::error::{ActorError, ActorErrorKind};
use crate::models::UserProfile;
use futures::join;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// `None` for anonymous callers and callers without a saved profile
    pub profile: Option<UserProfile>,
    pub is_admin: bool,
    pub authenticated: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn display_name(&self) -> &str {
        match &self.profile {
            Some(profile) if !profile.name.trim().is_empty() => &profile.name,
            _ => "Creator",
        }
    }

    /// Signed in but no profile saved yet
    pub fn needs_profile(&self) -> bool {
        self.authenticated && self.profile.is_none()
    }
}

/// Resolve who the caller is. An `Unauthorized` rejection means anonymous;
/// anything else is returned as an error.
pub async fn resolve_session<A: AccountActor>(actor: &A) -> Result<Session, ActorError> {
    let (profile, is_admin) = join!(actor.get_caller_user_profile(), actor.is_caller_admin());

    match (profile, is_admin) {
        (Ok(profile), Ok(is_admin)) => Ok(Session {
            profile,
            is_admin,
            authenticated: true,
        }),
        (Err(err), _) | (_, Err(err)) if err.kind == ActorErrorKind::Unauthorized => {
            Ok(Session::anonymous())
        }
        (Err(err), _) | (_, Err(err)) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back() {
        assert_eq!(Session::anonymous().display_name(), "Creator");

        let session = Session {
            profile: Some(UserProfile {
                name: "Ana".into(),
                email: "ana@example.com".into(),
            }),
            is_admin: false,
            authenticated: true,
        };
        assert_eq!(session.display_name(), "Ana");
        assert!(!session.needs_profile());
    }
}
