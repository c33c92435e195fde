//! Viewer identity and view deduplication scope.

use crate::domain::users::UserUuid;

/// Who is looking at a product, as resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerIdentity {
    pub user: Option<UserUuid>,
    pub session_id: Option<String>,
    pub ip_address: String,
}

impl ViewerIdentity {
    /// A signed-in user is deduplicated by user id alone; everyone else by
    /// session or address.
    #[must_use]
    pub fn scope(&self) -> DedupScope<'_> {
        match self.user {
            Some(user) => DedupScope::User(user),
            None => DedupScope::Guest {
                session_id: self.session_id.as_deref(),
                ip_address: &self.ip_address,
            },
        }
    }
}

/// Rule deciding whether an existing view record already counts for a viewer.
///
/// A guest matches a record with the same session or the same address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupScope<'a> {
    User(UserUuid),
    Guest {
        session_id: Option<&'a str>,
        ip_address: &'a str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(session: Option<&str>, ip: &str) -> ViewerIdentity {
        ViewerIdentity {
            user: None,
            session_id: session.map(str::to_owned),
            ip_address: ip.to_owned(),
        }
    }

    #[test]
    fn signed_in_viewer_is_scoped_by_user_alone() {
        let user = UserUuid::new();
        let identity = ViewerIdentity {
            user: Some(user),
            session_id: Some("s1".to_owned()),
            ip_address: "10.0.0.1".to_owned(),
        };

        assert_eq!(identity.scope(), DedupScope::User(user));
    }

    #[test]
    fn guest_is_scoped_by_session_and_address() {
        let identity = guest(Some("s1"), "10.0.0.1");

        assert_eq!(
            identity.scope(),
            DedupScope::Guest {
                session_id: Some("s1"),
                ip_address: "10.0.0.1",
            }
        );
    }

    #[test]
    fn guest_without_session_is_scoped_by_address() {
        let identity = guest(None, "10.0.0.1");
        let scope = identity.scope();

        assert_eq!(
            scope,
            DedupScope::Guest {
                session_id: None,
                ip_address: "10.0.0.1",
            }
        );
    }
}
