//! Static clan credential table.
//!
//! Passwords are compared as plaintext with an exact match. There is no
//! hashing, rate limiting or lockout: the table guards against accidental
//! resets by visitors, not against attackers.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::types::Username;

const INVALID_CREDENTIALS: &str = "Invalid username or password.";

#[derive(Clone, PartialEq, Eq)]
pub struct CredentialTable {
    users: HashMap<Username, String>,
}

impl std::fmt::Debug for CredentialTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CredentialTable").field("users", &names).finish()
    }
}

impl CredentialTable {
    pub fn new(users: HashMap<Username, String>) -> Result<Self, CoreError> {
        if users.is_empty() {
            return Err(CoreError::Validation(
                "Credential table must contain at least one user".into(),
            ));
        }
        if users.keys().any(|u| u.trim().is_empty()) {
            return Err(CoreError::Validation("Username must not be empty".into()));
        }
        Ok(Self { users })
    }

    /// Parse `user:pass,user:pass`. Passwords may contain `:`.
    pub fn parse(spec: &str) -> Result<Self, CoreError> {
        let mut users = HashMap::new();
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (user, pass) = entry.split_once(':').ok_or_else(|| {
                CoreError::Validation(format!(
                    "Credential entry '{entry}' must be formatted as user:password"
                ))
            })?;
            if users.insert(user.trim().to_string(), pass.to_string()).is_some() {
                return Err(CoreError::Validation(format!(
                    "Duplicate username '{}'",
                    user.trim()
                )));
            }
        }
        Self::new(users)
    }

    /// Exact-match check. Returns the canonical username on success.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Username, CoreError> {
        match self.users.get_key_value(username) {
            Some((user, expected)) if expected == password => Ok(user.clone()),
            _ => Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into())),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for CredentialTable {
    fn default() -> Self {
        let users = [
            ("dontcallmeblack", "dcmb"),
            ("neveon", "sigmaboy"),
            ("azazelbreath", "lezaza"),
        ]
        .into_iter()
        .map(|(u, p)| (u.to_string(), p.to_string()))
        .collect();
        Self { users }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_user_authenticates() {
        let table = CredentialTable::default();
        assert_eq!(table.authenticate("neveon", "sigmaboy").unwrap(), "neveon");
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let table = CredentialTable::default();
        assert_matches!(
            table.authenticate("neveon", "wrong"),
            Err(CoreError::Unauthorized(_))
        );
    }

    #[test]
    fn unknown_user_is_unauthorized() {
        let table = CredentialTable::default();
        assert_matches!(
            table.authenticate("stranger", "sigmaboy"),
            Err(CoreError::Unauthorized(_))
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        let table = CredentialTable::default();
        assert!(table.authenticate("Neveon", "sigmaboy").is_err());
        assert!(table.authenticate("neveon", "SIGMABOY").is_err());
    }

    #[test]
    fn parse_entries() {
        let table = CredentialTable::parse("alice:pw1, bob:p:w:2").unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.authenticate("alice", "pw1").is_ok());
        assert!(table.authenticate("bob", "p:w:2").is_ok());
    }

    #[test]
    fn parse_rejects_bad_entries() {
        assert_matches!(CredentialTable::parse("alice"), Err(CoreError::Validation(_)));
        assert_matches!(CredentialTable::parse(""), Err(CoreError::Validation(_)));
        assert_matches!(
            CredentialTable::parse("a:1,a:2"),
            Err(CoreError::Validation(msg)) if msg.contains("Duplicate")
        );
        assert_matches!(CredentialTable::parse(":pw"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn debug_output_hides_passwords() {
        let rendered = format!("{:?}", CredentialTable::default());
        assert!(rendered.contains("neveon"));
        assert!(!rendered.contains("sigmaboy"));
    }
}
