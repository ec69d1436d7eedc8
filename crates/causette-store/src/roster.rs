//! The identity store: a session-scoped roster of known users.

use chrono::Utc;
use tracing::info;

use causette_shared::{AuthError, UserId, UserStatus};

use crate::models::User;

/// Append-only roster of users plus a monotonic id counter.
///
/// Signup is the only mutation; existing users are never removed or
/// rewritten. The "current user" pointer deliberately lives in the
/// session facade, not here, so independent sessions can each hold
/// their own identity.
#[derive(Debug, Clone)]
pub struct Roster {
    users: Vec<User>,
    next_id: u32,
}

impl Roster {
    /// An empty roster. Ids start at 1.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a roster from fixed seed users. The id counter continues
    /// past the highest seeded id.
    pub fn from_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        Self { users, next_id }
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Look up the user whose username and password both match exactly.
    ///
    /// Unknown user and wrong password collapse into the same error so
    /// callers cannot enumerate usernames. (The comparison is plaintext;
    /// this roster is a mock, not a security boundary.)
    pub fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        info!(user_id = %user.id, username = %user.username, "Login succeeded");
        Ok(user.clone())
    }

    /// Validate and append a new user.
    ///
    /// The duplicate check runs before the field validations, so a taken
    /// username surfaces as [`AuthError::DuplicateIdentity`] even when
    /// other fields are also bad.
    pub fn signup(&mut self, username: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if self
            .users
            .iter()
            .any(|u| u.username == username || u.email == email)
        {
            return Err(AuthError::DuplicateIdentity);
        }

        if username.chars().count() < 3 {
            return Err(AuthError::UsernameTooShort);
        }
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
        if password.chars().count() < 6 {
            return Err(AuthError::PasswordTooShort);
        }

        let id = UserId(self.next_id);
        self.next_id += 1;

        let user = User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            avatar: placeholder_avatar(id),
            status: UserStatus::Online,
            last_seen: Utc::now(),
        };

        info!(user_id = %id, username = %username, "User signed up");
        self.users.push(user.clone());
        Ok(user)
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// All known users, in signup order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic placeholder avatar for a freshly signed-up user.
fn placeholder_avatar(id: UserId) -> String {
    format!("https://i.pravatar.cc/150?img={id}")
}
