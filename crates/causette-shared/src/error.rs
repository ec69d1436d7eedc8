use thiserror::Error;

/// Validation failures from login and signup.
///
/// These are ordinary recoverable results; the caller displays the
/// message and lets the user try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login username/password mismatch. Unknown user and wrong
    /// password are deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Signup username or email already present in the roster.
    #[error("Username or email already exists")]
    DuplicateIdentity,

    /// Signup username shorter than 3 characters.
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,

    /// Signup email without an `@`.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Signup password shorter than 6 characters.
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Programming-contract failures from the session facade. Unlike
/// [`AuthError`] these indicate a caller bug, not bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A viewer-scoped operation ran with no current identity.
    #[error("No authenticated user in this session")]
    NotAuthenticated,
}

/// Failure to parse a conversation id from its `"<low>-<high>"` form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid conversation id: {0}")]
pub struct ParseConversationIdError(pub String);
