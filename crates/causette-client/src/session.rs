//! The per-session state object.
//!
//! One [`Session`] owns the roster, the message log and the current
//! identity. Embedders that want several simultaneous users hold
//! several sessions; nothing here is process-global, and every
//! operation runs to completion before the next one starts.

use tracing::info;

use causette_shared::{AuthError, ConversationId, SessionError, UserId};
use causette_store::{conversations, Conversation, Message, MessageLog, Roster, User};

use crate::seed;
use crate::views::{ConversationPreview, MessageView};

pub struct Session {
    roster: Roster,
    log: MessageLog,
    current: Option<UserId>,
}

impl Session {
    /// A session with empty stores and no identity.
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            log: MessageLog::new(),
            current: None,
        }
    }

    /// A session pre-populated with the fixed seed roster and messages,
    /// the state a fresh process starts from.
    pub fn seeded() -> Self {
        Self {
            roster: Roster::from_users(seed::users()),
            log: MessageLog::from_messages(seed::messages()),
            current: None,
        }
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Authenticate and set the current identity.
    pub fn login(&mut self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self.roster.login(username, password)?;
        self.current = Some(user.id);
        Ok(user)
    }

    /// Register a new user and set them as the current identity.
    pub fn signup(&mut self, username: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.roster.signup(username, email, password)?;
        self.current = Some(user.id);
        Ok(user)
    }

    /// Clear the current identity. Never fails; the session stays usable
    /// for another login.
    pub fn logout(&mut self) {
        if let Some(id) = self.current.take() {
            info!(user_id = %id, "Logged out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.and_then(|id| self.roster.get(id))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The current identity, or the contract failure every viewer-scoped
    /// operation reports when called signed out.
    fn viewer(&self) -> Result<UserId, SessionError> {
        self.current.ok_or(SessionError::NotAuthenticated)
    }

    // ------------------------------------------------------------------
    // Roster reads
    // ------------------------------------------------------------------

    /// All known users, in signup order.
    pub fn users(&self) -> &[User] {
        self.roster.users()
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.roster.get(id)
    }

    // ------------------------------------------------------------------
    // Messaging, scoped to the current identity
    // ------------------------------------------------------------------

    /// Conversation previews for the current user, most recent first.
    ///
    /// Conversations the viewer is not part of are filtered out, as is
    /// any pair whose other participant is missing from the roster.
    pub fn conversations(&self) -> Result<Vec<ConversationPreview>, SessionError> {
        let viewer = self.viewer()?;
        let derived = conversations::derive(self.log.all());

        Ok(derived
            .into_iter()
            .filter(|c| c.involves(viewer))
            .filter_map(|c| {
                let other = self.roster.get(c.id.other(viewer)?)?;
                Some(ConversationPreview::new(&c, other, viewer))
            })
            .collect())
    }

    /// The full derived conversation between the current user and
    /// `other`, if any messages exist for the pair.
    pub fn conversation_with(&self, other: UserId) -> Result<Option<Conversation>, SessionError> {
        let viewer = self.viewer()?;
        let id = ConversationId::between(viewer, other);
        let derived = conversations::derive(self.log.all());
        Ok(conversations::find(&derived, id).cloned())
    }

    /// One conversation's thread, oldest first.
    pub fn messages(&self, id: ConversationId) -> Result<Vec<Message>, SessionError> {
        self.viewer()?;
        Ok(self.log.for_conversation(id))
    }

    /// Viewer-relative message views for one conversation, oldest first.
    pub fn message_views(&self, id: ConversationId) -> Result<Vec<MessageView>, SessionError> {
        let viewer = self.viewer()?;
        Ok(self
            .log
            .for_conversation(id)
            .into_iter()
            .map(|m| MessageView::new(m, viewer))
            .collect())
    }

    /// Open the thread with `other`: mark everything addressed to the
    /// current user as read, then return the messages oldest first.
    pub fn open_conversation(&mut self, other: UserId) -> Result<Vec<Message>, SessionError> {
        let viewer = self.viewer()?;
        let id = ConversationId::between(viewer, other);
        self.log.mark_as_read(id, viewer);
        Ok(self.log.for_conversation(id))
    }

    /// Send a message from the current user. Blank text is a silent
    /// no-op returning `Ok(None)`.
    pub fn send_message(&mut self, receiver: UserId, text: &str) -> Result<Option<Message>, SessionError> {
        let sender = self.viewer()?;
        Ok(self.log.send(sender, receiver, text))
    }

    /// Mark the conversation read for the current user.
    pub fn mark_as_read(&mut self, id: ConversationId) -> Result<(), SessionError> {
        let viewer = self.viewer()?;
        self.log.mark_as_read(id, viewer);
        Ok(())
    }

    /// Unread messages addressed to the current user in `id`.
    pub fn unread_count(&self, id: ConversationId) -> Result<usize, SessionError> {
        let viewer = self.viewer()?;
        Ok(self.log.unread_count(id, viewer))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
