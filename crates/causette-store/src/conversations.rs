//! Derivation of conversation summaries from the message log.
//!
//! Conversations are never stored. Callers re-derive after every
//! mutation of the log; there is no cache and therefore nothing to
//! invalidate.

use std::collections::HashMap;

use chrono::DateTime;

use causette_shared::ConversationId;

use crate::models::{Conversation, LastMessage, Message};

/// Fold the message log into one summary per participant pair, sorted
/// by most recent activity.
///
/// Single pass: messages group by conversation id in first-seen order,
/// and the running last message is replaced only on a strictly greater
/// timestamp, so exact ties keep the earlier-seen message. The final
/// sort is stable and descending; an absent last message would sort as
/// the epoch, though it cannot occur since a conversation only
/// materialises once a message exists for its pair.
pub fn derive(messages: &[Message]) -> Vec<Conversation> {
    let mut conversations: Vec<Conversation> = Vec::new();
    let mut index: HashMap<ConversationId, usize> = HashMap::new();

    for message in messages {
        let idx = *index.entry(message.conversation_id).or_insert_with(|| {
            conversations.push(Conversation {
                id: message.conversation_id,
                participants: message.conversation_id.participants(),
                messages: Vec::new(),
                last_message: None,
            });
            conversations.len() - 1
        });

        let conversation = &mut conversations[idx];
        let newer = match &conversation.last_message {
            Some(last) => message.timestamp > last.timestamp,
            None => true,
        };
        if newer {
            conversation.last_message = Some(LastMessage {
                text: message.text.clone(),
                timestamp: message.timestamp,
            });
        }
        conversation.messages.push(message.clone());
    }

    conversations.sort_by_key(|c| {
        std::cmp::Reverse(
            c.last_message
                .as_ref()
                .map(|last| last.timestamp)
                .unwrap_or(DateTime::UNIX_EPOCH),
        )
    });
    conversations
}

/// Look up one conversation by id in a derived list.
pub fn find(conversations: &[Conversation], id: ConversationId) -> Option<&Conversation> {
    conversations.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use causette_shared::UserId;
    use chrono::{Duration, TimeZone, Utc};

    const ALICE: UserId = UserId(1);
    const BOB: UserId = UserId(2);
    const CHARLIE: UserId = UserId(3);

    fn at(hour: u32, minute: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_empty_log_derives_no_conversations() {
        assert!(derive(&[]).is_empty());
    }

    #[test]
    fn test_groups_both_directions_into_one_conversation() {
        let messages = vec![
            Message::new(ALICE, BOB, "hi", at(9, 0)),
            Message::new(BOB, ALICE, "yo", at(9, 5)),
        ];
        let derived = derive(&messages);
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].participants, (ALICE, BOB));
        assert_eq!(derived[0].messages.len(), 2);
    }

    #[test]
    fn test_last_message_tracks_the_max_timestamp() {
        // Appended out of timestamp order on purpose.
        let messages = vec![
            Message::new(ALICE, BOB, "newest", at(10, 0)),
            Message::new(BOB, ALICE, "oldest", at(9, 0)),
        ];
        let derived = derive(&messages);
        let last = derived[0].last_message.as_ref().unwrap();
        assert_eq!(last.text, "newest");
        assert_eq!(last.timestamp, at(10, 0));
    }

    #[test]
    fn test_last_message_tie_keeps_the_earlier_seen() {
        let messages = vec![
            Message::new(ALICE, BOB, "first at tie", at(9, 0)),
            Message::new(BOB, ALICE, "second at tie", at(9, 0)),
        ];
        let derived = derive(&messages);
        assert_eq!(derived[0].last_message.as_ref().unwrap().text, "first at tie");
    }

    #[test]
    fn test_sorted_by_last_message_descending() {
        let messages = vec![
            Message::new(ALICE, BOB, "a early", at(9, 0)),
            Message::new(ALICE, CHARLIE, "b only", at(9, 30)),
            Message::new(BOB, ALICE, "a late", at(10, 0)),
        ];
        let derived = derive(&messages);
        assert_eq!(derived.len(), 2);
        assert_eq!(derived[0].id, ConversationId::between(ALICE, BOB));
        assert_eq!(derived[1].id, ConversationId::between(ALICE, CHARLIE));
    }

    #[test]
    fn test_unread_count_is_per_viewer() {
        let mut reply = Message::new(BOB, ALICE, "yo", at(9, 5));
        reply.read = false;
        let mut greeting = Message::new(ALICE, BOB, "hi", at(9, 0));
        greeting.read = true;

        let derived = derive(&[greeting, reply]);
        assert_eq!(derived[0].unread_count(ALICE), 1);
        assert_eq!(derived[0].unread_count(BOB), 0);
    }

    #[test]
    fn test_find_by_id() {
        let messages = vec![
            Message::new(ALICE, BOB, "hi", at(9, 0)),
            Message::new(ALICE, CHARLIE, "hej", at(9, 1)),
        ];
        let derived = derive(&messages);
        let id = ConversationId::between(BOB, ALICE);
        assert!(find(&derived, id).is_some());
        assert!(find(&derived, ConversationId::between(UserId(8), UserId(9))).is_none());
    }

    #[test]
    fn test_rederives_after_new_messages() {
        let mut messages = vec![Message::new(ALICE, BOB, "hi", at(9, 0))];
        assert_eq!(derive(&messages)[0].messages.len(), 1);

        messages.push(Message::new(ALICE, CHARLIE, "hej", at(9, 0) + Duration::hours(1)));
        let derived = derive(&messages);
        assert_eq!(derived.len(), 2);
        assert_eq!(derived[0].id, ConversationId::between(ALICE, CHARLIE));
    }
}
