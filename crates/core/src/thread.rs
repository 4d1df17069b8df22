use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shareable snippet thread. Immutable after creation except for the
/// one-way `locked` flip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: i32,
    pub slug: String,
    pub locked: bool,
    pub created_at: DateTime<Utc>,
}

/// A single code snippet appended to a thread. Never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub thread_id: i32,
    pub content: String,
    pub language: String,
    pub is_code: bool,
    pub created_at: DateTime<Utc>,
}

/// A thread together with its messages in append order. This is the shape
/// `GET /api/threads/{slug}` returns: thread fields flattened at the top
/// level plus a `messages` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadWithMessages {
    #[serde(flatten)]
    pub thread: Thread,
    pub messages: Vec<Message>,
}

/// Result of creating a thread: the public identifier plus the row id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedThread {
    pub slug: String,
    pub thread_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_thread() -> Thread {
        Thread {
            id: 1,
            slug: "a1b2".to_owned(),
            locked: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn message_serializes_camel_case() {
        let msg = Message {
            id: 7,
            thread_id: 1,
            content: "print('hi')".to_owned(),
            language: "python".to_owned(),
            is_code: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["threadId"], 1);
        assert_eq!(json["isCode"], true);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("thread_id").is_none());
    }

    #[test]
    fn thread_with_messages_flattens_thread_fields() {
        let json = serde_json::to_value(ThreadWithMessages {
            thread: sample_thread(),
            messages: vec![],
        })
        .unwrap();
        assert_eq!(json["slug"], "a1b2");
        assert_eq!(json["locked"], false);
        assert!(json["messages"].as_array().unwrap().is_empty());
    }
}
