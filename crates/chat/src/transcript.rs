// File: crates/chat/src/transcript.rs
// Summary: Append-only chat transcript (user and assistant messages with timestamps).

use std::fmt;

use chrono::{DateTime, Local};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// Prompt prefix used by the terminal front end.
    pub fn prefix(&self) -> &'static str {
        match self {
            Author::User => "you>",
            Author::Assistant => "bot>",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Message {
    pub author: Author,
    pub text: String,
    pub at: DateTime<Local>,
}

impl Message {
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self { author, text: text.into(), at: Local::now() }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.author.prefix(), self.text)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, author: Author, text: impl Into<String>) -> &Message {
        self.messages.push(Message::new(author, text));
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] { &self.messages }
    pub fn last(&self) -> Option<&Message> { self.messages.last() }
    pub fn len(&self) -> usize { self.messages.len() }
    pub fn is_empty(&self) -> bool { self.messages.is_empty() }

    /// Messages appended at or after index `from`.
    pub fn since(&self, from: usize) -> &[Message] {
        &self.messages[from.min(self.messages.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_order_and_prefix() {
        let mut t = Transcript::new();
        t.push(Author::User, "10, 20");
        t.push(Author::Assistant, "ok");
        assert_eq!(t.len(), 2);
        assert_eq!(t.messages()[0].to_string(), "you> 10, 20");
        assert_eq!(t.last().map(|m| m.author), Some(Author::Assistant));
        assert!(t.messages()[0].at <= t.messages()[1].at);
    }

    #[test]
    fn since_clamps_out_of_range() {
        let mut t = Transcript::new();
        t.push(Author::User, "a");
        assert_eq!(t.since(0).len(), 1);
        assert!(t.since(5).is_empty());
    }
}
