//! Design assistant chat.
//!
//! Chat input is matched against a small keyword table, first match wins.
//! Replies are not produced immediately: [`Conversation::send`] queues a
//! [`PendingReply`] that becomes due after [`REPLY_DELAY`], and the command
//! is only interpreted and applied when the reply is resolved, against
//! whatever the document looks like at that moment.

use std::time::{Duration, Instant};

use crate::Theme;

/// Delay between a user message and the assistant's reply.
pub const REPLY_DELAY: Duration = Duration::from_millis(600);

/// First message of every conversation.
pub const GREETING: &str = "Hello! I am your AI Design Assistant. I can help you align elements, change styles across your project, or add new components. What's on your mind?";

/// Reply when no command matches.
pub const HELP_REPLY: &str =
    "I'm not sure how to do that yet. Try 'make everything red' or 'center all'.";

/// Background colors the assistant can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    /// `#ef4444`.
    Red,
    /// `#3b82f6`.
    Blue,
}

impl Swatch {
    /// Hex color.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Blue => "#3b82f6",
        }
    }
}

/// A recognized chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set every element's background.
    Recolor(Swatch),
    /// Center-align every element.
    CenterAll,
    /// Remove every element.
    Clear,
    /// Switch the page palette.
    SetTheme(Theme),
    /// Nothing matched.
    Help,
}

impl Command {
    /// Interpret a chat message.
    #[must_use]
    pub fn interpret(text: &str) -> Self {
        let cmd = text.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| cmd.contains(w));

        if has(&["red", "roșu"]) {
            Self::Recolor(Swatch::Red)
        } else if has(&["blue", "albastru"]) {
            Self::Recolor(Swatch::Blue)
        } else if has(&["center", "centru"]) {
            Self::CenterAll
        } else if has(&["clear", "goleste"]) {
            Self::Clear
        } else if has(&["theme", "tema"]) {
            if cmd.contains("light") {
                Self::SetTheme(Theme::Light)
            } else if cmd.contains("dark") {
                Self::SetTheme(Theme::Dark)
            } else if cmd.contains("glass") {
                Self::SetTheme(Theme::Glass)
            } else {
                Self::Help
            }
        } else {
            Self::Help
        }
    }

    /// The assistant's reply once the command has been applied.
    #[must_use]
    pub const fn reply(self) -> &'static str {
        match self {
            Self::Recolor(Swatch::Red) => "Done! Everything is now Red.",
            Self::Recolor(Swatch::Blue) => "Changed all backgrounds to Blue.",
            Self::CenterAll => "All elements are now centered.",
            Self::Clear => "Canvas cleared.",
            Self::SetTheme(Theme::Light) => "Switched to Light theme.",
            Self::SetTheme(Theme::Dark) => "Back to Dark theme.",
            Self::SetTheme(Theme::Glass) => "Glassmorphism mode on.",
            Self::SetTheme(_) | Self::Help => HELP_REPLY,
        }
    }
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The person using the editor.
    User,
    /// The assistant.
    Assistant,
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Sequence number within the conversation.
    pub id: u64,
    /// Author.
    pub role: Role,
    /// Message text.
    pub text: String,
}

/// A reply waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// The user message being answered.
    pub input: String,
    /// When the reply may be resolved.
    pub due: Instant,
}

impl PendingReply {
    /// Check if the reply may be resolved at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// Chat transcript plus queued replies.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending: Vec<PendingReply>,
    next_id: u64,
}

impl Conversation {
    /// Start a conversation with the greeting.
    #[must_use]
    pub fn new() -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            pending: Vec::new(),
            next_id: 0,
        };
        conversation.push(Role::Assistant, GREETING);
        conversation
    }

    fn push(&mut self, role: Role, text: &str) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            text: text.to_string(),
        });
    }

    /// Record a user message and queue its reply.
    ///
    /// Blank input is ignored; returns whether a message was recorded.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.push(Role::User, text);
        self.pending.push(PendingReply {
            input: text.to_string(),
            due: now + REPLY_DELAY,
        });
        true
    }

    /// Remove and return the replies due at `now`, oldest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingReply> {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|reply| reply.is_due(now));
        self.pending = waiting;
        due
    }

    /// Remove and return every queued reply regardless of its delay.
    pub fn take_all(&mut self) -> Vec<PendingReply> {
        std::mem::take(&mut self.pending)
    }

    /// Record the assistant's reply.
    pub fn reply(&mut self, text: &str) {
        self.push(Role::Assistant, text);
    }

    /// Transcript in order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of replies not yet resolved.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_commands() {
        assert_eq!(
            Command::interpret("make everything RED"),
            Command::Recolor(Swatch::Red)
        );
        assert_eq!(
            Command::interpret("fă totul roșu"),
            Command::Recolor(Swatch::Red)
        );
        assert_eq!(
            Command::interpret("albastru"),
            Command::Recolor(Swatch::Blue)
        );
        assert_eq!(Command::interpret("center all"), Command::CenterAll);
        assert_eq!(Command::interpret("goleste tot"), Command::Clear);
        assert_eq!(
            Command::interpret("light theme please"),
            Command::SetTheme(Theme::Light)
        );
        assert_eq!(
            Command::interpret("tema glass"),
            Command::SetTheme(Theme::Glass)
        );
        assert_eq!(Command::interpret("hello"), Command::Help);
    }

    #[test]
    fn test_theme_without_known_name_is_help() {
        let cmd = Command::interpret("change the theme");
        assert_eq!(cmd, Command::Help);
        assert_eq!(cmd.reply(), HELP_REPLY);
    }

    #[test]
    fn test_reply_waits_for_delay() {
        let start = Instant::now();
        let mut chat = Conversation::new();
        assert!(chat.send("center all", start));
        assert!(!chat.send("   ", start));

        assert!(chat.take_due(start).is_empty());
        assert_eq!(chat.pending_count(), 1);

        let due = chat.take_due(start + REPLY_DELAY);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].input, "center all");
        assert_eq!(chat.pending_count(), 0);
    }

    #[test]
    fn test_transcript_starts_with_greeting() {
        let mut chat = Conversation::new();
        chat.send("hi", Instant::now());
        chat.reply(HELP_REPLY);
        let roles: Vec<_> = chat.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
        assert_eq!(chat.messages()[0].text, GREETING);
    }
}
