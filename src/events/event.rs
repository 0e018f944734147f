//! # Event: immutable occurrence value.
//!
//! An [`Event`] is an occurrence that happened within the process: a topic
//! name plus an opaque binary payload. Events are built with chainable
//! setters and immutable afterwards; the accessors are pure.
//!
//! The bus performs no validation on either field — empty topics and empty
//! payloads are legal. Rule-based checks belong to the
//! [`RulesValidator`](crate::RulesValidator) collaborator and run on the
//! caller's side, before publishing.

/// An occurrence propagated through the bus.
///
/// Carries the topic key used for routing and the payload bytes. Equality
/// and ordering are intentionally not defined: an event has no identity
/// beyond what it carries.
///
/// # Example
/// ```
/// use topicbus::Event;
///
/// let ev = Event::new()
///     .with_topic("org.acme.users")
///     .with_message(b"user registered".to_vec());
///
/// assert_eq!(ev.topic(), "org.acme.users");
/// assert_eq!(ev.message(), b"user registered");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Event {
    topic: String,
    message: Vec<u8>,
}

impl Event {
    /// Creates an empty event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the topic name this event is bound to.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Sets the content (aka. payload) of the event.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.message = message.into();
        self
    }

    /// The topic name this event is bound to.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Content of the event in binary format.
    pub fn message(&self) -> &[u8] {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_topic_and_message() {
        let ev = Event::new()
            .with_topic("orders")
            .with_message(b"order placed".to_vec());
        assert_eq!(ev.topic(), "orders");
        assert_eq!(ev.message(), b"order placed");
    }

    #[test]
    fn empty_fields_are_legal() {
        let ev = Event::new();
        assert_eq!(ev.topic(), "");
        assert!(ev.message().is_empty());
    }

    #[test]
    fn setters_overwrite_previous_values() {
        let ev = Event::new().with_topic("a").with_topic("b");
        assert_eq!(ev.topic(), "b");
    }
}
