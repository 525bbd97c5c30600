use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the simulated send keeps the form busy.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} is not a valid email address")]
    InvalidEmail(String),
    #[error("A message is already being sent")]
    Busy,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ];
        if let Some((label, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::Missing(*label));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Where submitted messages go. Returns how long the form should show its
/// sending state.
pub trait Outbox: Send + Sync {
    fn dispatch(&self, message: ContactMessage) -> Result<Duration, ContactError>;
}

/// Accepts any valid message, waits a fixed time and throws it away. No
/// network endpoint exists for the form yet.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedOutbox {
    pub latency: Duration,
}

impl Default for SimulatedOutbox {
    fn default() -> Self {
        Self {
            latency: SIMULATED_LATENCY,
        }
    }
}

impl Outbox for SimulatedOutbox {
    fn dispatch(&self, message: ContactMessage) -> Result<Duration, ContactError> {
        message.validate()?;
        log::debug!("discarding contact message from {}", message.email);
        Ok(self.latency)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

impl SubmitState {
    /// Starts a submission through `outbox`, returning the send delay.
    pub fn begin(
        &mut self,
        outbox: &dyn Outbox,
        message: ContactMessage,
    ) -> Result<Duration, ContactError> {
        if *self == SubmitState::Sending {
            return Err(ContactError::Busy);
        }
        let delay = outbox.dispatch(message)?;
        *self = SubmitState::Sending;
        Ok(delay)
    }

    pub fn finish(&mut self) {
        *self = SubmitState::Idle;
    }

    pub fn is_sending(self) -> bool {
        self == SubmitState::Sending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project discussion".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields() {
        let msg = ContactMessage {
            subject: "   ".to_string(),
            ..filled()
        };
        assert_eq!(msg.validate(), Err(ContactError::Missing("Subject")));
        assert_eq!(
            ContactMessage::default().validate(),
            Err(ContactError::Missing("Name"))
        );
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a b@example.com", "a@b@c.com", "ada@.com"] {
            let msg = ContactMessage {
                email: bad.to_string(),
                ..filled()
            };
            assert!(
                matches!(msg.validate(), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
        for good in ["a@b.co", "first.last@mail.example.org"] {
            assert!(looks_like_email(good), "{good} should be accepted");
        }
    }

    #[test]
    fn test_simulated_outbox_latency() {
        let outbox = SimulatedOutbox::default();
        assert_eq!(outbox.dispatch(filled()), Ok(Duration::from_millis(1500)));
        assert!(outbox.dispatch(ContactMessage::default()).is_err());
    }

    #[test]
    fn test_submit_state_cycle() {
        let outbox = SimulatedOutbox::default();
        let mut state = SubmitState::default();
        assert_eq!(state.begin(&outbox, filled()), Ok(SIMULATED_LATENCY));
        assert!(state.is_sending());
        assert_eq!(state.begin(&outbox, filled()), Err(ContactError::Busy));
        state.finish();
        assert!(!state.is_sending());
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut state = SubmitState::default();
        assert!(state
            .begin(&SimulatedOutbox::default(), ContactMessage::default())
            .is_err());
        assert_eq!(state, SubmitState::Idle);
    }
}
