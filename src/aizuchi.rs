use aizuchi_model::{Transcript, Turn};
use log::debug;
use serde::Serialize;

use response_selector::ResponseSelector;

pub mod config;
pub mod response_selector;
pub(crate) mod store;

/// Result of a submission: the new input field value and the new history.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOutcome {
    pub pending: String,
    pub transcript: Transcript,
}

/// Turn-taking rule of a conversation.
///
/// Holds no conversation state itself: every call receives the session's
/// transcript and hands back the next one, so one instance serves any number
/// of sessions.
#[derive(Clone, Debug, Default)]
pub struct Aizuchi {
    selector: ResponseSelector,
}

impl Aizuchi {
    pub fn new(selector: ResponseSelector) -> Self {
        Aizuchi { selector }
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }

    /// Whitespace-only messages are dropped without consulting the selector.
    /// In both cases the input field is cleared.
    pub fn submit(&self, message: &str, transcript: Transcript) -> TurnOutcome {
        if is_blank(message) {
            debug!("Ignoring blank message");
            return TurnOutcome {
                pending: String::new(),
                transcript,
            };
        }
        let response = self.selector.pick(message);
        debug!("{message:?} -> {response:?}");
        TurnOutcome {
            pending: String::new(),
            transcript: transcript.appended(Turn::new(message, response)),
        }
    }

    pub fn clear(&self) -> Transcript {
        debug!("Clearing transcript");
        Transcript::new()
    }
}

/// Unicode whitespace plus the ASCII information separators (U+001C..U+001F).
fn is_blank(message: &str) -> bool {
    message
        .chars()
        .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}
