use serde::{Deserialize, Serialize};

/// One accepted exchange: what the user typed and what we answered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub user_message: String,
    pub bot_response: String,
}

impl Turn {
    pub fn new(user_message: impl Into<String>, bot_response: impl Into<String>) -> Self {
        Turn {
            user_message: user_message.into(),
            bot_response: bot_response.into(),
        }
    }
}

impl<U: Into<String>, B: Into<String>> From<(U, B)> for Turn {
    fn from((user_message, bot_response): (U, B)) -> Self {
        Turn::new(user_message, bot_response)
    }
}

/// Append-only history of a single conversation session.
///
/// There is no way to remove or edit a single turn. A transcript only grows
/// via [`Transcript::appended`] or is thrown away as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appended(mut self, turn: Turn) -> Self {
        self.0.push(turn);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.0.last()
    }
}

impl<T: Into<Turn>> FromIterator<T> for Transcript {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Transcript(iter.into_iter().map(Into::into).collect())
    }
}
