use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(new_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Identifies one conversation session with the model service.
    SessionId
);

string_id!(
    /// Identifies one message in a chat transcript.
    MessageId
);

impl MessageId {
    /// Fixed id used for the transcript's greeting message.
    pub fn welcome() -> Self {
        Self("welcome".to_string())
    }
}
