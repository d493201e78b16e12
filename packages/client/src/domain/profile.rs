//! Session identity chosen at login.

use rand::seq::IndexedRandom;
use uuid::Uuid;

use crate::error::ClientError;

/// Colors a user can be assigned
pub const PALETTE: [&str; 6] = [
    "cadetblue",
    "darkgoldenrod",
    "cornflowerblue",
    "darkkhaki",
    "hotpink",
    "gold",
];

/// Pick a palette color uniformly at random.
pub fn random_color() -> &'static str {
    PALETTE.choose(&mut rand::rng()).copied().unwrap_or(PALETTE[0])
}

pub fn is_palette_color(color: &str) -> bool {
    PALETTE.contains(&color)
}

/// The local user for one session.
///
/// `id` is an opaque token that is stable for the session and compared by
/// value against the `senderId` of received messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl UserProfile {
    /// Log in with a fresh id and a random palette color.
    pub fn login(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color: random_color().to_string(),
        }
    }

    /// Log in with a fresh id and a chosen palette color.
    pub fn login_with_color(
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let color = color.into();
        if !is_palette_color(&color) {
            return Err(ClientError::UnknownColor(color, PALETTE.join(", ")));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color,
        })
    }
}
