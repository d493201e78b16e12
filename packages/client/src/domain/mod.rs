//! Client-side domain state.

mod echo;
mod gesture;
mod profile;
mod reply;

pub use echo::{LocalEchoSuppressor, LocalIdGenerator};
pub use gesture::{SWIPE_MAX_OFFSET_PX, SWIPE_TRIGGER_PX, SwipeGesture};
pub use profile::{PALETTE, UserProfile, is_palette_color, random_color};
pub use reply::{ReplyCorrelator, ReplyReference, ReplyState};
