pub mod celebrated;
pub mod detector;

pub use celebrated::CelebratedMatches;
pub use detector::{detect_new_match, MatchKey, MatchPair};
