//! Detects a freshly matched pair in a listing snapshot.
//!
//! The marketplace returns collections newest-first and embeds computed
//! matches in the records themselves, so detection is a pure read over the
//! two list heads. The wish side is authoritative: a match reported by the
//! newest wish wins over one reported by the newest offer, which matters
//! when one refresh surfaces both sides of the same pairing.

use serde::{Deserialize, Serialize};

use matchboard_marketplace::{ListingId, OfferRecord, WishRecord};

/// A detected wish/offer pairing, carrying both full records so the UI can
/// render the celebration modal without a second fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchPair {
    pub wish: WishRecord,
    pub offer: OfferRecord,
}

/// Identity of a pairing, used to deduplicate celebrations across polls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchKey(pub ListingId, pub ListingId);

impl MatchPair {
    pub fn new(wish: WishRecord, offer: OfferRecord) -> Self {
        Self { wish, offer }
    }

    pub fn key(&self) -> MatchKey {
        MatchKey(self.wish.id, self.offer.id)
    }

    /// Match score for display, preferring the wish-side score. `None` when
    /// neither record has been scored yet; the UI renders the pairing
    /// without a percentage in that case rather than inventing one.
    pub fn match_percentage(&self) -> Option<f64> {
        self.wish.match_percentage.or(self.offer.match_percentage)
    }
}

/// Inspect the newest wish and the newest offer for an embedded match and
/// return the first pairing found, wish side first.
///
/// Only the list heads are considered. The marketplace orders both
/// collections newest-first, so a match created since the previous poll is
/// visible on a head record; older matches were either celebrated already
/// or predate this process and stay quiet.
pub fn detect_new_match(wishes: &[WishRecord], offers: &[OfferRecord]) -> Option<MatchPair> {
    if let Some(wish) = wishes.first() {
        if let Some(offer) = wish.matched_offers.first() {
            return Some(MatchPair::new(wish.clone(), offer.clone()));
        }
    }

    if let Some(offer) = offers.first() {
        if let Some(wish) = offer.matched_wishes.first() {
            return Some(MatchPair::new(wish.clone(), offer.clone()));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_match_on_newest_wish() {
        let wishes = vec![
            WishRecord::new(10, "road bike").with_matched_offer(OfferRecord::new(4, "bike, barely used")),
            WishRecord::new(9, "older wish").with_matched_offer(OfferRecord::new(1, "stale match")),
        ];
        let offers = vec![OfferRecord::new(4, "bike, barely used")];

        let pair = detect_new_match(&wishes, &offers).unwrap();
        assert_eq!(pair.wish.id, 10);
        assert_eq!(pair.offer.id, 4);
        assert_eq!(pair.key(), MatchKey(10, 4));
    }

    #[test]
    fn test_detects_match_on_newest_offer_when_wish_head_is_quiet() {
        let wishes = vec![WishRecord::new(10, "road bike")];
        let offers =
            vec![OfferRecord::new(4, "bike, barely used").with_matched_wish(WishRecord::new(2, "any bike"))];

        let pair = detect_new_match(&wishes, &offers).unwrap();
        assert_eq!(pair.wish.id, 2);
        assert_eq!(pair.offer.id, 4);
    }

    #[test]
    fn test_wish_side_wins_over_offer_side() {
        let wishes =
            vec![WishRecord::new(10, "road bike").with_matched_offer(OfferRecord::new(4, "bike"))];
        let offers =
            vec![OfferRecord::new(7, "camera").with_matched_wish(WishRecord::new(3, "any camera"))];

        let pair = detect_new_match(&wishes, &offers).unwrap();
        assert_eq!(pair.key(), MatchKey(10, 4));
    }

    #[test]
    fn test_no_match_on_either_head() {
        let wishes = vec![
            WishRecord::new(10, "road bike"),
            // A match further down the list never triggers detection.
            WishRecord::new(9, "older wish").with_matched_offer(OfferRecord::new(1, "old pairing")),
        ];
        let offers = vec![OfferRecord::new(4, "bike, barely used")];

        assert!(detect_new_match(&wishes, &offers).is_none());
    }

    #[test]
    fn test_empty_collections() {
        assert!(detect_new_match(&[], &[]).is_none());
    }

    #[test]
    fn test_match_percentage_prefers_wish_side() {
        let pair = MatchPair::new(
            WishRecord::new(1, "a").with_match_percentage(91.0),
            OfferRecord::new(2, "b").with_match_percentage(40.0),
        );
        assert_eq!(pair.match_percentage(), Some(91.0));

        let pair = MatchPair::new(
            WishRecord::new(1, "a"),
            OfferRecord::new(2, "b").with_match_percentage(40.0),
        );
        assert_eq!(pair.match_percentage(), Some(40.0));

        let pair = MatchPair::new(WishRecord::new(1, "a"), OfferRecord::new(2, "b"));
        assert_eq!(pair.match_percentage(), None);
    }
}
