use std::sync::RwLock;

use chrono::{DateTime, Utc};

use matchboard_marketplace::{ListingId, OfferRecord, WishRecord};

/// What the store held at one refresh.
#[derive(Clone, Debug, Default)]
pub struct ListingSnapshot {
    pub wishes: Vec<WishRecord>,
    pub offers: Vec<OfferRecord>,
    /// Bumped on every replace. Revision 0 is the empty pre-first-poll
    /// state.
    pub revision: u64,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// In-memory cache of the marketplace listings.
///
/// The poller replaces both collections wholesale; readers get clones and
/// never observe a half-applied refresh. There is no per-record mutation
/// on purpose: the marketplace owns the data, this process only mirrors
/// it.
#[derive(Debug, Default)]
pub struct ListingStore {
    inner: RwLock<ListingSnapshot>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh snapshot and return its revision.
    pub fn replace(&self, wishes: Vec<WishRecord>, offers: Vec<OfferRecord>) -> u64 {
        let mut inner = self.inner.write().unwrap();
        inner.wishes = wishes;
        inner.offers = offers;
        inner.revision += 1;
        inner.refreshed_at = Some(Utc::now());
        inner.revision
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        self.inner.read().unwrap().clone()
    }

    pub fn wishes(&self) -> Vec<WishRecord> {
        self.inner.read().unwrap().wishes.clone()
    }

    pub fn offers(&self) -> Vec<OfferRecord> {
        self.inner.read().unwrap().offers.clone()
    }

    pub fn find_wish(&self, id: ListingId) -> Option<WishRecord> {
        self.inner
            .read()
            .unwrap()
            .wishes
            .iter()
            .find(|wish| wish.id == id)
            .cloned()
    }

    pub fn find_offer(&self, id: ListingId) -> Option<OfferRecord> {
        self.inner
            .read()
            .unwrap()
            .offers
            .iter()
            .find(|offer| offer.id == id)
            .cloned()
    }

    pub fn revision(&self) -> u64 {
        self.inner.read().unwrap().revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_at_revision_zero() {
        let store = ListingStore::new();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.revision, 0);
        assert!(snapshot.wishes.is_empty());
        assert!(snapshot.offers.is_empty());
        assert!(snapshot.refreshed_at.is_none());
    }

    #[test]
    fn test_replace_bumps_revision_and_timestamp() {
        let store = ListingStore::new();

        let revision = store.replace(vec![WishRecord::new(1, "boots")], vec![]);
        assert_eq!(revision, 1);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.wishes.len(), 1);
        assert!(snapshot.refreshed_at.is_some());

        let revision = store.replace(vec![], vec![OfferRecord::new(2, "boots, size 44")]);
        assert_eq!(revision, 2);

        let snapshot = store.snapshot();
        assert!(snapshot.wishes.is_empty());
        assert_eq!(snapshot.offers.len(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let store = ListingStore::new();
        store.replace(
            vec![WishRecord::new(1, "boots"), WishRecord::new(2, "coat")],
            vec![OfferRecord::new(9, "winter coat")],
        );

        assert_eq!(store.find_wish(2).unwrap().title, "coat");
        assert_eq!(store.find_offer(9).unwrap().title, "winter coat");
        assert!(store.find_wish(9).is_none());
        assert!(store.find_offer(1).is_none());
    }
}
