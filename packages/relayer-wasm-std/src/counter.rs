use cosmwasm_std::{OverflowError, OverflowOperation, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use num_traits::{CheckedAdd, One};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A persisted, monotonically increasing number. Reads as zero until first incremented.
pub struct Counter<T: Copy + Default> {
    item: Item<T>,
}

impl<T: Copy + Default + One + CheckedAdd + Serialize + DeserializeOwned> Counter<T> {
    pub const fn new(key: &'static str) -> Self {
        Counter {
            item: Item::new(key),
        }
    }

    pub fn current(&self, storage: &dyn Storage) -> StdResult<T> {
        self.item.may_load(storage).map(Option::unwrap_or_default)
    }

    /// Increments the counter and returns the new value.
    pub fn incr(&self, storage: &mut dyn Storage) -> StdResult<T> {
        let next = self
            .current(storage)?
            .checked_add(&T::one())
            .ok_or_else(|| StdError::overflow(OverflowError::new(OverflowOperation::Add)))?;

        self.item.save(storage, &next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;

    use super::*;

    #[test]
    fn counter_starts_at_zero_and_increments() {
        let mut storage = MockStorage::new();
        let counter: Counter<u64> = Counter::new("counter");

        assert_eq!(counter.current(&storage).unwrap(), 0);
        assert_eq!(counter.incr(&mut storage).unwrap(), 1);
        assert_eq!(counter.incr(&mut storage).unwrap(), 2);
        assert_eq!(counter.current(&storage).unwrap(), 2);
    }

    #[test]
    fn counter_refuses_to_wrap() {
        let mut storage = MockStorage::new();
        let counter: Counter<u64> = Counter::new("counter");

        counter.item.save(&mut storage, &u64::MAX).unwrap();

        assert!(counter.incr(&mut storage).is_err());
        assert_eq!(counter.current(&storage).unwrap(), u64::MAX);
    }

    #[test]
    fn narrow_counters_overflow_at_their_own_bound() {
        let mut storage = MockStorage::new();
        let narrow: Counter<u8> = Counter::new("narrow");
        let wide: Counter<u64> = Counter::new("wide");

        for _ in 0..u8::MAX {
            narrow.incr(&mut storage).unwrap();
            wide.incr(&mut storage).unwrap();
        }

        assert!(narrow.incr(&mut storage).is_err());
        assert_eq!(narrow.current(&storage).unwrap(), u8::MAX);
        assert_eq!(wide.incr(&mut storage).unwrap(), 256);
    }
}
