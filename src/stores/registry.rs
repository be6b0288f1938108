use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::accounts::{Account, AccountId};
use crate::Error;

/// Authoritative id → account mapping.
///
/// The map lock only guards the structure of the map and is never held while
/// an account's balance lock is taken. Callers get an `Arc<Account>` and
/// release the map lock before touching the balance, so lock order is always
/// registry first, then a single account.
#[derive(Debug, Default)]
pub struct Registry {
    accounts: RwLock<HashMap<AccountId, Arc<Account>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a new zero-balance account.
    /// Returns an error if the id is taken; the existing account is left untouched.
    pub fn create(&self, id: AccountId) -> Result<Arc<Account>, Error> {
        let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);
        match accounts.entry(id) {
            Entry::Occupied(_) => Err(Error::AlreadyExists),
            Entry::Vacant(slot) => Ok(Arc::clone(slot.insert(Arc::new(Account::new(id))))),
        }
    }

    /// Gets the account handle for `id`, or returns an error if it doesn't exist.
    pub fn lookup(&self, id: AccountId) -> Result<Arc<Account>, Error> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(Error::AccountNotFound)
    }

    /// Handles to every account, in no particular order.
    pub fn accounts(&self) -> Vec<Arc<Account>> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(matches!(registry.lookup(1), Err(Error::AccountNotFound)));
    }

    #[test]
    fn test_create_and_lookup() {
        let registry = Registry::new();
        let created = registry.create(1).unwrap();
        assert_eq!(created.id(), 1);
        assert_eq!(created.balance(), Decimal::ZERO);

        let found = registry.lookup(1).unwrap();
        assert!(Arc::ptr_eq(&created, &found));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_never_created() {
        let registry = Registry::new();
        registry.create(1).unwrap();
        assert!(matches!(registry.lookup(999), Err(Error::AccountNotFound)));
    }

    #[test]
    fn test_duplicate_create_keeps_original() {
        let registry = Registry::new();
        registry.create(5).unwrap().deposit(dec!(40)).unwrap();

        assert!(matches!(registry.create(5), Err(Error::AlreadyExists)));

        // Same account object, balance intact
        assert_eq!(registry.lookup(5).unwrap().balance(), dec!(40));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_handles_share_balance() {
        let registry = Registry::new();
        registry.create(1).unwrap();
        registry.lookup(1).unwrap().deposit(dec!(10)).unwrap();
        registry.lookup(1).unwrap().withdraw(dec!(4)).unwrap();
        assert_eq!(registry.lookup(1).unwrap().balance(), dec!(6));
    }

    #[test]
    fn test_concurrent_create_same_id_exactly_one_wins() {
        const RACERS: usize = 32;
        let registry = Registry::new();
        let barrier = Barrier::new(RACERS);

        let results: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..RACERS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        registry.create(5)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|r| matches!(r, Err(Error::AlreadyExists)))
                .count(),
            RACERS - 1
        );
        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&registry.lookup(5).unwrap(), winners[0]));
    }

    #[test]
    fn test_concurrent_create_distinct_ids() {
        let registry = Registry::new();

        thread::scope(|s| {
            for id in 0..100 {
                let registry = &registry;
                s.spawn(move || registry.create(id).unwrap());
            }
        });

        assert_eq!(registry.len(), 100);
        for id in 0..100 {
            assert_eq!(registry.lookup(id).unwrap().id(), id);
        }
    }

    #[test]
    fn test_concurrent_deposits_through_lookup() {
        let registry = Registry::new();
        registry.create(2).unwrap();

        thread::scope(|s| {
            for _ in 0..100 {
                s.spawn(|| registry.lookup(2).unwrap().deposit(dec!(1)).unwrap());
            }
        });

        assert_eq!(registry.lookup(2).unwrap().balance(), dec!(100));
    }
}
