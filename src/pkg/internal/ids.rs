use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use rand::Rng;
use uuid::Uuid;

use crate::conf::IdStrategy;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_ID_LEN: usize = 9;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Short lowercase alphanumeric ids, the shape the board front-end expects.
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> String {
        let mut rng = rand::rng();
        (0..RANDOM_ID_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        SequentialIds {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `first` is only used by the sequential strategy; pass one past the
/// highest numeric id already in the store.
pub fn from_strategy(strategy: IdStrategy, first: u64) -> Arc<dyn IdGenerator> {
    match strategy {
        IdStrategy::Random => Arc::new(RandomIds),
        IdStrategy::Sequential => Arc::new(SequentialIds::starting_at(first)),
        IdStrategy::Uuid => Arc::new(UuidIds),
    }
}
