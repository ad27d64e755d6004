use oorandom::Rand64;
use std::cell::RefCell;
use std::time::{SystemTime, UNIX_EPOCH};

pub type Rng = Rand64;

thread_local! {
    static SEED_RAND: RefCell<Rand64> = RefCell::new(Rand64::new(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or(0),
    ));
}

/// Returns a generator seeded from the thread-local seeding generator
pub fn new_rng() -> Rng {
    SEED_RAND.with(|r| {
        let mut r = r.borrow_mut();
        let seed = (u128::from(r.rand_u64()) << 64) | u128::from(r.rand_u64());
        Rand64::new(seed)
    })
}

/// Returns a reproducible generator
pub fn seeded_rng(seed: u64) -> Rng {
    Rand64::new(u128::from(seed))
}
