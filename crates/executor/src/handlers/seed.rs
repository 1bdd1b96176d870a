//! InitMarbles handler: writes the fixed seed set.

use marbles_core::Marble;
use tracing::debug;

use super::{marble, Context};
use crate::{Output, Result};

/// Key prefix for seeded marbles; the index is appended (`MARBLE0`..`MARBLE9`).
pub const SEED_KEY_PREFIX: &str = "MARBLE";

/// `(color, size, owner)` for each seeded marble, in key order.
///
/// The trailing space on the last three owners is part of the seed data.
pub const SEED_MARBLES: [(&str, i64, &str); 10] = [
    ("blue", 20, "Tom"),
    ("yellow", 10, "Tom"),
    ("red", 22, "Tom"),
    ("blue", 21, "Tom"),
    ("red", 13, "Tom"),
    ("yellow", 34, "Tom"),
    ("blue", 25, "Matthew"),
    ("red", 9, "Matthew "),
    ("blue", 16, "Matthew "),
    ("blue", 13, "Matthew "),
];

/// Ledger key of the `index`th seeded marble.
pub fn seed_key(index: usize) -> String {
    format!("{}{}", SEED_KEY_PREFIX, index)
}

/// The seed set as `(key, marble)` pairs.
pub fn seed_marbles() -> impl Iterator<Item = (String, Marble)> {
    SEED_MARBLES
        .iter()
        .enumerate()
        .map(|(i, (color, size, owner))| (seed_key(i), Marble::new(*color, *size, *owner)))
}

/// Handle InitMarbles: overwrite `MARBLE0`..`MARBLE9` with the seed set.
///
/// Idempotent. A store failure part way through leaves the earlier keys
/// written; the host's transaction boundary decides whether they stick.
pub fn init_marbles(ctx: &Context) -> Result<Output> {
    for (key, m) in seed_marbles() {
        marble::add_marble(ctx, &key, &m.color, m.size, &m.owner)?;
        debug!(key = %key, color = %m.color, size = m.size, owner = %m.owner, "seeded marble");
    }
    Ok(Output::Unit)
}

/// `initMarbles` (arguments ignored)
pub fn init_marbles_args(ctx: &Context, _args: &[&str]) -> Result<Output> {
    init_marbles(ctx)
}
