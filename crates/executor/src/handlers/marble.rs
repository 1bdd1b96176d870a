//! Marble command handlers: read, addMarble, changeOwner, delete.

use marbles_core::Marble;
use tracing::debug;

use super::{expect_args, parse_size, Context};
use crate::{Error, Output, Result};

// =============================================================================
// Typed handlers
// =============================================================================

/// Handle Read: raw stored bytes, or `None` if the key was never written.
///
/// No decoding happens here; the payload is exactly what the store holds.
pub fn read(ctx: &Context, key: &str) -> Result<Output> {
    Ok(Output::Maybe(ctx.store.get(key)?))
}

/// Handle AddMarble: unconditional write, last writer wins.
pub fn add_marble(ctx: &Context, key: &str, color: &str, size: i64, owner: &str) -> Result<Output> {
    let marble = Marble::new(color, size, owner);
    let bytes = encode(ctx, &marble)?;
    ctx.store.put(key, bytes)?;
    Ok(Output::Unit)
}

/// Handle ChangeOwner: read, decode, swap the owner, write back.
///
/// With `compare_and_swap` on and a store that hands out versions, the
/// write only lands if nobody wrote the key in between; otherwise this
/// fails with [`Error::Conflict`]. Without versions the write is
/// unconditional and a concurrent writer may be overwritten.
pub fn change_owner(ctx: &Context, key: &str, owner: &str) -> Result<Output> {
    let stored = ctx
        .store
        .get_versioned(key)?
        .ok_or_else(|| Error::NotFound {
            key: key.to_string(),
        })?;

    let marble = ctx
        .codec
        .decode(&stored.value)
        .map_err(|source| Error::Decode {
            key: key.to_string(),
            source,
        })?
        .with_owner(owner);
    let bytes = encode(ctx, &marble)?;

    match stored.version {
        Some(version) if ctx.compare_and_swap => {
            if !ctx.store.put_if_version(key, bytes, version)? {
                debug!(key, version, "changeOwner lost race");
                return Err(Error::Conflict {
                    key: key.to_string(),
                });
            }
        }
        _ => ctx.store.put(key, bytes)?,
    }
    Ok(Output::Unit)
}

/// Handle Delete. Deleting an absent key succeeds.
pub fn delete(ctx: &Context, key: &str) -> Result<Output> {
    ctx.store.delete(key)?;
    Ok(Output::Unit)
}

fn encode(ctx: &Context, marble: &Marble) -> Result<Vec<u8>> {
    ctx.codec.encode(marble).map_err(|e| Error::Internal {
        reason: format!("marble encoding failed: {}", e),
    })
}

// =============================================================================
// String-argument adapters
// =============================================================================

/// `read <key>`
pub fn read_args(ctx: &Context, args: &[&str]) -> Result<Output> {
    let [key] = expect_args::<1>("read", args)?;
    read(ctx, key)
}

/// `addMarble <key> <color> <size> <owner>`
pub fn add_marble_args(ctx: &Context, args: &[&str]) -> Result<Output> {
    let [key, color, size, owner] = expect_args::<4>("addMarble", args)?;
    let size = parse_size("addMarble", size)?;
    add_marble(ctx, key, color, size, owner)
}

/// `changeOwner <key> <owner>`
pub fn change_owner_args(ctx: &Context, args: &[&str]) -> Result<Output> {
    let [key, owner] = expect_args::<2>("changeOwner", args)?;
    change_owner(ctx, key, owner)
}

/// `delete <key>`
pub fn delete_args(ctx: &Context, args: &[&str]) -> Result<Output> {
    let [key] = expect_args::<1>("delete", args)?;
    delete(ctx, key)
}
