use anchor_lang::prelude::*;

/// Seed tag for the per-owner VaultState PDA: `[STATE_SEED, owner]`.
#[constant]
pub const STATE_SEED: &[u8] = b"state";

/// Seed tag for the lamport-holding PDA: `[VAULT_SEED, vault_state]`.
#[constant]
pub const VAULT_SEED: &[u8] = b"vault";
