//! Address derivation for the two vault accounts.
//!
//! Both addresses are pure functions of a seed tag, a parent key and the
//! program id, so any client that knows the owner can rebuild them.

use anchor_lang::prelude::*;

use crate::constants::{STATE_SEED, VAULT_SEED};

/// Canonical VaultState address and bump for `owner`.
pub fn state_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED, owner.as_ref()], &crate::ID)
}

/// Canonical vault address and bump for a VaultState address.
pub fn vault_address(vault_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, vault_state.as_ref()], &crate::ID)
}

/// Re-derives the VaultState address from the stored bump instead of
/// searching again.
pub fn is_canonical_state(key: &Pubkey, owner: &Pubkey, bump: u8) -> bool {
    matches_program_address(key, &[STATE_SEED, owner.as_ref(), &[bump]])
}

pub fn is_canonical_vault(key: &Pubkey, vault_state: &Pubkey, bump: u8) -> bool {
    matches_program_address(key, &[VAULT_SEED, vault_state.as_ref(), &[bump]])
}

fn matches_program_address(key: &Pubkey, seeds: &[&[u8]]) -> bool {
    Pubkey::create_program_address(seeds, &crate::ID)
        .map(|derived| derived == *key)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let owner = Pubkey::new_unique();

        let (state, state_bump) = state_address(&owner);
        assert_eq!(state_address(&owner), (state, state_bump));

        let (vault, vault_bump) = vault_address(&state);
        assert_eq!(vault_address(&state), (vault, vault_bump));
    }

    #[test]
    fn owners_get_distinct_accounts() {
        let (alice_state, _) = state_address(&Pubkey::new_unique());
        let (bob_state, _) = state_address(&Pubkey::new_unique());
        assert_ne!(alice_state, bob_state);

        let (alice_vault, _) = vault_address(&alice_state);
        let (bob_vault, _) = vault_address(&bob_state);
        assert_ne!(alice_vault, bob_vault);
        assert_ne!(alice_vault, alice_state);
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let (state, _) = state_address(&Pubkey::new_unique());
        let (vault, _) = vault_address(&state);
        assert!(!state.is_on_curve());
        assert!(!vault.is_on_curve());
    }

    #[test]
    fn stored_bump_reproduces_address() {
        let owner = Pubkey::new_unique();
        let (state, state_bump) = state_address(&owner);
        let (vault, vault_bump) = vault_address(&state);

        assert!(is_canonical_state(&state, &owner, state_bump));
        assert!(is_canonical_vault(&vault, &state, vault_bump));
    }

    #[test]
    fn rejects_foreign_addresses() {
        let owner = Pubkey::new_unique();
        let (state, state_bump) = state_address(&owner);
        let (vault, vault_bump) = vault_address(&state);

        // vault seeded from the owner rather than the state record
        let (wrong_vault, _) = vault_address(&owner);
        assert!(!is_canonical_vault(&wrong_vault, &state, vault_bump));

        // swapped tags
        assert!(!is_canonical_state(&vault, &owner, state_bump));
        assert!(!is_canonical_vault(&state, &state, vault_bump));

        // someone else's record
        let stranger = Pubkey::new_unique();
        assert!(!is_canonical_state(&state, &stranger, state_bump));
    }

    #[test]
    fn rejects_non_canonical_bump() {
        let owner = Pubkey::new_unique();
        let (state, state_bump) = state_address(&owner);

        for bump in (0..state_bump).rev().take(8) {
            assert!(!is_canonical_state(&state, &owner, bump));
        }
    }
}
