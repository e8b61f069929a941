use anchor_lang::prelude::*;

/// Per-owner record living at `[b"state", owner]`.
///
/// Holds no balance itself. The lamports sit in the system-owned vault PDA
/// at `[b"vault", vault_state]`, which only this program can sign for.
#[account]
pub struct VaultState {
    /// The owner that created the vault; every later instruction must be
    /// signed by this key.
    pub owner: Pubkey,
    /// Canonical bump of the vault PDA.
    pub vault_bump: u8,
    /// Canonical bump of this record's own PDA.
    pub state_bump: u8,
}

impl VaultState {
    pub const LEN: usize = 8 + 32 + 1 + 1; // discriminator + pubkey + u8 + u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_record_fits_allocation() {
        let state = VaultState {
            owner: Pubkey::new_unique(),
            vault_bump: 254,
            state_bump: 255,
        };

        let mut data = vec![0u8; VaultState::LEN];
        state.try_serialize(&mut &mut data[..]).unwrap();

        let decoded = VaultState::try_deserialize(&mut &data[..]).unwrap();
        assert_eq!(decoded.owner, state.owner);
        assert_eq!(decoded.vault_bump, 254);
        assert_eq!(decoded.state_bump, 255);
    }

    #[test]
    fn zeroed_data_is_not_a_vault_state() {
        let data = vec![0u8; VaultState::LEN];
        assert!(VaultState::try_deserialize(&mut &data[..]).is_err());
    }
}
