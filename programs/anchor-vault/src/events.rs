use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub owner: Pubkey,
    pub vault_state: Pubkey,
    pub vault: Pubkey,
    pub reserve: u64,
}

#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct VaultClosed {
    pub owner: Pubkey,
    pub vault_state: Pubkey,
    /// Lamports returned to the owner: vault balance plus the record's rent.
    pub refunded: u64,
}
