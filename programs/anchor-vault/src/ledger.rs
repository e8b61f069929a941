//! Lamport accounting for one owner and their vault.
//!
//! Instructions snapshot the two balances, ask this module whether a move is
//! allowed and what it leaves behind, and only then issue the System Program
//! transfer. Keeping the rules free of account handles lets the floor and
//! conservation rules be checked without a runtime.

use crate::errors::VaultError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balances {
    /// Owner's system account.
    pub owner: u64,
    /// The vault PDA, reserve included.
    pub vault: u64,
}

impl Balances {
    pub fn new(owner: u64, vault: u64) -> Self {
        Self { owner, vault }
    }

    /// Owner to vault. The owner must hold the whole amount.
    pub fn deposit(self, amount: u64) -> Result<Self, VaultError> {
        if amount == 0 {
            return Err(VaultError::InvalidAmount);
        }
        if amount > self.owner {
            return Err(VaultError::InsufficientFunds);
        }

        Ok(Self {
            owner: self.owner.checked_sub(amount).ok_or(VaultError::Underflow)?,
            vault: self.vault.checked_add(amount).ok_or(VaultError::Overflow)?,
        })
    }

    /// Vault to owner. `reserve` is the vault's rent-exempt minimum and is
    /// never available while the vault stays open.
    pub fn withdraw(self, amount: u64, reserve: u64) -> Result<Self, VaultError> {
        if amount == 0 {
            return Err(VaultError::InvalidAmount);
        }
        if amount > available(self.vault, reserve) {
            return Err(VaultError::InsufficientFunds);
        }

        Ok(Self {
            owner: self.owner.checked_add(amount).ok_or(VaultError::Overflow)?,
            vault: self.vault.checked_sub(amount).ok_or(VaultError::Underflow)?,
        })
    }

    /// Full drain. Returns the owner's balance once the vault and the
    /// state record (worth `state_rent`) have both been refunded.
    pub fn close(self, state_rent: u64) -> Result<u64, VaultError> {
        self.owner
            .checked_add(self.vault)
            .and_then(|owner| owner.checked_add(state_rent))
            .ok_or(VaultError::Overflow)
    }
}

/// Lamports that can leave the vault without touching the reserve.
pub fn available(vault: u64, reserve: u64) -> u64 {
    vault.saturating_sub(reserve)
}
