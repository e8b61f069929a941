use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Vault state already exists for this owner")]
    AlreadyInitialized,
    #[msg("Account address does not match its canonical derivation")]
    InvalidDerivation,
    #[msg("Signer is missing or is not the vault owner")]
    Unauthorized,
    #[msg("Insufficient funds for this transfer")]
    InsufficientFunds,
    #[msg("Integer overflow detected")]
    Overflow,
    #[msg("Integer underflow detected")]
    Underflow,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
}
