use anchor_lang::prelude::*;

declare_id!("3utcHFtdCbauU9igcHDtES2dEZ2Tdn57mbU7j166KhDY");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod state;

pub use instructions::*;
pub use state::*;

#[program]
pub mod anchor_vault {
    use super::*;

    /// Create the owner's VaultState record and fund the paired vault to
    /// its rent-exempt minimum.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Move `amount` lamports from the owner into the vault.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Move `amount` lamports back to the owner. The vault always keeps its
    /// rent-exempt reserve; only `close` may take it.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    /// Drain the vault and close the VaultState record, refunding everything
    /// to the owner.
    pub fn close(ctx: Context<Close>) -> Result<()> {
        instructions::close(ctx)
    }
}
