use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::VAULT_SEED;
use crate::errors::VaultError;
use crate::events::Withdrawn;
use crate::ledger::Balances;
use crate::pda;
use crate::state::VaultState;

/// Withdraws `amount` lamports from the vault back to the owner.
///
/// Only the part of the balance above the vault's rent-exempt minimum can
/// leave; asking for more, including the full balance, fails with
/// `InsufficientFunds`. The reserve is released by `close` alone.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let reserve = Rent::get()?.minimum_balance(ctx.accounts.vault.data_len());
    let balances = Balances::new(ctx.accounts.owner.lamports(), ctx.accounts.vault.lamports());
    let after = balances.withdraw(amount, reserve)?;

    let vault_state_key = ctx.accounts.vault_state.key();
    let bump = [ctx.accounts.vault_state.vault_bump];
    let seeds: &[&[u8]] = &[VAULT_SEED, vault_state_key.as_ref(), &bump];
    let signer_seeds = &[seeds];

    let cpi_context = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.owner.to_account_info(),
        },
        signer_seeds,
    );
    system_program::transfer(cpi_context, amount)?;

    msg!("Withdrawn {} lamports. Vault balance: {}", amount, after.vault);

    emit!(Withdrawn {
        owner: ctx.accounts.owner.key(),
        vault: ctx.accounts.vault.key(),
        amount,
        vault_balance: after.vault,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, signer @ VaultError::Unauthorized)]
    pub owner: SystemAccount<'info>,

    #[account(
        has_one = owner @ VaultError::Unauthorized,
        constraint = pda::is_canonical_state(
            &vault_state.key(),
            &vault_state.owner,
            vault_state.state_bump,
        ) @ VaultError::InvalidDerivation
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        constraint = pda::is_canonical_vault(
            &vault.key(),
            &vault_state.key(),
            vault_state.vault_bump,
        ) @ VaultError::InvalidDerivation
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
