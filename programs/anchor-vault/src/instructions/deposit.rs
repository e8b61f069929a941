use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::VaultError;
use crate::events::Deposited;
use crate::ledger::Balances;
use crate::pda;
use crate::state::VaultState;

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let balances = Balances::new(ctx.accounts.owner.lamports(), ctx.accounts.vault.lamports());
    let after = balances.deposit(amount)?;

    let cpi_context = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.owner.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_context, amount)?;

    msg!("Deposited {} lamports. Vault balance: {}", amount, after.vault);

    emit!(Deposited {
        owner: ctx.accounts.owner.key(),
        vault: ctx.accounts.vault.key(),
        amount,
        vault_balance: after.vault,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
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
