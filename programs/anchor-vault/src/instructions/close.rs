use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::VAULT_SEED;
use crate::errors::VaultError;
use crate::events::VaultClosed;
use crate::ledger::Balances;
use crate::pda;
use crate::state::VaultState;

/// Drains the vault, reserve included, and closes the state record.
///
/// A system account left with zero lamports is purged by the runtime at the
/// end of the transaction. The `close = owner` constraint refunds the
/// record's rent and zeroes its data after this handler returns.
pub fn close(ctx: Context<Close>) -> Result<()> {
    let drained = ctx.accounts.vault.lamports();
    let state_rent = ctx.accounts.vault_state.to_account_info().lamports();
    let owner_balance = Balances::new(ctx.accounts.owner.lamports(), drained).close(state_rent)?;
    let refunded = drained
        .checked_add(state_rent)
        .ok_or(VaultError::Overflow)?;

    if drained > 0 {
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
        system_program::transfer(cpi_context, drained)?;
    }

    msg!("Vault closed for owner: {}", ctx.accounts.owner.key());
    msg!("Returned {} lamports. Owner balance: {}", refunded, owner_balance);

    emit!(VaultClosed {
        owner: ctx.accounts.owner.key(),
        vault_state: ctx.accounts.vault_state.key(),
        refunded,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Close<'info> {
    #[account(mut, signer @ VaultError::Unauthorized)]
    pub owner: SystemAccount<'info>,

    #[account(
        mut,
        close = owner,
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
