use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use anchor_lang::AccountSerialize;

use crate::constants::STATE_SEED;
use crate::errors::VaultError;
use crate::events::VaultInitialized;
use crate::pda;
use crate::state::VaultState;

/// Creates the owner's VaultState and funds the vault PDA to its
/// rent-exempt minimum.
///
/// The state account is allocated by hand rather than with `init` so a live
/// record surfaces as `AlreadyInitialized` and a wrong address as
/// `InvalidDerivation`, instead of generic System Program failures.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.owner.key();

    let (state_key, state_bump) = pda::state_address(&owner);
    require_keys_eq!(
        ctx.accounts.vault_state.key(),
        state_key,
        VaultError::InvalidDerivation
    );

    let (vault_key, vault_bump) = pda::vault_address(&state_key);
    require_keys_eq!(
        ctx.accounts.vault.key(),
        vault_key,
        VaultError::InvalidDerivation
    );

    require!(
        *ctx.accounts.vault_state.owner == system_program::ID
            && ctx.accounts.vault_state.data_is_empty(),
        VaultError::AlreadyInitialized
    );

    let rent = Rent::get()?;
    let bump = [state_bump];
    let seeds: &[&[u8]] = &[STATE_SEED, owner.as_ref(), &bump];
    allocate_state(ctx.accounts, &rent, &[seeds])?;

    let state = VaultState {
        owner,
        vault_bump,
        state_bump,
    };
    {
        let mut data = ctx.accounts.vault_state.try_borrow_mut_data()?;
        state.try_serialize(&mut &mut data[..])?;
    }

    // A data-less system account; the reserve is all it needs to persist.
    let reserve = rent.minimum_balance(ctx.accounts.vault.data_len());
    let shortfall = reserve.saturating_sub(ctx.accounts.vault.lamports());
    if shortfall > 0 {
        let cpi_context = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        );
        system_program::transfer(cpi_context, shortfall)?;
    }

    msg!("Vault initialized for owner: {}", owner);
    msg!("State bump: {}, vault bump: {}", state_bump, vault_bump);

    emit!(VaultInitialized {
        owner,
        vault_state: state_key,
        vault: vault_key,
        reserve,
    });

    Ok(())
}

/// Gives the state PDA `VaultState::LEN` bytes owned by this program.
///
/// Anyone can send lamports to a PDA before it exists, and `create_account`
/// refuses funded addresses, so a funded slot is topped up, allocated and
/// assigned in three steps instead.
fn allocate_state(accounts: &Initialize, rent: &Rent, signer_seeds: &[&[&[u8]]]) -> Result<()> {
    let space = VaultState::LEN;
    let required = rent.minimum_balance(space);
    let current = accounts.vault_state.lamports();

    let system_program = accounts.system_program.to_account_info();
    let owner = accounts.owner.to_account_info();
    let vault_state = accounts.vault_state.to_account_info();

    if current == 0 {
        let cpi_context = CpiContext::new_with_signer(
            system_program,
            CreateAccount {
                from: owner,
                to: vault_state,
            },
            signer_seeds,
        );
        return system_program::create_account(cpi_context, required, space as u64, &crate::ID);
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        let cpi_context = CpiContext::new(
            system_program.clone(),
            Transfer {
                from: owner,
                to: vault_state.clone(),
            },
        );
        system_program::transfer(cpi_context, top_up)?;
    }

    let cpi_context = CpiContext::new_with_signer(
        system_program.clone(),
        Allocate {
            account_to_allocate: vault_state.clone(),
        },
        signer_seeds,
    );
    system_program::allocate(cpi_context, space as u64)?;

    let cpi_context = CpiContext::new_with_signer(
        system_program,
        Assign {
            account_to_assign: vault_state,
        },
        signer_seeds,
    );
    system_program::assign(cpi_context, &crate::ID)
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for both accounts and becomes the vault owner
    #[account(mut, signer @ VaultError::Unauthorized)]
    pub owner: SystemAccount<'info>,

    /// CHECK: Must be the empty canonical `[b"state", owner]` PDA. The
    /// address and emptiness are verified in the handler before allocation.
    #[account(mut)]
    pub vault_state: UncheckedAccount<'info>,

    /// Canonical `[b"vault", vault_state]` PDA, verified in the handler
    #[account(mut)]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
