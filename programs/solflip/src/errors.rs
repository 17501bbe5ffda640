use anchor_lang::prelude::*;

#[error_code]
pub enum SolflipError {
    #[msg("Only the house authority can perform this action.")]
    Unauthorized,
    #[msg("Config has already been initialized.")]
    AlreadyInitialized,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Wager is below the minimum threshold.")]
    WagerTooSmall,
    #[msg("Vault cannot cover the potential payout.")]
    VaultInsufficient,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
    #[msg("Player state account owner mismatch.")]
    StateOwnershipMismatch,
    #[msg("Fee basis points must be between 0 and 2500 (25%).")]
    InvalidFeeBps,
}
