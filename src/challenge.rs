//! Challenge message the wallet is asked to sign

/// Fixed prefix of every challenge message
pub const CHALLENGE_PREFIX: &str = "Please sign this message to verify your wallet address: ";

/// Build the challenge message for an account address.
///
/// The address is appended verbatim; the verification server recomputes the
/// same string from the `wallet_address` it receives.
pub fn challenge_message(address: &str) -> String {
    format!("{}{}", CHALLENGE_PREFIX, address)
}
