//! Turning a player's reply into a proposed character
//!
//! Replies are trimmed and must then hold exactly one character. Anything
//! else is rejected so the player can retry without spending a guess.

use thiserror::Error;

/// Why a reply is not a usable proposal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProposalError {
    /// Nothing but whitespace
    #[error("reply is empty")]
    Empty,
    /// More than one significant character
    #[error("reply has {0} characters")]
    TooLong(usize),
}

/// Notice shown when a reply is rejected
pub const REJECTED_NOTICE: &str = "Please enter exactly one character\n";

/// Parse one reply into a lowercase character
///
/// # Errors
/// Returns `ProposalError` if the trimmed reply is empty or longer than one
/// character.
///
/// # Examples
/// ```
/// use hangman::core::{parse_proposal, ProposalError};
///
/// assert_eq!(parse_proposal("A"), Ok('a'));
/// assert_eq!(parse_proposal(" e "), Ok('e'));
/// assert_eq!(parse_proposal("ab"), Err(ProposalError::TooLong(2)));
/// ```
pub fn parse_proposal(reply: &str) -> Result<char, ProposalError> {
    let trimmed = reply.trim();
    let mut chars = trimmed.chars();

    let Some(c) = chars.next() else {
        return Err(ProposalError::Empty);
    };

    if chars.next().is_some() {
        return Err(ProposalError::TooLong(trimmed.chars().count()));
    }

    Ok(normalize(c))
}

/// Lowercase a character, keeping the first char of multi-char mappings
fn normalize(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
