use soroban_sdk::String;

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::errors::VotingError;

/// Validate a proposal description: within `MAX_DESCRIPTION_LEN` bytes and
/// not made only of whitespace (any Unicode whitespace counts).
pub fn validate_description(description: &String) -> Result<(), VotingError> {
    let len = description.len();
    if len == 0 {
        return Err(VotingError::EmptyProposal);
    }
    if len > MAX_DESCRIPTION_LEN {
        return Err(VotingError::DescriptionTooLong);
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LEN as usize];
    let bytes = &mut buf[..len as usize];
    description.copy_into_slice(bytes);

    // Non UTF-8 input is not text, so it cannot be blank either.
    let blank = core::str::from_utf8(bytes)
        .map_or(false, |text| text.chars().all(char::is_whitespace));
    if blank {
        return Err(VotingError::EmptyProposal);
    }
    Ok(())
}
