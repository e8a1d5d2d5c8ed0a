//! Sensitive-field masking

/// Placeholder shown in place of balances when the hide toggle is on
pub const HIDDEN_BALANCE: &str = "••••••••";

/// Mask an account number down to its last 4 characters
///
/// Inputs of 4 characters or fewer (including the empty string) are returned
/// unchanged; anything longer becomes a fixed 4-bullet prefix plus the last 4
/// characters.
pub fn mask_account_number(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() <= 4 {
        return raw.to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("••••{}", tail)
}
