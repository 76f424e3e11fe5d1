//! Keystroke gate for amount fields.

use super::amount::Decimals;

/// Whether `candidate` is a legal in-progress decimal with at most `decimals`
/// fractional digits.
///
/// The empty string is accepted so a cleared field stays typable. This does
/// not look at any balance.
pub fn accepts(candidate: &str, decimals: Decimals) -> bool {
    let mut seen_dot = false;
    let mut frac_len = 0usize;

    for c in candidate.chars() {
        match c {
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' if seen_dot => {
                frac_len += 1;
                if frac_len > decimals.digits() {
                    return false;
                }
            }
            '0'..='9' => {}
            _ => return false,
        }
    }
    true
}
