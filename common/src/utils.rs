/// Splits user input on commas and whitespace, dropping empty pieces.
///
/// Both `"80 443"` and `"80,443"` (or any mix) yield the same tokens.
pub fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}
