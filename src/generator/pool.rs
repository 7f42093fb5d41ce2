use crate::{
    config::CodeOptions,
    error::{CodeError, Result},
};

pub const DIGITS: &str = "0123456789";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

/// Characters easily confused with one another when read by a person.
pub const AMBIGUOUS: &str = "0O1lI|`o";

pub fn is_ambiguous(ch: char) -> bool {
    AMBIGUOUS.contains(ch)
}

/// Builds the sampling pool for `options`.
///
/// A non-empty charset wins over the toggles. Ambiguous characters are
/// filtered afterwards regardless of where the pool came from, so an
/// override made only of ambiguous characters is rejected as empty.
pub fn build_pool(options: &CodeOptions) -> Result<Vec<char>> {
    let mut pool: Vec<char> = match options.custom_charset() {
        Some(charset) => charset.chars().collect(),
        None => [
            (options.digits, DIGITS),
            (options.lowercase, LOWERCASE),
            (options.uppercase, UPPERCASE),
            (options.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, class)| class.chars())
        .collect(),
    };

    if pool.is_empty() {
        return Err(CodeError::EmptyPool);
    }

    if options.avoid_ambiguous {
        pool.retain(|ch| !is_ambiguous(*ch));

        if pool.is_empty() {
            return Err(CodeError::EmptyPool);
        }
    }

    Ok(pool)
}

impl CodeOptions {
    pub fn pool(&self) -> Result<Vec<char>> {
        build_pool(self)
    }
}
