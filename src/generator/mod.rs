use crate::{
    config::CodeOptions,
    error::Result,
    generator::{pool::build_pool, random::*},
};

pub mod pool;
pub mod random;

/// Generates a verification code using the operating system's randomness.
pub fn generate(options: &CodeOptions) -> Result<String> {
    let mut source = SystemIndexSource::new();
    generate_with(options, &mut source)
}

/// Generates a code with the default options: six characters drawn from
/// digits and uppercase letters, ambiguous characters removed.
pub fn generate_default() -> Result<String> {
    generate(&CodeOptions::default())
}

/// Generates a code drawing pool indices from `source`.
///
/// Validation and pool construction complete before the first index is
/// requested, so a failing configuration never consumes randomness.
pub fn generate_with<S: IndexSource>(options: &CodeOptions, source: &mut S) -> Result<String> {
    options.validate()?;
    let pool = build_pool(options)?;

    let code: String = (0..options.length)
        .map(|_| pool[source.next_index(pool.len())])
        .collect();

    tracing::debug!(
        length = options.length,
        pool_size = pool.len(),
        "Verification code generated"
    );

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeError;

    struct SequenceSource {
        indices: Vec<usize>,
        calls: usize,
    }

    impl SequenceSource {
        fn new(indices: Vec<usize>) -> Self {
            Self { indices, calls: 0 }
        }
    }

    impl IndexSource for SequenceSource {
        fn next_index(&mut self, bound: usize) -> usize {
            let index = self.indices[self.calls % self.indices.len()] % bound;
            self.calls += 1;
            index
        }
    }

    #[test]
    fn test_default_length_is_six() {
        let code = generate_default().unwrap();
        assert_eq!(code.chars().count(), 6);
    }

    #[test]
    fn test_stub_source_picks_expected_characters() {
        let mut source = SequenceSource::new(vec![2, 0, 1, 2]);
        let code = generate_with(&CodeOptions::with_charset("ABC", 4), &mut source).unwrap();
        assert_eq!(code, "CABC");
        assert_eq!(source.calls, 4);
    }

    #[test]
    fn test_stub_source_indexes_filtered_pool() {
        let mut source = SequenceSource::new(vec![0, 7, 8, 31]);
        let code = generate_with(&CodeOptions::with_length(4), &mut source).unwrap();
        assert_eq!(code, "29AZ");
    }

    #[test]
    fn test_invalid_length_consumes_no_randomness() {
        let mut source = SequenceSource::new(vec![0]);
        let err = generate_with(&CodeOptions::with_length(0), &mut source).unwrap_err();
        assert!(matches!(err, CodeError::InvalidArgument(_)));
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn test_empty_pool_consumes_no_randomness() {
        let mut source = SequenceSource::new(vec![0]);
        let options = CodeOptions::with_charset("0O1lI", 3);
        assert_eq!(generate_with(&options, &mut source), Err(CodeError::EmptyPool));
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn test_every_character_comes_from_pool() {
        let options = CodeOptions {
            lowercase: true,
            symbols: true,
            length: 64,
            ..CodeOptions::default()
        };
        let pool = options.pool().unwrap();

        for _ in 0..20 {
            let code = generate(&options).unwrap();
            assert_eq!(code.chars().count(), 64);
            assert!(code.chars().all(|ch| pool.contains(&ch)));
        }
    }
}
