use rand::{Rng, RngCore, TryRngCore, rngs::OsRng, rngs::ThreadRng};

/// Provider of uniform indices into a character pool.
pub trait IndexSource {
    /// Returns an index in `[0, bound)`. Callers never pass a zero bound.
    fn next_index(&mut self, bound: usize) -> usize;
}

fn index_from_be_bytes(bytes: [u8; 4], bound: usize) -> usize {
    u32::from_be_bytes(bytes) as usize % bound
}

/// Draws from the operating system generator, switching to the thread-local
/// generator for the rest of its lifetime if the OS source fails.
#[derive(Default)]
pub struct SystemIndexSource {
    fallback: Option<ThreadRng>,
}

impl SystemIndexSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    #[cfg(test)]
    fn fallback_only() -> Self {
        Self {
            fallback: Some(rand::rng()),
        }
    }
}

impl IndexSource for SystemIndexSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.fallback.is_none() {
            let mut bytes = [0u8; 4];
            match OsRng.try_fill_bytes(&mut bytes) {
                Ok(()) => return index_from_be_bytes(bytes, bound),
                Err(error) => {
                    tracing::warn!(
                        error = %error,
                        "OS randomness unavailable, using thread-local generator"
                    );
                }
            }
        }

        let rng = self.fallback.get_or_insert_with(rand::rng);
        let sample: f64 = rng.random();
        ((sample * bound as f64) as usize).min(bound - 1)
    }
}

/// Adapts any `rand` generator, e.g. a seeded `StdRng`, into an index source.
pub struct RngIndexSource<R>(pub R);

impl<R: RngCore> IndexSource for RngIndexSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        let mut bytes = [0u8; 4];
        self.0.fill_bytes(&mut bytes);
        index_from_be_bytes(bytes, bound)
    }
}
