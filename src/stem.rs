/// Stemming collaborator seam.
///
/// The pipeline only needs "given a token, return its stem"; anything
/// satisfying `Stem` can be injected, and implementations must be callable
/// from multiple documents at once (`Send + Sync`).
use rust_stemmers::{Algorithm, Stemmer};

/// Reduces a token to its linguistic stem.
pub trait Stem: Send + Sync {
    fn stem(&self, token: &str) -> String;
}

/// Snowball-backed stemmer, the default collaborator.
pub struct SnowballStemmer {
    inner: Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        SnowballStemmer {
            inner: Stemmer::create(algorithm),
        }
    }

    /// English (Porter2) stemmer.
    pub fn english() -> Self {
        SnowballStemmer::new(Algorithm::English)
    }
}

impl Stem for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

/// Pass-through stemmer for runs that should skip stemming.
pub struct IdentityStemmer;

impl Stem for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stemmer() {
        let stemmer = SnowballStemmer::english();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("run"), "run");
    }

    #[test]
    fn test_identity_stemmer() {
        let stemmer = IdentityStemmer;
        assert_eq!(stemmer.stem("running"), "running");
        assert_eq!(stemmer.stem(""), "");
    }

    #[test]
    fn test_trait_object() {
        let stemmer: &dyn Stem = &IdentityStemmer;
        assert_eq!(stemmer.stem("tokens"), "tokens");
    }
}
