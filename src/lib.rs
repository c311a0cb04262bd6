//! textprep — configurable text-normalization pipeline.
//!
//! Turns raw free-text documents (product or movie reviews) into cleaned
//! token sequences for bag-of-words or embedding models. The pipeline is an
//! ordered sequence of composable transformations: character cleanup, HTML
//! stripping, case folding, punctuation and number handling, tokenization,
//! deny-list removal, stemming, and a corpus-wide frequent-term filter.
//!
//! Typical use:
//!
//! ```
//! use textprep::{preprocess, PipelineConfig, SnowballStemmer};
//!
//! let documents = vec!["This movie was <b>great</b> - a must-see!".to_string()];
//! let config = PipelineConfig {
//!     lowercase: true,
//!     tokenize_on_punctuation: false,
//!     ..PipelineConfig::default()
//! };
//! let corpus = preprocess(&documents, config, &SnowballStemmer::english()).unwrap();
//! assert_eq!(corpus[0][0], "this");
//! ```

pub mod dashes;
pub mod error;
pub mod filters;
pub mod frequency;
pub mod html;
pub mod normalize;
pub mod pipeline;
pub mod stem;
pub mod tokenize;

/// Ordered tokens of one processed document.
pub type TokenSequence = Vec<String>;
/// One token sequence per input document, in input order.
pub type Corpus = Vec<TokenSequence>;

pub use error::ConfigError;
pub use frequency::{filter_high_frequency, FrequencyTable};
pub use normalize::{CharAction, CharacterMap, WEIRD_CHARS};
pub use pipeline::{preprocess, NumberReplacementOrder, Pipeline, PipelineConfig};
pub use stem::{IdentityStemmer, SnowballStemmer, Stem};
