/// Pipeline orchestration: configuration, validation, and the fixed stage
/// order over documents.
use std::collections::HashSet;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dashes;
use crate::error::ConfigError;
use crate::filters;
use crate::frequency::{self, FrequencyTable};
use crate::html;
use crate::normalize::{self, CharacterMap, WEIRD_CHARS};
use crate::stem::Stem;
use crate::tokenize;
use crate::Corpus;

/// Relative order of number replacement and punctuation-token filtering.
///
/// A numeric token can never be punctuation-only and a valid sentinel
/// contains no punctuation, so the two orders produce the same output; the
/// choice exists to mirror either historical pipeline variant explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberReplacementOrder {
    /// Replace numeric tokens, then drop punctuation tokens (default).
    NumbersFirst,
    /// Drop punctuation tokens, then replace numeric tokens.
    PunctuationFirst,
}

/// Immutable per-run configuration. Construct once, hand to
/// [`Pipeline::new`]; never mutated during a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Fold text to lowercase before character normalization.
    pub lowercase: bool,
    /// Strip control characters as the first stage.
    pub remove_non_printable: bool,
    /// Emit punctuation as standalone tokens instead of splitting on
    /// whitespace only.
    pub tokenize_on_punctuation: bool,
    /// Drop tokens made entirely of punctuation.
    pub remove_punctuation_tokens: bool,
    /// Sentinel substituted for wholly-numeric tokens; `None` disables the
    /// stage. Must not contain punctuation or whitespace.
    pub number_replacement_token: Option<String>,
    pub number_replacement_order: NumberReplacementOrder,
    /// Remove tokens whose corpus-wide relative frequency strictly exceeds
    /// this value. Must lie in `[0.0, 1.0]`.
    pub high_frequency_threshold: Option<f64>,
    /// Exact tokens to drop before stemming.
    pub deny_list: Option<HashSet<String>>,
    /// Byte-artifact characters replaced with spaces.
    pub weird_chars: Vec<char>,
    /// Punctuation substitution map; dashes should stay deferred so dash
    /// resolution can see them.
    pub char_map: CharacterMap,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            lowercase: false,
            remove_non_printable: true,
            tokenize_on_punctuation: true,
            remove_punctuation_tokens: false,
            number_replacement_token: None,
            number_replacement_order: NumberReplacementOrder::NumbersFirst,
            high_frequency_threshold: None,
            deny_list: None,
            weird_chars: WEIRD_CHARS.to_vec(),
            char_map: CharacterMap::standard(),
        }
    }
}

impl PipelineConfig {
    /// Check the invariants that cannot be encoded in the types. Runs before
    /// any document is transformed, so an invalid configuration never
    /// produces partial output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.high_frequency_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ThresholdOutOfRange(threshold));
            }
        }
        if let Some(sentinel) = &self.number_replacement_token {
            if sentinel
                .chars()
                .any(|c| c.is_ascii_punctuation() || c.is_whitespace())
            {
                return Err(ConfigError::InvalidSentinel(sentinel.clone()));
            }
        }
        Ok(())
    }
}

/// A validated pipeline. `run` is infallible: all error conditions are
/// configuration errors caught in [`Pipeline::new`].
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Pipeline { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process every document and apply the corpus-wide frequency filter.
    ///
    /// Documents are independent, so the per-document stage runs in parallel
    /// across the rayon pool; results are collected back into input order.
    /// Output document `i` derives solely from input document `i`.
    pub fn run(&self, documents: &[String], stemmer: &dyn Stem) -> Corpus {
        if documents.is_empty() {
            return Vec::new();
        }
        debug!("processing {} documents", documents.len());

        let corpus: Corpus = documents
            .par_iter()
            .map(|doc| self.process_document(doc, stemmer))
            .collect();

        match self.config.high_frequency_threshold {
            Some(threshold) => {
                let table = FrequencyTable::from_corpus(&corpus);
                if table.total() == 0 {
                    return corpus;
                }
                let high = table.high_frequency(threshold);
                debug!(
                    "removing {} high-frequency tokens of {} distinct",
                    high.len(),
                    table.vocab_size()
                );
                frequency::remove_tokens(corpus, &high)
            }
            None => corpus,
        }
    }

    /// The fixed per-document stage order. Deviating from it changes output.
    fn process_document(&self, raw: &str, stemmer: &dyn Stem) -> Vec<String> {
        let cfg = &self.config;

        // 1. non-printable removal, 2. HTML stripping (always on)
        let mut text = if cfg.remove_non_printable {
            normalize::remove_non_printable(raw)
        } else {
            raw.to_string()
        };
        text = html::strip_html(&text);

        // 3. case folding
        if cfg.lowercase {
            text = text.to_lowercase();
        }

        // 4. character normalization (dashes deferred), 5. dash resolution
        text = normalize::clean_weird_chars(&text, &cfg.weird_chars, " ");
        text = cfg.char_map.apply(&text);
        text = dashes::resolve_dashes(&text);

        // 6. tokenization; in whitespace mode stray quotes cling to words,
        // so the token cleaner runs there
        let mut tokens = tokenize::tokenize(&text, cfg.tokenize_on_punctuation);
        if !cfg.tokenize_on_punctuation {
            tokens = tokenize::clean_tokens(tokens);
        }

        // 7. number replacement / punctuation filtering, in configured order
        let sentinel = cfg.number_replacement_token.as_deref();
        match cfg.number_replacement_order {
            NumberReplacementOrder::NumbersFirst => {
                tokens = filters::replace_numbers(tokens, sentinel);
                if cfg.remove_punctuation_tokens {
                    tokens = filters::remove_punctuation_tokens(tokens);
                }
            }
            NumberReplacementOrder::PunctuationFirst => {
                if cfg.remove_punctuation_tokens {
                    tokens = filters::remove_punctuation_tokens(tokens);
                }
                tokens = filters::replace_numbers(tokens, sentinel);
            }
        }

        // 8. deny list (pre-stem), 9. stemming
        if let Some(deny) = &cfg.deny_list {
            tokens = filters::remove_denied(tokens, deny);
        }
        tokens.iter().map(|t| stemmer.stem(t)).collect()
    }
}

/// One-call entry point: validate the configuration, run the pipeline.
///
/// An empty document list short-circuits to an empty corpus before
/// validation, so no configuration side effect is observable for it.
pub fn preprocess(
    documents: &[String],
    config: PipelineConfig,
    stemmer: &dyn Stem,
) -> Result<Corpus, ConfigError> {
    if documents.is_empty() {
        return Ok(Vec::new());
    }
    let pipeline = Pipeline::new(config)?;
    Ok(pipeline.run(documents, stemmer))
}
