//! Transformer: per-character rebuild of an input string
//!
//! Walks the input in order, copying non-alphabetic characters through
//! verbatim and replacing each letter with a randomly drawn candidate
//! token from the substitution table.

use crate::table::{Filter, SubstitutionTable};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The rebuilt output had zero length.
    #[error("conversion produced no output")]
    EmptyConversion,
}

/// Transform `input`, drawing substitutions from the builtin table.
pub fn transform(input: &str, filter: Filter) -> Result<String, TransformError> {
    transform_with_rng(input, filter, &mut rand::thread_rng())
}

/// Transform with a specific RNG (for testing).
pub fn transform_with_rng<R: Rng>(
    input: &str,
    filter: Filter,
    rng: &mut R,
) -> Result<String, TransformError> {
    let table = SubstitutionTable::builtin();
    let mut output = String::new();

    for ch in input.chars() {
        if !ch.is_ascii_alphabetic() {
            output.push(ch);
            continue;
        }

        let letter = ch.to_ascii_lowercase();
        let count = table.candidate_count(letter, filter).unwrap_or(0);
        if count == 0 {
            // No candidates under this filter: keep the character, case
            // intact.
            output.push(ch);
            continue;
        }

        let index = rng.gen_range(0..count);
        // An out-of-range lookup contributes nothing rather than
        // disturbing the rest of the scan.
        if let Ok(Some(token)) = table.candidate_at(letter, filter, index) {
            output.push_str(token);
        }
    }

    if output.is_empty() {
        return Err(TransformError::EmptyConversion);
    }
    Ok(output)
}
