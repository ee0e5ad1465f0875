use std::num::ParseIntError;

/// Parses command line words into integers, keeping their order.
pub fn parse_numbers<I, S>(words: I) -> Result<Vec<i64>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| {
            let word = word.as_ref().trim();
            word.parse::<i64>()
                .map_err(|source| InputError::InvalidInteger {
                    input: word.to_string(),
                    source,
                })
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to parse integer {input:?}: {source}")]
    InvalidInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
