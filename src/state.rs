//! Textual engine state.
//!
//! The state is written as whitespace-separated decimal tokens:
//!
//! ```text
//! k0 .. k{key_size-1}  c0 .. c{counter_size-1}  cursor
//! ```
//!
//! The encrypted block is not stored; it is recomputed on load, so a
//! restored engine is immediately ready to produce samples.

use std::fmt;

use crate::config::{ThreefryConfig, MAX_COUNTER_WORDS, MAX_KEY_WORDS};
use crate::engine::Threefry;
use crate::error::ThreefryError;

impl fmt::Display for Threefry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.key().iter().chain(self.counter()) {
            write!(f, "{} ", word)?;
        }
        write!(f, "{}", self.cursor())
    }
}

impl Threefry {
    /// Creates an engine from a textual state.
    ///
    /// # Errors
    /// Returns [`ThreefryError::MalformedState`] if `text` does not hold
    /// exactly `key_size + counter_size + 1` valid tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use threefry::{Threefry, ThreefryConfig};
    ///
    /// let config = ThreefryConfig::new(64, 13, 4, 4).unwrap();
    /// let mut rng = Threefry::from_state(config, "0 0 0 0 0 0 0 0 0").unwrap();
    /// assert_eq!(rng.next_sample(), 0x4071fabee1dc8e05);
    /// ```
    pub fn from_state(config: ThreefryConfig, text: &str) -> Result<Self, ThreefryError> {
        let mut engine = Threefry::new(config);
        engine.deserialize(text)?;
        Ok(engine)
    }

    /// Replaces key, counter and cursor with the values in `text`.
    ///
    /// # Errors
    /// Returns [`ThreefryError::MalformedState`] on a wrong token count, a
    /// token that is not a `u64`, or a cursor past the end of the block.
    /// The engine is left untouched on error.
    pub fn deserialize(&mut self, text: &str) -> Result<(), ThreefryError> {
        let key_size = self.config().key_size();
        let counter_size = self.config().counter_size();

        let mut tokens = text.split_whitespace();
        let mut key = [0u64; MAX_KEY_WORDS];
        for slot in key[..key_size].iter_mut() {
            *slot = parse_token(tokens.next())?;
        }
        let mut counter = [0u64; MAX_COUNTER_WORDS];
        for slot in counter[..counter_size].iter_mut() {
            *slot = parse_token(tokens.next())?;
        }
        let cursor = parse_token(tokens.next())?;
        if tokens.next().is_some() {
            return Err(ThreefryError::MalformedState);
        }
        let cursor = usize::try_from(cursor).map_err(|_| ThreefryError::MalformedState)?;
        if cursor > self.samples_per_block() {
            return Err(ThreefryError::MalformedState);
        }

        self.restore(&key[..key_size], &counter[..counter_size], cursor);
        Ok(())
    }
}

fn parse_token(token: Option<&str>) -> Result<u64, ThreefryError> {
    token
        .ok_or(ThreefryError::MalformedState)?
        .parse()
        .map_err(|_| ThreefryError::MalformedState)
}
