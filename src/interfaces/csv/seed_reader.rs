use crate::domain::account::SeedEntry;
use crate::error::{AtmError, Result};
use std::io::Read;

/// Reads ledger seed entries (`name,id,balance`) from a CSV source.
///
/// Whitespace around fields is trimmed. Unlike a transaction feed, a seed is
/// all-or-nothing: the first malformed row fails the whole read.
pub struct SeedReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SeedReader<R> {
    /// Creates a new `SeedReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Deserializes every row of the source.
    pub fn entries(self) -> Result<Vec<SeedEntry>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AtmError::from))
            .collect()
    }
}
