use crate::text::{PhoneticEncoder, Title};

use super::error::EngineError;

/// Ordered, immutable set of existing titles.
///
/// A title's position is its slot: the candidate index returns slots and they are resolved
/// back through [`Corpus::get`].
#[derive(Debug, Clone)]
pub struct Corpus {
    titles: Vec<Title>,
}

impl Corpus {
    /// Parses every raw title in order. Fails on an empty input.
    pub fn new<I, S>(raw_titles: I, encoder: &PhoneticEncoder) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<Title> = raw_titles
            .into_iter()
            .map(|raw| Title::parse(raw, encoder))
            .collect();

        if titles.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }

        Ok(Self { titles })
    }

    pub fn get(&self, slot: usize) -> Option<&Title> {
        self.titles.get(slot)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Always `false` for a constructed corpus.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Title> {
        self.titles.iter()
    }

    /// Normalized text of every title, in slot order.
    pub fn normalized(&self) -> Vec<&str> {
        self.titles.iter().map(Title::normalized).collect()
    }
}
