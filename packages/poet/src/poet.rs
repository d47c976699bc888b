//! AffinityPoet: builds a word affinity graph from a corpus and uses it to
//! slip bridge words into a phrase.
//!
//! The affinity graph has one vertex per corpus word and an edge `w1 -> w2`
//! whose weight counts how often `w2` directly follows `w1`. A bridge word
//! between `w1` and `w2` is any `b` with edges `w1 -> b` and `b -> w2`.

use std::cmp::Reverse;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use wdgraph::{AdjacencyMap, MutableStorage, WeightedDirectedGraph};

use crate::error::PoetError;
use crate::tokenize::{closing_punctuation, corpus_words, phrase_words};

pub type AffinityGraph<S = AdjacencyMap<String, u32>> = WeightedDirectedGraph<String, u32, S>;

#[derive(Clone, Debug)]
pub struct AffinityPoet<S = AdjacencyMap<String, u32>>
where
    S: MutableStorage<Label = String, Weight = u32>,
{
    graph: AffinityGraph<S>,
}

impl<S> AffinityPoet<S>
where
    S: MutableStorage<Label = String, Weight = u32>,
{
    /// Builds the affinity graph from already tokenized, lower-case words.
    pub fn from_words<I, T>(words: I) -> Result<Self, PoetError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut graph = AffinityGraph::<S>::new();
        let mut previous: Option<String> = None;

        for word in words {
            let word: String = word.into();
            if word.is_empty() {
                continue;
            }
            graph.add(word.clone());
            if let Some(prev) = previous.take() {
                let count = graph.set(prev.clone(), word.clone(), 1)?;
                if count > 0 {
                    graph.set(prev, word.clone(), count + 1)?;
                }
            }
            previous = Some(word);
        }

        debug!(
            vertices = graph.order(),
            edges = graph.size(),
            "built affinity graph"
        );
        Ok(Self { graph })
    }

    /// Reads the whole corpus from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, PoetError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_words(corpus_words(&text))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PoetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PoetError::Corpus {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(?path, bytes = text.len(), "read corpus");
        Self::from_words(corpus_words(&text))
    }

    pub fn graph(&self) -> &AffinityGraph<S> {
        &self.graph
    }

    fn candidates(&self, word1: &str, word2: &str) -> Vec<(String, u32)> {
        let incoming = self.graph.sources(&word2.to_owned());
        self.graph
            .targets(&word1.to_owned())
            .into_iter()
            .filter(|(bridge, _)| incoming.contains_key(bridge))
            .collect()
    }

    /// True when some word follows `word1` and precedes `word2` in the corpus.
    pub fn bridge_available(&self, word1: &str, word2: &str) -> bool {
        !self.candidates(word1, word2).is_empty()
    }

    /// The bridge with the heaviest `word1 -> bridge` edge. Ties go to the
    /// alphabetically smallest bridge.
    pub fn bridge_word(&self, word1: &str, word2: &str) -> Option<String> {
        self.candidates(word1, word2)
            .into_iter()
            .min_by_key(|(bridge, weight)| (Reverse(*weight), bridge.clone()))
            .map(|(bridge, _)| bridge)
    }

    /// Rewrites `input`, inserting a lower-case bridge word between every
    /// adjacent pair of words that has one.
    pub fn poem(&self, input: &str) -> String {
        let words = phrase_words(input);
        let Some((last, _)) = words.split_last() else {
            return String::new();
        };

        let mut poem = Vec::with_capacity(words.len() * 2);
        for pair in words.windows(2) {
            poem.push(pair[0].to_string());
            let bridge =
                self.bridge_word(&pair[0].to_ascii_lowercase(), &pair[1].to_ascii_lowercase());
            debug!(from = pair[0], to = pair[1], ?bridge, "bridge lookup");
            if let Some(bridge) = bridge {
                poem.push(bridge);
            }
        }
        poem.push(last.to_string());

        let mut poem = poem.join(" ");
        poem.push_str(&closing_punctuation(input));
        poem
    }
}

impl<S> fmt::Display for AffinityPoet<S>
where
    S: MutableStorage<Label = String, Weight = u32>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}
