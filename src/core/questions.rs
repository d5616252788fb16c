//! # Question Data
//!
//! The question resource is a JSON object mapping a topic to its questions:
//!
//! ```json
//! { "math": ["2+2?"], "history": ["Year WW2 started?"] }
//! ```
//!
//! `QuestionSet` keeps topics in document order. A `HashMap` would lose it,
//! and the unshuffled rotation must follow the file.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single `(topic, question)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionEntry {
    pub topic: String,
    pub question: String,
}

impl QuestionEntry {
    pub fn new(topic: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            question: question.into(),
        }
    }

    pub fn matches(&self, topic: &str, question: &str) -> bool {
        self.topic == topic && self.question == question
    }
}

/// Ordered topic → questions mapping, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    topics: Vec<(String, Vec<String>)>,
}

impl QuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a topic. A repeated topic keeps its first position and takes
    /// the new questions, the same way a JSON object resolves duplicate keys.
    pub fn insert(&mut self, topic: impl Into<String>, questions: Vec<String>) {
        let topic = topic.into();
        match self.topics.iter_mut().find(|(name, _)| *name == topic) {
            Some((_, existing)) => *existing = questions,
            None => self.topics.push((topic, questions)),
        }
    }

    /// Append a question to an existing topic. Returns `false` if the topic is unknown.
    pub fn append(&mut self, topic: &str, question: impl Into<String>) -> bool {
        match self.topics.iter_mut().find(|(name, _)| name == topic) {
            Some((_, questions)) => {
                questions.push(question.into());
                true
            }
            None => false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|(name, _)| name.as_str())
    }

    pub fn questions(&self, topic: &str) -> Option<&[String]> {
        self.topics
            .iter()
            .find(|(name, _)| name == topic)
            .map(|(_, questions)| questions.as_slice())
    }

    pub fn contains_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|(name, _)| name == topic)
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn question_count(&self) -> usize {
        self.topics.iter().map(|(_, questions)| questions.len()).sum()
    }

    /// Flatten into entries: topics in mapping order, questions in list order.
    pub fn flatten(&self) -> Vec<QuestionEntry> {
        self.topics
            .iter()
            .flat_map(|(topic, questions)| {
                questions
                    .iter()
                    .map(move |question| QuestionEntry::new(topic.clone(), question.clone()))
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for QuestionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct QuestionSetVisitor;

        impl<'de> Visitor<'de> for QuestionSetVisitor {
            type Value = QuestionSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping topic names to arrays of questions")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = QuestionSet::new();
                while let Some((topic, questions)) = map.next_entry::<String, Vec<String>>()? {
                    set.insert(topic, questions);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(QuestionSetVisitor)
    }
}

impl Serialize for QuestionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.topics.len()))?;
        for (topic, questions) in &self.topics {
            map.serialize_entry(topic, questions)?;
        }
        map.end()
    }
}

/// How entries are ordered once, at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShufflePolicy {
    /// Keep mapping order.
    Preserve,
    /// Uniform random permutation. A fixed seed makes it reproducible.
    Shuffle { seed: Option<u64> },
}

impl Default for ShufflePolicy {
    fn default() -> Self {
        ShufflePolicy::Shuffle { seed: None }
    }
}

impl ShufflePolicy {
    pub fn arrange(&self, entries: &mut [QuestionEntry]) {
        match *self {
            ShufflePolicy::Preserve => {}
            ShufflePolicy::Shuffle { seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                entries.shuffle(&mut rng);
            }
        }
    }
}
