//! Ordered question/answer collections shared by the flashcard screens.

use serde::{Deserialize, Serialize};

/// One flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCard {
    pub key: String,
    pub question: String,
    pub answer: String,
}

/// Read-only, indexable card collection. Contents never change after load.
pub trait CardDeck {
    fn title(&self) -> &str;
    fn len(&self) -> usize;
    fn card(&self, index: usize) -> Option<&DeckCard>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cards(&self) -> DeckIter<'_, Self>
    where
        Self: Sized,
    {
        DeckIter {
            deck: self,
            next: 0,
        }
    }
}

pub struct DeckIter<'a, D: CardDeck> {
    deck: &'a D,
    next: usize,
}

impl<'a, D: CardDeck> Iterator for DeckIter<'a, D> {
    type Item = &'a DeckCard;

    fn next(&mut self) -> Option<Self::Item> {
        let card = self.deck.card(self.next)?;
        self.next += 1;
        Some(card)
    }
}

/// Raw dataset entry as stored in JSON (`{"q": ..., "a": ...}`).
#[derive(Debug, Clone, Deserialize)]
struct RawQuestion {
    #[serde(alias = "question")]
    q: String,
    #[serde(alias = "answer")]
    a: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawDataset {
    title: String,
    #[serde(default)]
    questions: Vec<RawQuestion>,
}

/// Title used when the question dataset cannot be loaded.
pub const DEFAULT_DATASET_TITLE: &str = "Borgo Batone – Gäste-Q&A";

/// Dataset-backed deck: questions keyed by their position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDataset {
    title: String,
    cards: Vec<DeckCard>,
}

impl QuestionDataset {
    pub fn new(title: impl Into<String>, pairs: Vec<(String, String)>) -> Self {
        let cards = pairs
            .into_iter()
            .enumerate()
            .map(|(idx, (question, answer))| DeckCard {
                key: idx.to_string(),
                question,
                answer,
            })
            .collect();
        Self {
            title: title.into(),
            cards,
        }
    }

    pub fn empty() -> Self {
        Self::new(DEFAULT_DATASET_TITLE, Vec::new())
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let dataset: RawDataset = serde_json::from_str(raw)?;
        Ok(Self::new(
            dataset.title,
            dataset
                .questions
                .into_iter()
                .map(|entry| (entry.q, entry.a))
                .collect(),
        ))
    }
}

impl CardDeck for QuestionDataset {
    fn title(&self) -> &str {
        &self.title
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn card(&self, index: usize) -> Option<&DeckCard> {
        self.cards.get(index)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawResponse {
    key: String,
    answer: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawResponseTable {
    #[serde(default = "default_table_title")]
    title: String,
    #[serde(default)]
    response: Vec<RawResponse>,
}

fn default_table_title() -> String {
    "Borgo-Bot · Feste Antworten (Offline)".to_string()
}

const BUILTIN_RESPONSES: &str = include_str!("../data/fixed_responses.toml");

/// Fixed lookup table: the key doubles as the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    title: String,
    cards: Vec<DeckCard>,
}

impl ResponseTable {
    pub fn new(title: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        let cards = entries
            .into_iter()
            .map(|(key, answer)| DeckCard {
                question: key.clone(),
                key,
                answer,
            })
            .collect();
        Self {
            title: title.into(),
            cards,
        }
    }

    /// Parse `[[response]]` tables; file order is kept.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let table: RawResponseTable = toml::from_str(raw)?;
        Ok(Self::new(
            table.title,
            table
                .response
                .into_iter()
                .map(|entry| (entry.key, entry.answer))
                .collect(),
        ))
    }

    /// The table shipped with the binary.
    pub fn builtin() -> Self {
        match Self::from_toml(BUILTIN_RESPONSES) {
            Ok(table) => table,
            Err(err) => {
                tracing::error!("Built-in response table is invalid: {err}");
                Self::new(default_table_title(), Vec::new())
            }
        }
    }

    pub fn answer_for(&self, key: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|card| card.key == key)
            .map(|card| card.answer.as_str())
    }
}

impl CardDeck for ResponseTable {
    fn title(&self) -> &str {
        &self.title
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn card(&self, index: usize) -> Option<&DeckCard> {
        self.cards.get(index)
    }
}
