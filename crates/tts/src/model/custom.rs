use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Result, string_constants, validate};

use super::Prompt;

/// Japanese parts of speech for custom words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum PartOfSpeech {
    /// Dōshi, verb
    Dosi,
    /// Fukushi, adverb
    Fuku,
    /// Gobi, inflectional ending
    Gobi,
    /// Hoka, other
    Hoka,
    /// Jodōshi, auxiliary verb
    Jodo,
    /// Joshi, postpositional particle
    Josi,
    /// Katōshi, prefix
    Kato,
    /// Keiyōdōshi, adjectival noun
    Kedo,
    /// Keiyōshi, adjective
    Keyo,
    /// Kigō, symbol
    Kigo,
    /// Koyūmeishi, proper noun
    Koyu,
    /// Meishi, noun
    Mesi,
    /// Rentaishi, pre-noun adjectival
    Reta,
    /// Setsubi, noun suffix
    Stbi,
    /// Setsuzokushi, conjunction
    Stto,
    /// Setsuzokujoshi, conjunctive particle
    Stzo,
    /// Sūji, numeral
    Suji,
}

string_constants!(PartOfSpeech);

/// A word and how the service should pronounce it
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    word: String,
    translation: String,
    part_of_speech: Option<String>,
}

impl Word {
    pub fn builder() -> WordBuilder {
        WordBuilder::default()
    }

    pub fn to_builder(&self) -> WordBuilder {
        WordBuilder {
            word: Some(self.word.clone()),
            translation: Some(self.translation.clone()),
            part_of_speech: self.part_of_speech.clone(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Sounds-like spelling or phonetic notation
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// One of [`PartOfSpeech`]
    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct WordBuilder {
    word: Option<String>,
    translation: Option<String>,
    part_of_speech: Option<String>,
}

impl WordBuilder {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            translation: Some(translation.into()),
            part_of_speech: None,
        }
    }

    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = Some(part_of_speech.into());
        self
    }

    pub fn build(self) -> Result<Word> {
        Ok(Word {
            word: validate::not_null(self.word, "word")?,
            translation: validate::not_null(self.translation, "translation")?,
            part_of_speech: self.part_of_speech,
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Words {
    pub words: Option<Vec<Word>>,
}

/// Translation of a single custom word
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    translation: String,
    part_of_speech: Option<String>,
}

impl Translation {
    pub fn builder() -> TranslationBuilder {
        TranslationBuilder::default()
    }

    pub fn to_builder(&self) -> TranslationBuilder {
        TranslationBuilder {
            translation: Some(self.translation.clone()),
            part_of_speech: self.part_of_speech.clone(),
        }
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct TranslationBuilder {
    translation: Option<String>,
    part_of_speech: Option<String>,
}

impl TranslationBuilder {
    pub fn new(translation: impl Into<String>) -> Self {
        Self {
            translation: Some(translation.into()),
            part_of_speech: None,
        }
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = Some(part_of_speech.into());
        self
    }

    pub fn build(self) -> Result<Translation> {
        Ok(Translation {
            translation: validate::not_null(self.translation, "translation")?,
            part_of_speech: self.part_of_speech,
        })
    }
}

/// A custom model with its words and prompts
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomModel {
    pub customization_id: Option<String>,
    pub name: Option<String>,
    pub language: Option<String>,
    pub owner: Option<String>,
    pub created: Option<Timestamp>,
    pub last_modified: Option<Timestamp>,
    pub description: Option<String>,
    pub words: Option<Vec<Word>>,
    pub prompts: Option<Vec<Prompt>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomModels {
    pub customizations: Option<Vec<CustomModel>>,
}
