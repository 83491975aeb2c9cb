use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::string_constants;

/// Lifecycle of a custom language or acoustic model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CustomModelStatus {
    Pending,
    Ready,
    Training,
    Available,
    Upgrading,
    Failed,
}

string_constants!(CustomModelStatus);

/// A custom language model
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageModel {
    pub customization_id: Option<String>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub language: Option<String>,
    pub dialect: Option<String>,
    pub versions: Option<Vec<String>>,
    pub owner: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_model_name: Option<String>,
    /// One of [`CustomModelStatus`]
    pub status: Option<String>,
    /// Training progress in percent
    pub progress: Option<i64>,
    pub error: Option<String>,
    pub warnings: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageModels {
    pub customizations: Option<Vec<LanguageModel>>,
}

/// A custom acoustic model
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcousticModel {
    pub customization_id: Option<String>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub language: Option<String>,
    pub versions: Option<Vec<String>>,
    pub owner: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_model_name: Option<String>,
    /// One of [`CustomModelStatus`]
    pub status: Option<String>,
    pub progress: Option<i64>,
    pub warnings: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcousticModels {
    pub customizations: Option<Vec<AcousticModel>>,
}
