use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Operation, Payload, Result, string_constants, validate};

/// Base models a custom language model can extend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum LanguageBaseModelName {
    #[strum(serialize = "de-DE_BroadbandModel")]
    DeDeBroadbandModel,
    #[strum(serialize = "de-DE_NarrowbandModel")]
    DeDeNarrowbandModel,
    #[strum(serialize = "en-GB_BroadbandModel")]
    EnGbBroadbandModel,
    #[strum(serialize = "en-GB_NarrowbandModel")]
    EnGbNarrowbandModel,
    #[strum(serialize = "en-US_BroadbandModel")]
    EnUsBroadbandModel,
    #[strum(serialize = "en-US_NarrowbandModel")]
    EnUsNarrowbandModel,
    #[strum(serialize = "en-US_ShortForm_NarrowbandModel")]
    EnUsShortFormNarrowbandModel,
    #[strum(serialize = "es-AR_BroadbandModel")]
    EsArBroadbandModel,
    #[strum(serialize = "es-AR_NarrowbandModel")]
    EsArNarrowbandModel,
    #[strum(serialize = "es-CL_BroadbandModel")]
    EsClBroadbandModel,
    #[strum(serialize = "es-CL_NarrowbandModel")]
    EsClNarrowbandModel,
    #[strum(serialize = "es-CO_BroadbandModel")]
    EsCoBroadbandModel,
    #[strum(serialize = "es-CO_NarrowbandModel")]
    EsCoNarrowbandModel,
    #[strum(serialize = "es-ES_BroadbandModel")]
    EsEsBroadbandModel,
    #[strum(serialize = "es-ES_NarrowbandModel")]
    EsEsNarrowbandModel,
    #[strum(serialize = "es-MX_BroadbandModel")]
    EsMxBroadbandModel,
    #[strum(serialize = "es-MX_NarrowbandModel")]
    EsMxNarrowbandModel,
    #[strum(serialize = "es-PE_BroadbandModel")]
    EsPeBroadbandModel,
    #[strum(serialize = "es-PE_NarrowbandModel")]
    EsPeNarrowbandModel,
    #[strum(serialize = "fr-FR_BroadbandModel")]
    FrFrBroadbandModel,
    #[strum(serialize = "fr-FR_NarrowbandModel")]
    FrFrNarrowbandModel,
    #[strum(serialize = "ja-JP_BroadbandModel")]
    JaJpBroadbandModel,
    #[strum(serialize = "ja-JP_NarrowbandModel")]
    JaJpNarrowbandModel,
    #[strum(serialize = "ko-KR_BroadbandModel")]
    KoKrBroadbandModel,
    #[strum(serialize = "ko-KR_NarrowbandModel")]
    KoKrNarrowbandModel,
    #[strum(serialize = "pt-BR_BroadbandModel")]
    PtBrBroadbandModel,
    #[strum(serialize = "pt-BR_NarrowbandModel")]
    PtBrNarrowbandModel,
}

/// Base models a custom acoustic model can extend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum AcousticBaseModelName {
    #[strum(serialize = "ar-AR_BroadbandModel")]
    ArArBroadbandModel,
    #[strum(serialize = "de-DE_BroadbandModel")]
    DeDeBroadbandModel,
    #[strum(serialize = "de-DE_NarrowbandModel")]
    DeDeNarrowbandModel,
    #[strum(serialize = "en-AU_BroadbandModel")]
    EnAuBroadbandModel,
    #[strum(serialize = "en-AU_NarrowbandModel")]
    EnAuNarrowbandModel,
    #[strum(serialize = "en-GB_BroadbandModel")]
    EnGbBroadbandModel,
    #[strum(serialize = "en-GB_NarrowbandModel")]
    EnGbNarrowbandModel,
    #[strum(serialize = "en-US_BroadbandModel")]
    EnUsBroadbandModel,
    #[strum(serialize = "en-US_NarrowbandModel")]
    EnUsNarrowbandModel,
    #[strum(serialize = "en-US_ShortForm_NarrowbandModel")]
    EnUsShortFormNarrowbandModel,
    #[strum(serialize = "es-AR_BroadbandModel")]
    EsArBroadbandModel,
    #[strum(serialize = "es-AR_NarrowbandModel")]
    EsArNarrowbandModel,
    #[strum(serialize = "es-CL_BroadbandModel")]
    EsClBroadbandModel,
    #[strum(serialize = "es-CL_NarrowbandModel")]
    EsClNarrowbandModel,
    #[strum(serialize = "es-CO_BroadbandModel")]
    EsCoBroadbandModel,
    #[strum(serialize = "es-CO_NarrowbandModel")]
    EsCoNarrowbandModel,
    #[strum(serialize = "es-ES_BroadbandModel")]
    EsEsBroadbandModel,
    #[strum(serialize = "es-ES_NarrowbandModel")]
    EsEsNarrowbandModel,
    #[strum(serialize = "es-MX_BroadbandModel")]
    EsMxBroadbandModel,
    #[strum(serialize = "es-MX_NarrowbandModel")]
    EsMxNarrowbandModel,
    #[strum(serialize = "es-PE_BroadbandModel")]
    EsPeBroadbandModel,
    #[strum(serialize = "es-PE_NarrowbandModel")]
    EsPeNarrowbandModel,
    #[strum(serialize = "fr-CA_BroadbandModel")]
    FrCaBroadbandModel,
    #[strum(serialize = "fr-CA_NarrowbandModel")]
    FrCaNarrowbandModel,
    #[strum(serialize = "fr-FR_BroadbandModel")]
    FrFrBroadbandModel,
    #[strum(serialize = "fr-FR_NarrowbandModel")]
    FrFrNarrowbandModel,
    #[strum(serialize = "it-IT_BroadbandModel")]
    ItItBroadbandModel,
    #[strum(serialize = "it-IT_NarrowbandModel")]
    ItItNarrowbandModel,
    #[strum(serialize = "ja-JP_BroadbandModel")]
    JaJpBroadbandModel,
    #[strum(serialize = "ja-JP_NarrowbandModel")]
    JaJpNarrowbandModel,
    #[strum(serialize = "ko-KR_BroadbandModel")]
    KoKrBroadbandModel,
    #[strum(serialize = "ko-KR_NarrowbandModel")]
    KoKrNarrowbandModel,
    #[strum(serialize = "nl-NL_BroadbandModel")]
    NlNlBroadbandModel,
    #[strum(serialize = "nl-NL_NarrowbandModel")]
    NlNlNarrowbandModel,
    #[strum(serialize = "pt-BR_BroadbandModel")]
    PtBrBroadbandModel,
    #[strum(serialize = "pt-BR_NarrowbandModel")]
    PtBrNarrowbandModel,
    #[strum(serialize = "zh-CN_BroadbandModel")]
    ZhCnBroadbandModel,
    #[strum(serialize = "zh-CN_NarrowbandModel")]
    ZhCnNarrowbandModel,
}

string_constants!(LanguageBaseModelName, AcousticBaseModelName);

#[skip_serializing_none]
#[derive(Serialize)]
struct CustomModelBody<'a> {
    name: &'a str,
    base_model_name: &'a str,
    dialect: Option<&'a str>,
    description: Option<&'a str>,
}

/// Create a custom language model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLanguageModelOptions {
    name: String,
    base_model_name: String,
    dialect: Option<String>,
    description: Option<String>,
}

impl CreateLanguageModelOptions {
    pub fn builder() -> CreateLanguageModelOptionsBuilder {
        CreateLanguageModelOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateLanguageModelOptionsBuilder {
        CreateLanguageModelOptionsBuilder {
            name: Some(self.name.clone()),
            base_model_name: Some(self.base_model_name.clone()),
            dialect: self.dialect.clone(),
            description: self.description.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// One of [`LanguageBaseModelName`]
    pub fn base_model_name(&self) -> &str {
        &self.base_model_name
    }

    /// Spanish dialect such as `es-LA`; other languages use their own code
    pub fn dialect(&self) -> Option<&str> {
        self.dialect.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Operation for CreateLanguageModelOptions {
    fn operation_id(&self) -> &'static str {
        "create_language_model"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "customizations"]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&CustomModelBody {
            name: &self.name,
            base_model_name: &self.base_model_name,
            dialect: self.dialect.as_deref(),
            description: self.description.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateLanguageModelOptionsBuilder {
    name: Option<String>,
    base_model_name: Option<String>,
    dialect: Option<String>,
    description: Option<String>,
}

impl CreateLanguageModelOptionsBuilder {
    pub fn new(name: impl Into<String>, base_model_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            base_model_name: Some(base_model_name.into()),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn base_model_name(mut self, base_model_name: impl Into<String>) -> Self {
        self.base_model_name = Some(base_model_name.into());
        self
    }

    pub fn dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = Some(dialect.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> Result<CreateLanguageModelOptions> {
        Ok(CreateLanguageModelOptions {
            name: validate::not_null(self.name, "name")?,
            base_model_name: validate::not_null(self.base_model_name, "base_model_name")?,
            dialect: self.dialect,
            description: self.description,
        })
    }
}

/// Create a custom acoustic model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAcousticModelOptions {
    name: String,
    base_model_name: String,
    description: Option<String>,
}

impl CreateAcousticModelOptions {
    pub fn builder() -> CreateAcousticModelOptionsBuilder {
        CreateAcousticModelOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateAcousticModelOptionsBuilder {
        CreateAcousticModelOptionsBuilder {
            name: Some(self.name.clone()),
            base_model_name: Some(self.base_model_name.clone()),
            description: self.description.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// One of [`AcousticBaseModelName`]
    pub fn base_model_name(&self) -> &str {
        &self.base_model_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Operation for CreateAcousticModelOptions {
    fn operation_id(&self) -> &'static str {
        "create_acoustic_model"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "acoustic_customizations"]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&CustomModelBody {
            name: &self.name,
            base_model_name: &self.base_model_name,
            dialect: None,
            description: self.description.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateAcousticModelOptionsBuilder {
    name: Option<String>,
    base_model_name: Option<String>,
    description: Option<String>,
}

impl CreateAcousticModelOptionsBuilder {
    pub fn new(name: impl Into<String>, base_model_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            base_model_name: Some(base_model_name.into()),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn base_model_name(mut self, base_model_name: impl Into<String>) -> Self {
        self.base_model_name = Some(base_model_name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> Result<CreateAcousticModelOptions> {
        Ok(CreateAcousticModelOptions {
            name: validate::not_null(self.name, "name")?,
            base_model_name: validate::not_null(self.base_model_name, "base_model_name")?,
            description: self.description,
        })
    }
}
