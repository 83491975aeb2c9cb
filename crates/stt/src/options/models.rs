use http::Method;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Operation, Result, string_constants, validate};

/// Identifiers accepted by [`GetModelOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum ModelId {
    #[strum(serialize = "ar-MS_BroadbandModel")]
    ArMsBroadbandModel,
    #[strum(serialize = "ar-MS_Telephony")]
    ArMsTelephony,
    #[strum(serialize = "cs-CZ_Telephony")]
    CsCzTelephony,
    #[strum(serialize = "de-DE_BroadbandModel")]
    DeDeBroadbandModel,
    #[strum(serialize = "de-DE_Multimedia")]
    DeDeMultimedia,
    #[strum(serialize = "de-DE_NarrowbandModel")]
    DeDeNarrowbandModel,
    #[strum(serialize = "de-DE_Telephony")]
    DeDeTelephony,
    #[strum(serialize = "en-AU")]
    EnAu,
    #[strum(serialize = "en-AU_BroadbandModel")]
    EnAuBroadbandModel,
    #[strum(serialize = "en-AU_Multimedia")]
    EnAuMultimedia,
    #[strum(serialize = "en-AU_NarrowbandModel")]
    EnAuNarrowbandModel,
    #[strum(serialize = "en-AU_Telephony")]
    EnAuTelephony,
    #[strum(serialize = "en-GB")]
    EnGb,
    #[strum(serialize = "en-GB_BroadbandModel")]
    EnGbBroadbandModel,
    #[strum(serialize = "en-GB_Multimedia")]
    EnGbMultimedia,
    #[strum(serialize = "en-GB_NarrowbandModel")]
    EnGbNarrowbandModel,
    #[strum(serialize = "en-GB_Telephony")]
    EnGbTelephony,
    #[strum(serialize = "en-IN")]
    EnIn,
    #[strum(serialize = "en-IN_Telephony")]
    EnInTelephony,
    #[strum(serialize = "en-US")]
    EnUs,
    #[strum(serialize = "en-US_BroadbandModel")]
    EnUsBroadbandModel,
    #[strum(serialize = "en-US_Multimedia")]
    EnUsMultimedia,
    #[strum(serialize = "en-US_NarrowbandModel")]
    EnUsNarrowbandModel,
    #[strum(serialize = "en-US_ShortForm_NarrowbandModel")]
    EnUsShortFormNarrowbandModel,
    #[strum(serialize = "en-US_Telephony")]
    EnUsTelephony,
    #[strum(serialize = "en-WW_Medical_Telephony")]
    EnWwMedicalTelephony,
    #[strum(serialize = "es-AR")]
    EsAr,
    #[strum(serialize = "es-AR_BroadbandModel")]
    EsArBroadbandModel,
    #[strum(serialize = "es-AR_NarrowbandModel")]
    EsArNarrowbandModel,
    #[strum(serialize = "es-CL")]
    EsCl,
    #[strum(serialize = "es-CL_BroadbandModel")]
    EsClBroadbandModel,
    #[strum(serialize = "es-CL_NarrowbandModel")]
    EsClNarrowbandModel,
    #[strum(serialize = "es-CO")]
    EsCo,
    #[strum(serialize = "es-CO_BroadbandModel")]
    EsCoBroadbandModel,
    #[strum(serialize = "es-CO_NarrowbandModel")]
    EsCoNarrowbandModel,
    #[strum(serialize = "es-ES")]
    EsEs,
    #[strum(serialize = "es-ES_BroadbandModel")]
    EsEsBroadbandModel,
    #[strum(serialize = "es-ES_NarrowbandModel")]
    EsEsNarrowbandModel,
    #[strum(serialize = "es-ES_Multimedia")]
    EsEsMultimedia,
    #[strum(serialize = "es-ES_Telephony")]
    EsEsTelephony,
    #[strum(serialize = "es-LA_Telephony")]
    EsLaTelephony,
    #[strum(serialize = "es-MX")]
    EsMx,
    #[strum(serialize = "es-MX_BroadbandModel")]
    EsMxBroadbandModel,
    #[strum(serialize = "es-MX_NarrowbandModel")]
    EsMxNarrowbandModel,
    #[strum(serialize = "es-PE")]
    EsPe,
    #[strum(serialize = "es-PE_BroadbandModel")]
    EsPeBroadbandModel,
    #[strum(serialize = "es-PE_NarrowbandModel")]
    EsPeNarrowbandModel,
    #[strum(serialize = "fr-CA")]
    FrCa,
    #[strum(serialize = "fr-CA_BroadbandModel")]
    FrCaBroadbandModel,
    #[strum(serialize = "fr-CA_Multimedia")]
    FrCaMultimedia,
    #[strum(serialize = "fr-CA_NarrowbandModel")]
    FrCaNarrowbandModel,
    #[strum(serialize = "fr-CA_Telephony")]
    FrCaTelephony,
    #[strum(serialize = "fr-FR")]
    FrFr,
    #[strum(serialize = "fr-FR_BroadbandModel")]
    FrFrBroadbandModel,
    #[strum(serialize = "fr-FR_Multimedia")]
    FrFrMultimedia,
    #[strum(serialize = "fr-FR_NarrowbandModel")]
    FrFrNarrowbandModel,
    #[strum(serialize = "fr-FR_Telephony")]
    FrFrTelephony,
    #[strum(serialize = "hi-IN_Telephony")]
    HiInTelephony,
    #[strum(serialize = "it-IT_BroadbandModel")]
    ItItBroadbandModel,
    #[strum(serialize = "it-IT_NarrowbandModel")]
    ItItNarrowbandModel,
    #[strum(serialize = "it-IT_Multimedia")]
    ItItMultimedia,
    #[strum(serialize = "it-IT_Telephony")]
    ItItTelephony,
    #[strum(serialize = "ja-JP")]
    JaJp,
    #[strum(serialize = "ja-JP_BroadbandModel")]
    JaJpBroadbandModel,
    #[strum(serialize = "ja-JP_Multimedia")]
    JaJpMultimedia,
    #[strum(serialize = "ja-JP_NarrowbandModel")]
    JaJpNarrowbandModel,
    #[strum(serialize = "ja-JP_Telephony")]
    JaJpTelephony,
    #[strum(serialize = "ko-KR_BroadbandModel")]
    KoKrBroadbandModel,
    #[strum(serialize = "ko-KR_Multimedia")]
    KoKrMultimedia,
    #[strum(serialize = "ko-KR_NarrowbandModel")]
    KoKrNarrowbandModel,
    #[strum(serialize = "ko-KR_Telephony")]
    KoKrTelephony,
    #[strum(serialize = "nl-BE_Telephony")]
    NlBeTelephony,
    #[strum(serialize = "nl-NL_BroadbandModel")]
    NlNlBroadbandModel,
    #[strum(serialize = "nl-NL_Multimedia")]
    NlNlMultimedia,
    #[strum(serialize = "nl-NL_NarrowbandModel")]
    NlNlNarrowbandModel,
    #[strum(serialize = "nl-NL_Telephony")]
    NlNlTelephony,
    #[strum(serialize = "pt-BR")]
    PtBr,
    #[strum(serialize = "pt-BR_BroadbandModel")]
    PtBrBroadbandModel,
    #[strum(serialize = "pt-BR_Multimedia")]
    PtBrMultimedia,
    #[strum(serialize = "pt-BR_NarrowbandModel")]
    PtBrNarrowbandModel,
    #[strum(serialize = "pt-BR_Telephony")]
    PtBrTelephony,
    #[strum(serialize = "sv-SE_Telephony")]
    SvSeTelephony,
    #[strum(serialize = "zh-CN_BroadbandModel")]
    ZhCnBroadbandModel,
    #[strum(serialize = "zh-CN_NarrowbandModel")]
    ZhCnNarrowbandModel,
    #[strum(serialize = "zh-CN_Telephony")]
    ZhCnTelephony,
}

string_constants!(ModelId);

/// List the available base models
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModelsOptions;

impl Operation for ListModelsOptions {
    fn operation_id(&self) -> &'static str {
        "list_models"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "models"]
    }
}

/// Fetch one base model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetModelOptions {
    model_id: String,
}

impl GetModelOptions {
    pub fn builder() -> GetModelOptionsBuilder {
        GetModelOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> GetModelOptionsBuilder {
        GetModelOptionsBuilder {
            model_id: Some(self.model_id.clone()),
        }
    }

    /// One of [`ModelId`]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl Operation for GetModelOptions {
    fn operation_id(&self) -> &'static str {
        "get_model"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "models", &self.model_id]
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct GetModelOptionsBuilder {
    model_id: Option<String>,
}

impl GetModelOptionsBuilder {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: Some(model_id.into()),
        }
    }

    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn build(self) -> Result<GetModelOptions> {
        Ok(GetModelOptions {
            model_id: validate::not_empty(self.model_id, "model_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use watson_core::constants::literals;

    use super::*;

    #[test]
    fn requires_model_id() {
        let err = GetModelOptions::builder().build().unwrap_err();
        assert_eq!(err.to_string(), "model_id cannot be empty");
        assert!(GetModelOptionsBuilder::new("").build().is_err());
    }

    #[test]
    fn gets_model_by_id() {
        let options = GetModelOptionsBuilder::new(ModelId::EnUsShortFormNarrowbandModel).build().unwrap();

        assert_eq!(options.model_id(), "en-US_ShortForm_NarrowbandModel");
        assert_eq!(options.path_segments(), ["v1", "models", "en-US_ShortForm_NarrowbandModel"]);
        assert_eq!(options.to_builder().build().unwrap(), options);
        assert_eq!(ListModelsOptions.path_segments(), ["v1", "models"]);
    }

    #[test]
    fn model_ids_are_distinct() {
        let ids = literals::<ModelId>();
        let unique: HashSet<_> = ids.iter().collect();

        assert_eq!(ids.len(), 85);
        assert_eq!(unique.len(), ids.len());
        assert!(ids.contains(&"en-WW_Medical_Telephony"));
        assert!(ids.contains(&"pt-BR"));
        assert_eq!("ja-JP_Multimedia".parse::<ModelId>().unwrap(), ModelId::JaJpMultimedia);
    }
}
