use bytes::Bytes;
use http::Method;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Operation, Params, Payload, Result, string_constants, validate};

use super::params::RecognitionParams;

/// Base models accepted by [`CreateJobOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum CreateJobModel {
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
    #[strum(serialize = "en-AU_BroadbandModel")]
    EnAuBroadbandModel,
    #[strum(serialize = "en-AU_Multimedia")]
    EnAuMultimedia,
    #[strum(serialize = "en-AU_NarrowbandModel")]
    EnAuNarrowbandModel,
    #[strum(serialize = "en-AU_Telephony")]
    EnAuTelephony,
    #[strum(serialize = "en-IN_Telephony")]
    EnInTelephony,
    #[strum(serialize = "en-GB_BroadbandModel")]
    EnGbBroadbandModel,
    #[strum(serialize = "en-GB_Multimedia")]
    EnGbMultimedia,
    #[strum(serialize = "en-GB_NarrowbandModel")]
    EnGbNarrowbandModel,
    #[strum(serialize = "en-GB_Telephony")]
    EnGbTelephony,
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
    #[strum(serialize = "es-ES_Multimedia")]
    EsEsMultimedia,
    #[strum(serialize = "es-ES_Telephony")]
    EsEsTelephony,
    #[strum(serialize = "es-LA_Telephony")]
    EsLaTelephony,
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
    #[strum(serialize = "fr-CA_Multimedia")]
    FrCaMultimedia,
    #[strum(serialize = "fr-CA_NarrowbandModel")]
    FrCaNarrowbandModel,
    #[strum(serialize = "fr-CA_Telephony")]
    FrCaTelephony,
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

/// Job notifications sent to a callback URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum JobEvent {
    #[strum(serialize = "recognitions.started")]
    Started,
    #[strum(serialize = "recognitions.completed")]
    Completed,
    #[strum(serialize = "recognitions.completed_with_results")]
    CompletedWithResults,
    #[strum(serialize = "recognitions.failed")]
    Failed,
}

string_constants!(CreateJobModel, JobEvent);

/// Start an asynchronous recognition job
#[derive(Debug, Clone, PartialEq)]
pub struct CreateJobOptions {
    audio: Bytes,
    content_type: Option<String>,
    model: Option<String>,
    callback_url: Option<String>,
    events: Option<String>,
    user_token: Option<String>,
    results_ttl: Option<i64>,
    params: RecognitionParams,
    processing_metrics: Option<bool>,
    processing_metrics_interval: Option<f64>,
}

impl CreateJobOptions {
    pub fn builder() -> CreateJobOptionsBuilder {
        CreateJobOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateJobOptionsBuilder {
        CreateJobOptionsBuilder {
            audio: Some(self.audio.clone()),
            content_type: self.content_type.clone(),
            model: self.model.clone(),
            callback_url: self.callback_url.clone(),
            events: self.events.clone(),
            user_token: self.user_token.clone(),
            results_ttl: self.results_ttl,
            params: self.params.clone(),
            processing_metrics: self.processing_metrics,
            processing_metrics_interval: self.processing_metrics_interval,
        }
    }

    pub const fn audio(&self) -> &Bytes {
        &self.audio
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// One of [`CreateJobModel`]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Registered URL that receives job notifications
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    /// Comma separated [`JobEvent`] values
    pub fn events(&self) -> Option<&str> {
        self.events.as_deref()
    }

    pub fn user_token(&self) -> Option<&str> {
        self.user_token.as_deref()
    }

    /// Minutes the results stay available
    pub const fn results_ttl(&self) -> Option<i64> {
        self.results_ttl
    }

    recognition_accessors!();

    pub const fn processing_metrics(&self) -> Option<bool> {
        self.processing_metrics
    }

    pub const fn processing_metrics_interval(&self) -> Option<f64> {
        self.processing_metrics_interval
    }
}

impl Operation for CreateJobOptions {
    fn operation_id(&self) -> &'static str {
        "create_job"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "recognitions"]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query
            .push_opt("model", self.model.as_deref())
            .push_opt("callback_url", self.callback_url.as_deref())
            .push_opt("events", self.events.as_deref())
            .push_opt("user_token", self.user_token.as_deref())
            .push_opt("results_ttl", self.results_ttl);
        self.params.push_query(&mut query);
        query
            .push_opt("processing_metrics", self.processing_metrics)
            .push_opt("processing_metrics_interval", self.processing_metrics_interval);
        query
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Binary {
            content_type: self
                .content_type
                .as_deref()
                .unwrap_or("application/octet-stream")
                .to_owned(),
            data: self.audio.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateJobOptionsBuilder {
    audio: Option<Bytes>,
    content_type: Option<String>,
    model: Option<String>,
    callback_url: Option<String>,
    events: Option<String>,
    user_token: Option<String>,
    results_ttl: Option<i64>,
    params: RecognitionParams,
    processing_metrics: Option<bool>,
    processing_metrics_interval: Option<f64>,
}

impl CreateJobOptionsBuilder {
    pub fn new(audio: impl Into<Bytes>) -> Self {
        Self {
            audio: Some(audio.into()),
            ..Self::default()
        }
    }

    pub fn audio(mut self, audio: impl Into<Bytes>) -> Self {
        self.audio = Some(audio.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    pub fn events(mut self, events: impl Into<String>) -> Self {
        self.events = Some(events.into());
        self
    }

    pub fn user_token(mut self, user_token: impl Into<String>) -> Self {
        self.user_token = Some(user_token.into());
        self
    }

    pub const fn results_ttl(mut self, results_ttl: i64) -> Self {
        self.results_ttl = Some(results_ttl);
        self
    }

    recognition_setters!();

    pub const fn processing_metrics(mut self, processing_metrics: bool) -> Self {
        self.processing_metrics = Some(processing_metrics);
        self
    }

    pub const fn processing_metrics_interval(mut self, processing_metrics_interval: f64) -> Self {
        self.processing_metrics_interval = Some(processing_metrics_interval);
        self
    }

    pub fn build(self) -> Result<CreateJobOptions> {
        Ok(CreateJobOptions {
            audio: validate::not_null(self.audio, "audio")?,
            content_type: self.content_type,
            model: self.model,
            callback_url: self.callback_url,
            events: self.events,
            user_token: self.user_token,
            results_ttl: self.results_ttl,
            params: self.params,
            processing_metrics: self.processing_metrics,
            processing_metrics_interval: self.processing_metrics_interval,
        })
    }
}
