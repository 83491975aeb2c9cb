use bytes::Bytes;
use http::Method;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Operation, Params, Payload, Result, string_constants, validate};

use super::params::RecognitionParams;

const OCTET_STREAM: &str = "application/octet-stream";

/// Audio formats the service can transcribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum AudioContentType {
    #[strum(serialize = "audio/alaw")]
    Alaw,
    #[strum(serialize = "audio/basic")]
    Basic,
    #[strum(serialize = "audio/flac")]
    Flac,
    #[strum(serialize = "audio/g729")]
    G729,
    #[strum(serialize = "audio/l16")]
    L16,
    #[strum(serialize = "audio/mp3")]
    Mp3,
    #[strum(serialize = "audio/mpeg")]
    Mpeg,
    #[strum(serialize = "audio/mulaw")]
    Mulaw,
    #[strum(serialize = "audio/ogg")]
    Ogg,
    #[strum(serialize = "audio/ogg;codecs=opus")]
    OggCodecsOpus,
    #[strum(serialize = "audio/ogg;codecs=vorbis")]
    OggCodecsVorbis,
    #[strum(serialize = "audio/wav")]
    Wav,
    #[strum(serialize = "audio/webm")]
    Webm,
    #[strum(serialize = "audio/webm;codecs=opus")]
    WebmCodecsOpus,
    #[strum(serialize = "audio/webm;codecs=vorbis")]
    WebmCodecsVorbis,
}

/// Base models accepted by [`RecognizeOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum RecognizeModel {
    #[strum(serialize = "ar-AR_BroadbandModel")]
    ArArBroadbandModel,
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

string_constants!(AudioContentType, RecognizeModel);

/// Transcribe audio in a single request
///
/// The audio travels as the request body; every other field is a query
/// parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizeOptions {
    audio: Bytes,
    content_type: Option<String>,
    model: Option<String>,
    pub(super) params: RecognitionParams,
}

impl RecognizeOptions {
    pub fn builder() -> RecognizeOptionsBuilder {
        RecognizeOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> RecognizeOptionsBuilder {
        RecognizeOptionsBuilder {
            audio: Some(self.audio.clone()),
            content_type: self.content_type.clone(),
            model: self.model.clone(),
            params: self.params.clone(),
        }
    }

    pub const fn audio(&self) -> &Bytes {
        &self.audio
    }

    /// One of [`AudioContentType`], possibly with `rate` or `channels`
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// One of [`RecognizeModel`]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    recognition_accessors!();
}

impl Operation for RecognizeOptions {
    fn operation_id(&self) -> &'static str {
        "recognize"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "recognize"]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query.push_opt("model", self.model.as_deref());
        self.params.push_query(&mut query);
        query
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Binary {
            content_type: self.content_type.as_deref().unwrap_or(OCTET_STREAM).to_owned(),
            data: self.audio.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct RecognizeOptionsBuilder {
    audio: Option<Bytes>,
    content_type: Option<String>,
    model: Option<String>,
    params: RecognitionParams,
}

impl RecognizeOptionsBuilder {
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

    recognition_setters!();

    pub fn build(self) -> Result<RecognizeOptions> {
        Ok(RecognizeOptions {
            audio: validate::not_null(self.audio, "audio")?,
            content_type: self.content_type,
            model: self.model,
            params: self.params,
        })
    }
}

#[cfg(test)]
mod tests {
    use watson_core::constants::literals;

    use super::*;

    #[test]
    fn requires_audio() {
        let err = RecognizeOptions::builder().model(RecognizeModel::EnUsBroadbandModel).build().unwrap_err();
        assert_eq!(err.to_string(), "audio cannot be null");
    }

    #[test]
    fn preserves_every_field() {
        let options = RecognizeOptionsBuilder::new(Bytes::from_static(b"RIFF"))
            .content_type(AudioContentType::Wav)
            .model(RecognizeModel::EnUsNarrowbandModel)
            .language_customization_id("lang")
            .acoustic_customization_id("acoustic")
            .base_model_version("en-US_NarrowbandModel.v2018-06-04")
            .customization_weight(0.3)
            .inactivity_timeout(-1)
            .add_keyword("tornado")
            .keywords_threshold(0.2)
            .max_alternatives(2)
            .word_alternatives_threshold(0.1)
            .word_confidence(true)
            .timestamps(true)
            .profanity_filter(false)
            .smart_formatting(true)
            .smart_formatting_version(2)
            .speaker_labels(true)
            .grammar_name("commands")
            .redaction(false)
            .audio_metrics(true)
            .end_of_phrase_silence_time(0.8)
            .split_transcript_at_phrase_end(true)
            .speech_detector_sensitivity(0.4)
            .background_audio_suppression(0.5)
            .low_latency(false)
            .character_insertion_bias(-0.1)
            .build()
            .unwrap();

        assert_eq!(options.audio().as_ref(), b"RIFF");
        assert_eq!(options.content_type(), Some("audio/wav"));
        assert_eq!(options.model(), Some("en-US_NarrowbandModel"));
        assert_eq!(options.language_customization_id(), Some("lang"));
        assert_eq!(options.acoustic_customization_id(), Some("acoustic"));
        assert_eq!(options.base_model_version(), Some("en-US_NarrowbandModel.v2018-06-04"));
        assert_eq!(options.customization_weight(), Some(0.3));
        assert_eq!(options.inactivity_timeout(), Some(-1));
        assert_eq!(options.keywords(), Some(&["tornado".to_owned()][..]));
        assert_eq!(options.keywords_threshold(), Some(0.2));
        assert_eq!(options.max_alternatives(), Some(2));
        assert_eq!(options.word_alternatives_threshold(), Some(0.1));
        assert_eq!(options.word_confidence(), Some(true));
        assert_eq!(options.timestamps(), Some(true));
        assert_eq!(options.profanity_filter(), Some(false));
        assert_eq!(options.smart_formatting(), Some(true));
        assert_eq!(options.smart_formatting_version(), Some(2));
        assert_eq!(options.speaker_labels(), Some(true));
        assert_eq!(options.grammar_name(), Some("commands"));
        assert_eq!(options.redaction(), Some(false));
        assert_eq!(options.audio_metrics(), Some(true));
        assert_eq!(options.end_of_phrase_silence_time(), Some(0.8));
        assert_eq!(options.split_transcript_at_phrase_end(), Some(true));
        assert_eq!(options.speech_detector_sensitivity(), Some(0.4));
        assert_eq!(options.background_audio_suppression(), Some(0.5));
        assert_eq!(options.low_latency(), Some(false));
        assert_eq!(options.character_insertion_bias(), Some(-0.1));
        assert_eq!(options.to_builder().build().unwrap(), options);
    }

    #[test]
    fn sends_audio_as_body() {
        let options = RecognizeOptionsBuilder::new(Bytes::from_static(b"fLaC"))
            .content_type("audio/l16;rate=16000")
            .model(RecognizeModel::FrFrBroadbandModel)
            .keywords(vec!["orage".to_owned(), "grêle".to_owned()])
            .timestamps(true)
            .build()
            .unwrap();

        assert_eq!(options.method(), Method::POST);
        assert_eq!(
            options.query_params().pairs().collect::<Vec<_>>(),
            [("model", "fr-FR_BroadbandModel"), ("keywords", "orage,grêle"), ("timestamps", "true")]
        );
        assert_eq!(
            options.payload().unwrap(),
            Payload::Binary {
                content_type: "audio/l16;rate=16000".to_owned(),
                data: Bytes::from_static(b"fLaC"),
            }
        );
    }

    #[test]
    fn unknown_format_is_octet_stream() {
        let options = RecognizeOptionsBuilder::new(vec![0_u8; 4]).build().unwrap();
        assert_eq!(options.payload().unwrap().content_type(), Some("application/octet-stream"));
        assert!(options.query_params().is_empty());
    }

    #[test]
    fn constant_groups() {
        let formats = literals::<AudioContentType>();
        assert_eq!(formats.len(), 15);
        assert_eq!(formats.first(), Some(&"audio/alaw"));
        assert_eq!(formats.last(), Some(&"audio/webm;codecs=vorbis"));

        let models = literals::<RecognizeModel>();
        assert_eq!(models.len(), 34);
        assert!(models.contains(&"ar-AR_BroadbandModel"));
        assert!(models.iter().all(|m| m.ends_with("Model")));
    }
}
