//! Synthesis and pronunciation requests

use http::Method;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Operation, Params, Payload, Result, string_constants, validate};

/// Audio formats for synthesized speech
///
/// `audio/l16` and `audio/mulaw` need a sampling rate appended,
/// e.g. `audio/l16;rate=22050`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum SynthesizeAccept {
    #[strum(serialize = "audio/basic")]
    Basic,
    #[strum(serialize = "audio/flac")]
    Flac,
    /// Append the sampling rate before sending, e.g. `audio/l16;rate=22050`
    #[strum(serialize = "audio/l16")]
    L16,
    #[strum(serialize = "audio/ogg")]
    Ogg,
    #[strum(serialize = "audio/ogg;codecs=opus")]
    OggCodecsOpus,
    #[strum(serialize = "audio/ogg;codecs=vorbis")]
    OggCodecsVorbis,
    #[strum(serialize = "audio/mp3")]
    Mp3,
    #[strum(serialize = "audio/mpeg")]
    Mpeg,
    /// Append the sampling rate before sending, e.g. `audio/mulaw;rate=8000`
    #[strum(serialize = "audio/mulaw")]
    Mulaw,
    #[strum(serialize = "audio/wav")]
    Wav,
    #[strum(serialize = "audio/webm")]
    Webm,
    #[strum(serialize = "audio/webm;codecs=opus")]
    WebmCodecsOpus,
    #[strum(serialize = "audio/webm;codecs=vorbis")]
    WebmCodecsVorbis,
}

string_constants!(SynthesizeAccept);

/// Voices accepted by [`SynthesizeOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum SynthesizeVoice {
    #[strum(serialize = "de-DE_BirgitV3Voice")]
    DeDeBirgitV3Voice,
    #[strum(serialize = "de-DE_DieterV3Voice")]
    DeDeDieterV3Voice,
    #[strum(serialize = "de-DE_ErikaV3Voice")]
    DeDeErikaV3Voice,
    #[strum(serialize = "en-AU_HeidiExpressive")]
    EnAuHeidiExpressive,
    #[strum(serialize = "en-AU_JackExpressive")]
    EnAuJackExpressive,
    #[strum(serialize = "en-CA_HannahNatural")]
    EnCaHannahNatural,
    #[strum(serialize = "en-GB_CharlotteV3Voice")]
    EnGbCharlotteV3Voice,
    #[strum(serialize = "en-GB_ChloeNatural")]
    EnGbChloeNatural,
    #[strum(serialize = "en-GB_GeorgeExpressive")]
    EnGbGeorgeExpressive,
    #[strum(serialize = "en-GB_JamesV3Voice")]
    EnGbJamesV3Voice,
    #[strum(serialize = "en-GB_GeorgeNatural")]
    EnGbGeorgeNatural,
    #[strum(serialize = "en-GB_KateV3Voice")]
    EnGbKateV3Voice,
    #[strum(serialize = "en-US_AllisonExpressive")]
    EnUsAllisonExpressive,
    #[strum(serialize = "en-US_AllisonV3Voice")]
    EnUsAllisonV3Voice,
    #[strum(serialize = "en-US_EllieNatural")]
    EnUsEllieNatural,
    #[strum(serialize = "en-US_EmilyV3Voice")]
    EnUsEmilyV3Voice,
    #[strum(serialize = "en-US_EmmaExpressive")]
    EnUsEmmaExpressive,
    #[strum(serialize = "en-US_EmmaNatural")]
    EnUsEmmaNatural,
    #[strum(serialize = "en-US_EthanNatural")]
    EnUsEthanNatural,
    #[strum(serialize = "en-US_HenryV3Voice")]
    EnUsHenryV3Voice,
    #[strum(serialize = "en-US_JacksonNatural")]
    EnUsJacksonNatural,
    #[strum(serialize = "en-US_KevinV3Voice")]
    EnUsKevinV3Voice,
    #[strum(serialize = "en-US_LisaExpressive")]
    EnUsLisaExpressive,
    #[strum(serialize = "en-US_LisaV3Voice")]
    EnUsLisaV3Voice,
    #[strum(serialize = "en-US_MichaelExpressive")]
    EnUsMichaelExpressive,
    #[strum(serialize = "en-US_MichaelV3Voice")]
    EnUsMichaelV3Voice,
    #[strum(serialize = "en-US_OliviaV3Voice")]
    EnUsOliviaV3Voice,
    #[strum(serialize = "en-US_VictoriaNatural")]
    EnUsVictoriaNatural,
    #[strum(serialize = "es-ES_EnriqueV3Voice")]
    EsEsEnriqueV3Voice,
    #[strum(serialize = "es-ES_LauraV3Voice")]
    EsEsLauraV3Voice,
    #[strum(serialize = "es-LA_DanielaExpressive")]
    EsLaDanielaExpressive,
    #[strum(serialize = "es-LA_SofiaV3Voice")]
    EsLaSofiaV3Voice,
    #[strum(serialize = "es-US_SofiaV3Voice")]
    EsUsSofiaV3Voice,
    #[strum(serialize = "fr-CA_LouiseV3Voice")]
    FrCaLouiseV3Voice,
    #[strum(serialize = "fr-FR_NicolasV3Voice")]
    FrFrNicolasV3Voice,
    #[strum(serialize = "fr-FR_ReneeV3Voice")]
    FrFrReneeV3Voice,
    #[strum(serialize = "it-IT_FrancescaV3Voice")]
    ItItFrancescaV3Voice,
    #[strum(serialize = "ja-JP_EmiV3Voice")]
    JaJpEmiV3Voice,
    #[strum(serialize = "ko-KR_JinV3Voice")]
    KoKrJinV3Voice,
    #[strum(serialize = "nl-NL_MerelV3Voice")]
    NlNlMerelV3Voice,
    #[strum(serialize = "pt-BR_CamilaNatural")]
    PtBrCamilaNatural,
    #[strum(serialize = "pt-BR_IsabelaV3Voice")]
    PtBrIsabelaV3Voice,
    #[strum(serialize = "pt-BR_LucasExpressive")]
    PtBrLucasExpressive,
    #[strum(serialize = "pt-BR_LucasNatural")]
    PtBrLucasNatural,
}

string_constants!(SynthesizeVoice);

/// How strings of digits and letters are spelled out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SpellOutMode {
    Default,
    Singles,
    Pairs,
    Triples,
}

string_constants!(SpellOutMode);

/// Voices accepted by [`GetPronunciationOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum PronunciationVoice {
    #[strum(serialize = "ar-AR_OmarVoice")]
    ArArOmarVoice,
    #[strum(serialize = "de-DE_BirgitVoice")]
    DeDeBirgitVoice,
    #[strum(serialize = "de-DE_BirgitV3Voice")]
    DeDeBirgitV3Voice,
    #[strum(serialize = "de-DE_DieterVoice")]
    DeDeDieterVoice,
    #[strum(serialize = "de-DE_DieterV3Voice")]
    DeDeDieterV3Voice,
    #[strum(serialize = "de-DE_ErikaV3Voice")]
    DeDeErikaV3Voice,
    #[strum(serialize = "en-GB_CharlotteV3Voice")]
    EnGbCharlotteV3Voice,
    #[strum(serialize = "en-GB_JamesV3Voice")]
    EnGbJamesV3Voice,
    #[strum(serialize = "en-GB_KateVoice")]
    EnGbKateVoice,
    #[strum(serialize = "en-GB_KateV3Voice")]
    EnGbKateV3Voice,
    #[strum(serialize = "en-US_AllisonVoice")]
    EnUsAllisonVoice,
    #[strum(serialize = "en-US_AllisonV3Voice")]
    EnUsAllisonV3Voice,
    #[strum(serialize = "en-US_EmilyV3Voice")]
    EnUsEmilyV3Voice,
    #[strum(serialize = "en-US_HenryV3Voice")]
    EnUsHenryV3Voice,
    #[strum(serialize = "en-US_KevinV3Voice")]
    EnUsKevinV3Voice,
    #[strum(serialize = "en-US_LisaVoice")]
    EnUsLisaVoice,
    #[strum(serialize = "en-US_LisaV3Voice")]
    EnUsLisaV3Voice,
    #[strum(serialize = "en-US_MichaelVoice")]
    EnUsMichaelVoice,
    #[strum(serialize = "en-US_MichaelV3Voice")]
    EnUsMichaelV3Voice,
    #[strum(serialize = "en-US_OliviaV3Voice")]
    EnUsOliviaV3Voice,
    #[strum(serialize = "es-ES_EnriqueVoice")]
    EsEsEnriqueVoice,
    #[strum(serialize = "es-ES_EnriqueV3Voice")]
    EsEsEnriqueV3Voice,
    #[strum(serialize = "es-ES_LauraVoice")]
    EsEsLauraVoice,
    #[strum(serialize = "es-ES_LauraV3Voice")]
    EsEsLauraV3Voice,
    #[strum(serialize = "es-LA_SofiaVoice")]
    EsLaSofiaVoice,
    #[strum(serialize = "es-LA_SofiaV3Voice")]
    EsLaSofiaV3Voice,
    #[strum(serialize = "es-US_SofiaVoice")]
    EsUsSofiaVoice,
    #[strum(serialize = "es-US_SofiaV3Voice")]
    EsUsSofiaV3Voice,
    #[strum(serialize = "fr-FR_NicolasV3Voice")]
    FrFrNicolasV3Voice,
    #[strum(serialize = "fr-FR_ReneeVoice")]
    FrFrReneeVoice,
    #[strum(serialize = "fr-FR_ReneeV3Voice")]
    FrFrReneeV3Voice,
    #[strum(serialize = "it-IT_FrancescaVoice")]
    ItItFrancescaVoice,
    #[strum(serialize = "it-IT_FrancescaV3Voice")]
    ItItFrancescaV3Voice,
    #[strum(serialize = "ja-JP_EmiVoice")]
    JaJpEmiVoice,
    #[strum(serialize = "ja-JP_EmiV3Voice")]
    JaJpEmiV3Voice,
    #[strum(serialize = "ko-KR_YoungmiVoice")]
    KoKrYoungmiVoice,
    #[strum(serialize = "ko-KR_YunaVoice")]
    KoKrYunaVoice,
    #[strum(serialize = "nl-NL_EmmaVoice")]
    NlNlEmmaVoice,
    #[strum(serialize = "nl-NL_LiamVoice")]
    NlNlLiamVoice,
    #[strum(serialize = "pt-BR_IsabelaVoice")]
    PtBrIsabelaVoice,
    #[strum(serialize = "pt-BR_IsabelaV3Voice")]
    PtBrIsabelaV3Voice,
    #[strum(serialize = "zh-CN_LiNaVoice")]
    ZhCnLiNaVoice,
    #[strum(serialize = "zh-CN_WangWeiVoice")]
    ZhCnWangWeiVoice,
    #[strum(serialize = "zh-CN_ZhangJingVoice")]
    ZhCnZhangJingVoice,
}

string_constants!(PronunciationVoice);

/// Phoneme notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PronunciationFormat {
    Ibm,
    Ipa,
}

string_constants!(PronunciationFormat);

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

/// Synthesize text to audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizeOptions {
    text: String,
    accept: Option<String>,
    voice: Option<String>,
    customization_id: Option<String>,
    spell_out_mode: Option<String>,
    rate_percentage: Option<i64>,
    pitch_percentage: Option<i64>,
}

impl SynthesizeOptions {
    pub fn builder() -> SynthesizeOptionsBuilder {
        SynthesizeOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> SynthesizeOptionsBuilder {
        SynthesizeOptionsBuilder {
            text: Some(self.text.clone()),
            accept: self.accept.clone(),
            voice: self.voice.clone(),
            customization_id: self.customization_id.clone(),
            spell_out_mode: self.spell_out_mode.clone(),
            rate_percentage: self.rate_percentage,
            pitch_percentage: self.pitch_percentage,
        }
    }

    /// Plain text or SSML
    pub fn text(&self) -> &str {
        &self.text
    }

    /// One of [`SynthesizeAccept`], possibly with a rate
    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    /// One of [`SynthesizeVoice`]
    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref()
    }

    pub fn customization_id(&self) -> Option<&str> {
        self.customization_id.as_deref()
    }

    /// One of [`SpellOutMode`]
    pub fn spell_out_mode(&self) -> Option<&str> {
        self.spell_out_mode.as_deref()
    }

    /// Speaking rate change relative to the voice default
    pub const fn rate_percentage(&self) -> Option<i64> {
        self.rate_percentage
    }

    /// Pitch change relative to the voice default
    pub const fn pitch_percentage(&self) -> Option<i64> {
        self.pitch_percentage
    }
}

impl Operation for SynthesizeOptions {
    fn operation_id(&self) -> &'static str {
        "synthesize"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "synthesize"]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query
            .push_opt("voice", self.voice.as_deref())
            .push_opt("customization_id", self.customization_id.as_deref())
            .push_opt("spell_out_mode", self.spell_out_mode.as_deref())
            .push_opt("rate_percentage", self.rate_percentage)
            .push_opt("pitch_percentage", self.pitch_percentage);
        query
    }

    fn headers(&self) -> Params {
        let mut headers = Params::new();
        headers.push_opt("Accept", self.accept.as_deref());
        headers
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&TextBody { text: &self.text })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct SynthesizeOptionsBuilder {
    text: Option<String>,
    accept: Option<String>,
    voice: Option<String>,
    customization_id: Option<String>,
    spell_out_mode: Option<String>,
    rate_percentage: Option<i64>,
    pitch_percentage: Option<i64>,
}

impl SynthesizeOptionsBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
        self
    }

    pub fn spell_out_mode(mut self, spell_out_mode: impl Into<String>) -> Self {
        self.spell_out_mode = Some(spell_out_mode.into());
        self
    }

    pub const fn rate_percentage(mut self, rate_percentage: i64) -> Self {
        self.rate_percentage = Some(rate_percentage);
        self
    }

    pub const fn pitch_percentage(mut self, pitch_percentage: i64) -> Self {
        self.pitch_percentage = Some(pitch_percentage);
        self
    }

    pub fn build(self) -> Result<SynthesizeOptions> {
        Ok(SynthesizeOptions {
            text: validate::not_null(self.text, "text")?,
            accept: self.accept,
            voice: self.voice,
            customization_id: self.customization_id,
            spell_out_mode: self.spell_out_mode,
            rate_percentage: self.rate_percentage,
            pitch_percentage: self.pitch_percentage,
        })
    }
}

/// Look up the phonetic pronunciation of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPronunciationOptions {
    text: String,
    voice: Option<String>,
    format: Option<String>,
    customization_id: Option<String>,
}

impl GetPronunciationOptions {
    pub fn builder() -> GetPronunciationOptionsBuilder {
        GetPronunciationOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> GetPronunciationOptionsBuilder {
        GetPronunciationOptionsBuilder {
            text: Some(self.text.clone()),
            voice: self.voice.clone(),
            format: self.format.clone(),
            customization_id: self.customization_id.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// One of [`PronunciationVoice`]
    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref()
    }

    /// One of [`PronunciationFormat`]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn customization_id(&self) -> Option<&str> {
        self.customization_id.as_deref()
    }
}

impl Operation for GetPronunciationOptions {
    fn operation_id(&self) -> &'static str {
        "get_pronunciation"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "pronunciation"]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query
            .push("text", &self.text)
            .push_opt("voice", self.voice.as_deref())
            .push_opt("format", self.format.as_deref())
            .push_opt("customization_id", self.customization_id.as_deref());
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct GetPronunciationOptionsBuilder {
    text: Option<String>,
    voice: Option<String>,
    format: Option<String>,
    customization_id: Option<String>,
}

impl GetPronunciationOptionsBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
        self
    }

    pub fn build(self) -> Result<GetPronunciationOptions> {
        Ok(GetPronunciationOptions {
            text: validate::not_null(self.text, "text")?,
            voice: self.voice,
            format: self.format,
            customization_id: self.customization_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;
    use watson_core::constants::literals;

    use super::*;

    #[test]
    fn synthesize_requires_text() {
        let err = SynthesizeOptions::builder()
            .voice(SynthesizeVoice::EnUsAllisonV3Voice)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "text cannot be null");
    }

    #[test]
    fn synthesize_preserves_fields() {
        let options = SynthesizeOptionsBuilder::new("Hello world")
            .accept(SynthesizeAccept::OggCodecsOpus)
            .voice(SynthesizeVoice::EnGbCharlotteV3Voice)
            .customization_id("cust")
            .spell_out_mode(SpellOutMode::Pairs)
            .rate_percentage(-10)
            .pitch_percentage(5)
            .build()
            .unwrap();

        assert_eq!(options.text(), "Hello world");
        assert_eq!(options.accept(), Some("audio/ogg;codecs=opus"));
        assert_eq!(options.voice(), Some("en-GB_CharlotteV3Voice"));
        assert_eq!(options.customization_id(), Some("cust"));
        assert_eq!(options.spell_out_mode(), Some("pairs"));
        assert_eq!(options.rate_percentage(), Some(-10));
        assert_eq!(options.pitch_percentage(), Some(5));
        assert_eq!(options.to_builder().build().unwrap(), options);

        assert_eq!(options.headers().get("Accept"), Some("audio/ogg;codecs=opus"));
        assert_eq!(
            options.query_params().pairs().collect::<Vec<_>>(),
            [
                ("voice", "en-GB_CharlotteV3Voice"),
                ("customization_id", "cust"),
                ("spell_out_mode", "pairs"),
                ("rate_percentage", "-10"),
                ("pitch_percentage", "5"),
            ]
        );
        assert_eq!(options.payload().unwrap().as_json(), Some(&json!({ "text": "Hello world" })));
    }

    #[test]
    fn raw_audio_accept_carries_rate() {
        let options = SynthesizeOptionsBuilder::new("Hi")
            .accept(format!("{};rate=22050", SynthesizeAccept::L16))
            .build()
            .unwrap();
        assert_eq!(options.headers().get("Accept"), Some("audio/l16;rate=22050"));

        let options = SynthesizeOptionsBuilder::new("Hi")
            .accept(format!("{};rate=8000", SynthesizeAccept::Mulaw))
            .build()
            .unwrap();
        assert_eq!(options.accept(), Some("audio/mulaw;rate=8000"));
    }

    #[test]
    fn pronunciation_query() {
        let err = GetPronunciationOptions::builder().format(PronunciationFormat::Ipa).build().unwrap_err();
        assert_eq!(err.to_string(), "text cannot be null");

        let options = GetPronunciationOptionsBuilder::new("IEEE")
            .voice(PronunciationVoice::JaJpEmiV3Voice)
            .format(PronunciationFormat::Ibm)
            .build()
            .unwrap();

        assert_eq!(options.method(), Method::GET);
        assert_eq!(
            options.query_params().pairs().collect::<Vec<_>>(),
            [("text", "IEEE"), ("voice", "ja-JP_EmiV3Voice"), ("format", "ibm")]
        );
        assert_eq!(options.to_builder().build().unwrap(), options);
    }

    #[test]
    fn accept_literals() {
        assert_eq!(
            literals::<SynthesizeAccept>(),
            [
                "audio/basic",
                "audio/flac",
                "audio/l16",
                "audio/ogg",
                "audio/ogg;codecs=opus",
                "audio/ogg;codecs=vorbis",
                "audio/mp3",
                "audio/mpeg",
                "audio/mulaw",
                "audio/wav",
                "audio/webm",
                "audio/webm;codecs=opus",
                "audio/webm;codecs=vorbis",
            ]
        );
        assert_eq!(literals::<SpellOutMode>(), ["default", "singles", "pairs", "triples"]);
        assert_eq!(literals::<PronunciationFormat>(), ["ibm", "ipa"]);
    }

    #[test]
    fn voice_groups_are_distinct() {
        for voices in [literals::<SynthesizeVoice>(), literals::<PronunciationVoice>()] {
            let unique: HashSet<_> = voices.iter().collect();
            assert_eq!(voices.len(), 44);
            assert_eq!(unique.len(), voices.len());
        }
        assert!(literals::<PronunciationVoice>().contains(&"en-US_AllisonVoice"));
        assert!(!literals::<SynthesizeVoice>().contains(&"en-US_AllisonVoice"));
    }
}
