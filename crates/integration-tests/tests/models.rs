use discovery::{v1, v2};
use indoc::indoc;
use serde_json::json;
use watson_core::JsonModel;

#[test]
fn configuration_round_trips_through_builder_and_json() {
    let configuration = v1::ConfigurationBuilder::new("news")
        .description("crawl settings")
        .add_normalization(v1::NormalizationOperation {
            operation: Some(v1::NormalizationOperationKind::Move.into()),
            source_field: Some("extracted_metadata.title".to_owned()),
            destination_field: Some("title".to_owned()),
        })
        .build()
        .unwrap();

    let value = configuration.to_json_value().unwrap();
    assert_eq!(
        value["normalizations"],
        json!([{ "operation": "move", "source_field": "extracted_metadata.title", "destination_field": "title" }])
    );
    assert!(value.get("configuration_id").is_none());

    let parsed = v1::Configuration::from_json(&configuration.to_json_pretty().unwrap()).unwrap();
    assert_eq!(parsed, configuration);
    assert_eq!(parsed.to_builder().build().unwrap(), configuration);
}

#[test]
fn configuration_without_name_is_rejected() {
    let err = v1::Configuration::builder().description("unnamed").build().unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "name cannot be null");
}

#[test]
fn query_response_keeps_document_fields() {
    let response = v2::QueryResponse::from_json(indoc! {r#"
        {
          "matching_results": 1,
          "results": [
            {
              "document_id": "doc-1",
              "title": "Watson Discovery",
              "result_metadata": { "document_retrieval_source": "search", "collection_id": "col" }
            }
          ],
          "retrieval_details": { "document_retrieval_strategy": "untrained" }
        }
    "#})
    .unwrap();

    let result = &response.results.as_deref().unwrap()[0];
    assert_eq!(result.fields["title"], "Watson Discovery");
    assert_eq!(
        result.result_metadata.as_ref().unwrap().document_retrieval_source.as_deref(),
        Some(v2::DocumentRetrievalSource::Search.as_ref())
    );
    assert_eq!(v2::QueryResponse::from_json(&response.to_json().unwrap()).unwrap(), response);
}

#[test]
fn recognition_results_round_trip() {
    let results = stt::SpeechRecognitionResults::from_json_value(json!({
        "result_index": 0,
        "results": [{
            "final": true,
            "alternatives": [{
                "transcript": "thunderstorms could produce large hail",
                "confidence": 0.96,
                "timestamps": [["thunderstorms", 1.49, 2.32]]
            }],
            "end_of_utterance": "end_of_data"
        }]
    }))
    .unwrap();

    let result = &results.results.as_deref().unwrap()[0];
    assert_eq!(result.final_results, Some(true));
    assert_eq!(result.end_of_utterance.as_deref(), Some(stt::EndOfUtterance::EndOfData.as_ref()));
    assert_eq!(stt::SpeechRecognitionResults::from_json(&results.to_json().unwrap()).unwrap(), results);
}

#[test]
fn voice_with_customization_round_trips() {
    let voice = tts::Voice {
        name: Some(tts::SynthesizeVoice::EnUsAllisonV3Voice.into()),
        language: Some("en-US".to_owned()),
        customizable: Some(true),
        customization: Some(tts::CustomModel {
            customization_id: Some("cust".to_owned()),
            words: Some(vec![tts::WordBuilder::new("IEEE", "I triple E").build().unwrap()]),
            ..tts::CustomModel::default()
        }),
        ..tts::Voice::default()
    };

    let value = voice.to_json_value().unwrap();
    assert_eq!(value["customization"]["words"][0], json!({ "word": "IEEE", "translation": "I triple E" }));
    assert_eq!(tts::Voice::from_json_value(value).unwrap(), voice);
}

#[test]
fn malformed_json_reports_error() {
    let err = tts::Voices::from_json("{\"voices\": 3}").unwrap_err();
    assert!(matches!(err, watson_core::Error::Json(_)));
    assert!(!err.is_validation());
}
