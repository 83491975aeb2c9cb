use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::string_constants;

use super::SpeechRecognitionResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RecognitionJobStatus {
    Waiting,
    Processing,
    Completed,
    Failed,
}

string_constants!(RecognitionJobStatus);

/// An asynchronous recognition job
///
/// `results` is only present once the job is `completed` and no callback
/// URL was registered.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionJob {
    pub id: Option<String>,
    /// One of [`RecognitionJobStatus`]
    pub status: Option<String>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub url: Option<String>,
    pub user_token: Option<String>,
    pub results: Option<Vec<SpeechRecognitionResults>>,
    pub warnings: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionJobs {
    pub recognitions: Option<Vec<RecognitionJob>>,
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use watson_core::{JsonModel, constants::literals};

    use super::*;

    #[test]
    fn status_literals() {
        assert_eq!(
            literals::<RecognitionJobStatus>(),
            ["waiting", "processing", "completed", "failed"]
        );
        assert_eq!("completed".parse::<RecognitionJobStatus>().unwrap(), RecognitionJobStatus::Completed);
    }

    #[test]
    fn reads_completed_job() {
        let job = RecognitionJob::from_json(indoc! {r#"
            {
              "id": "4bd734c0-e575-21f3-de03-f932aa0468a0",
              "status": "completed",
              "created": "2016-08-17T19:15:17.926Z",
              "updated": "2016-08-17T19:15:22.051Z",
              "results": [{
                "result_index": 0,
                "results": [{ "final": true, "alternatives": [{ "transcript": "several tornadoes" }] }]
              }],
              "warnings": ["Unknown arguments: [smart_formating]."]
            }
        "#})
        .unwrap();

        assert_eq!(job.status.as_deref(), Some("completed"));
        assert!(job.created.unwrap() < job.updated.unwrap());
        assert_eq!(job.results.as_ref().map(Vec::len), Some(1));
        assert_eq!(RecognitionJob::from_json(&job.to_json().unwrap()).unwrap(), job);
    }

    #[test]
    fn job_listing() {
        let jobs = RecognitionJobs::from_json(r#"{"recognitions": [{"id": "a", "status": "waiting"}]}"#).unwrap();
        let job = &jobs.recognitions.as_deref().unwrap()[0];

        assert_eq!(job.id.as_deref(), Some("a"));
        assert_eq!(job.results, None);
    }
}
