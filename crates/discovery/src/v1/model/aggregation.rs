//! Aggregation trees returned by queries
//!
//! Each aggregation is dispatched on its `type` field. Histogram, the four
//! calculations and term get dedicated models. Every other kind is kept in
//! [`GenericAggregation`] with its extra fields intact.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::string_constants;

/// Values of an aggregation's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum AggregationType {
    Term,
    Filter,
    Nested,
    Histogram,
    Timeslice,
    TopHits,
    UniqueCount,
    Max,
    Min,
    Average,
    Sum,
}

string_constants!(AggregationType);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryAggregation {
    Histogram(Histogram),
    Max(Calculation),
    Min(Calculation),
    Average(Calculation),
    Sum(Calculation),
    Term(Term),
    /// Any kind without a dedicated model, including ones the service adds later
    #[serde(untagged)]
    Other(GenericAggregation),
}

macro_rules! each_kind {
    ($aggregation:expr, $inner:ident => $body:expr) => {
        match $aggregation {
            QueryAggregation::Histogram($inner) => $body,
            QueryAggregation::Max($inner)
            | QueryAggregation::Min($inner)
            | QueryAggregation::Average($inner)
            | QueryAggregation::Sum($inner) => $body,
            QueryAggregation::Term($inner) => $body,
            QueryAggregation::Other($inner) => $body,
        }
    };
}

impl QueryAggregation {
    /// The `type` field as sent by the service
    pub fn kind(&self) -> Option<&str> {
        let known = match self {
            Self::Histogram(_) => AggregationType::Histogram,
            Self::Max(_) => AggregationType::Max,
            Self::Min(_) => AggregationType::Min,
            Self::Average(_) => AggregationType::Average,
            Self::Sum(_) => AggregationType::Sum,
            Self::Term(_) => AggregationType::Term,
            Self::Other(other) => return other.kind.as_deref(),
        };
        Some(known.into())
    }

    pub fn matching_results(&self) -> Option<i64> {
        each_kind!(self, inner => inner.matching_results)
    }

    pub fn results(&self) -> Option<&[AggregationResult]> {
        each_kind!(self, inner => inner.results.as_deref())
    }

    pub fn aggregations(&self) -> Option<&[QueryAggregation]> {
        each_kind!(self, inner => inner.aggregations.as_deref())
    }
}

/// One bucket of a term, histogram or timeslice aggregation
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Term text, or the numeric start of a histogram or timeslice bucket
    pub key: Option<Value>,
    pub matching_results: Option<i64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub field: Option<String>,
    /// Bucket width
    pub interval: Option<i64>,
    pub matching_results: Option<i64>,
    pub results: Option<Vec<AggregationResult>>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// A `max`, `min`, `average` or `sum` over a numeric field
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub field: Option<String>,
    pub value: Option<f64>,
    pub matching_results: Option<i64>,
    pub results: Option<Vec<AggregationResult>>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub field: Option<String>,
    /// Requested number of buckets
    pub count: Option<i64>,
    pub matching_results: Option<i64>,
    pub results: Option<Vec<AggregationResult>>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericAggregation {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub matching_results: Option<i64>,
    pub results: Option<Vec<AggregationResult>>,
    pub aggregations: Option<Vec<QueryAggregation>>,
    /// Kind-specific fields such as `match`, `path` or `hits`
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use serde_json::json;
    use watson_core::{JsonModel, constants::literals};

    use super::*;

    fn parse(value: Value) -> QueryAggregation {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn term_with_nested_buckets() {
        let json = indoc! {r#"
            {
              "type": "term",
              "field": "enriched_text.concepts.text",
              "count": 10,
              "results": [
                {
                  "key": "Watson",
                  "matching_results": 7,
                  "aggregations": [
                    { "type": "max", "field": "word_count", "value": 512.0 }
                  ]
                }
              ]
            }
        "#};
        let aggregation: QueryAggregation = serde_json::from_str(json).unwrap();

        let QueryAggregation::Term(term) = &aggregation else {
            panic!("expected a term aggregation, got {aggregation:?}");
        };
        assert_eq!(term.field.as_deref(), Some("enriched_text.concepts.text"));
        assert_eq!(term.count, Some(10));

        let bucket = &aggregation.results().unwrap()[0];
        assert_eq!(bucket.key, Some(json!("Watson")));
        assert_eq!(bucket.matching_results, Some(7));
        let nested = &bucket.aggregations.as_ref().unwrap()[0];
        assert_eq!(nested.kind(), Some("max"));
        assert!(matches!(nested, QueryAggregation::Max(max) if max.value == Some(512.0)));

        let value = serde_json::to_value(&aggregation).unwrap();
        assert_eq!(value["type"], "term");
        assert_eq!(value["results"][0]["aggregations"][0]["type"], "max");
        assert_eq!(parse(value), aggregation);
    }

    #[test]
    fn histogram_interval() {
        let aggregation = parse(json!({
            "type": "histogram",
            "field": "year",
            "interval": 5,
            "matching_results": 40,
            "results": [{ "key": 2015, "matching_results": 12 }]
        }));

        let QueryAggregation::Histogram(histogram) = &aggregation else {
            panic!("expected a histogram, got {aggregation:?}");
        };
        assert_eq!(histogram.interval, Some(5));
        assert_eq!(aggregation.matching_results(), Some(40));
        assert_eq!(aggregation.results().unwrap()[0].key, Some(json!(2015)));
        assert_eq!(parse(serde_json::to_value(&aggregation).unwrap()), aggregation);
    }

    #[test]
    fn calculations_keep_their_kind() {
        for kind in ["max", "min", "average", "sum"] {
            let aggregation = parse(json!({ "type": kind, "field": "price", "value": 9.5 }));

            let calculation = match &aggregation {
                QueryAggregation::Max(c)
                | QueryAggregation::Min(c)
                | QueryAggregation::Average(c)
                | QueryAggregation::Sum(c) => c,
                other => panic!("{kind} parsed as {other:?}"),
            };
            assert_eq!(calculation.value, Some(9.5));
            assert_eq!(calculation.field.as_deref(), Some("price"));
            assert_eq!(aggregation.kind(), Some(kind));

            let value = serde_json::to_value(&aggregation).unwrap();
            assert_eq!(value, json!({ "type": kind, "field": "price", "value": 9.5 }));
        }
    }

    #[test]
    fn unknown_kinds_fall_back() {
        let filter = json!({
            "type": "filter",
            "match": "enriched_text.sentiment.document.label:positive",
            "matching_results": 15,
            "aggregations": [{ "type": "unique_count", "field": "host", "value": 3 }]
        });
        let aggregation = parse(filter.clone());

        let QueryAggregation::Other(generic) = &aggregation else {
            panic!("expected the generic model, got {aggregation:?}");
        };
        assert_eq!(generic.kind.as_deref(), Some("filter"));
        assert_eq!(generic.fields["match"], filter["match"]);
        assert!(!generic.fields.contains_key("type"));
        assert_eq!(aggregation.matching_results(), Some(15));
        assert_eq!(aggregation.aggregations().unwrap()[0].kind(), Some("unique_count"));

        assert_eq!(serde_json::to_value(&aggregation).unwrap(), filter);

        let future = parse(json!({ "type": "percentile", "field": "price", "percents": [50] }));
        assert_eq!(future.kind(), Some("percentile"));
        assert_eq!(future.to_json_value().unwrap()["percents"], json!([50]));
    }

    #[test]
    fn aggregation_types() {
        assert_eq!(
            literals::<AggregationType>(),
            [
                "term",
                "filter",
                "nested",
                "histogram",
                "timeslice",
                "top_hits",
                "unique_count",
                "max",
                "min",
                "average",
                "sum",
            ]
        );
    }
}
