//! Report Schema
//!
//! One declarative description of the match report shape, consumed twice:
//! converted into the response schema sent to the model, and walked to
//! validate whatever JSON comes back. Descriptions are guidance for the model
//! only. Validation enforces structure and field presence; an integer field
//! takes any whole number (`90` or `90.0`) and its sign is left to the result
//! check. The typed decode accepts exactly what validation accepts.

use serde_json::{json, Map, Value};

use super::{whole_number, MatchReport};
use crate::error::SchemaError;

/// Kind of value a shape accepts
#[derive(Debug, Clone, Copy)]
pub enum ShapeKind {
    String,
    Integer,
    Number,
    /// Object whose listed fields are all required
    Object(&'static [Field]),
    Array(&'static Shape),
}

/// A node of the schema tree
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub kind: ShapeKind,
    pub description: Option<&'static str>,
}

/// Named member of an object shape
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
}

const fn field(name: &'static str, shape: Shape) -> Field {
    Field { name, shape }
}

impl Shape {
    const fn of(kind: ShapeKind) -> Self {
        Shape {
            kind,
            description: None,
        }
    }

    pub const fn string() -> Self {
        Self::of(ShapeKind::String)
    }

    pub const fn integer() -> Self {
        Self::of(ShapeKind::Integer)
    }

    pub const fn number() -> Self {
        Self::of(ShapeKind::Number)
    }

    pub const fn object(fields: &'static [Field]) -> Self {
        Self::of(ShapeKind::Object(fields))
    }

    pub const fn array(items: &'static Shape) -> Self {
        Self::of(ShapeKind::Array(items))
    }

    pub const fn describe(self, description: &'static str) -> Self {
        Shape {
            kind: self.kind,
            description: Some(description),
        }
    }

    /// Render as the provider's response schema (OpenAPI subset, upper-case
    /// type names, explicit property ordering).
    pub fn to_request_schema(&self) -> Value {
        let mut out = Map::new();
        match self.kind {
            ShapeKind::String => {
                out.insert("type".into(), json!("STRING"));
            }
            ShapeKind::Integer => {
                out.insert("type".into(), json!("INTEGER"));
            }
            ShapeKind::Number => {
                out.insert("type".into(), json!("NUMBER"));
            }
            ShapeKind::Object(fields) => {
                let properties: Map<String, Value> = fields
                    .iter()
                    .map(|f| (f.name.to_string(), f.shape.to_request_schema()))
                    .collect();
                let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
                out.insert("type".into(), json!("OBJECT"));
                out.insert("properties".into(), Value::Object(properties));
                out.insert("required".into(), json!(names));
                out.insert("propertyOrdering".into(), json!(names));
            }
            ShapeKind::Array(items) => {
                out.insert("type".into(), json!("ARRAY"));
                out.insert("items".into(), items.to_request_schema());
            }
        }
        if let Some(description) = self.description {
            out.insert("description".into(), json!(description));
        }
        Value::Object(out)
    }

    /// Check `value` against this shape. Unknown extra fields are allowed.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        self.check(value, "")
    }

    fn check(&self, value: &Value, path: &str) -> Result<(), SchemaError> {
        let mismatch = |expected| SchemaError::TypeMismatch {
            path: display_path(path),
            expected,
            found: json_type(value),
        };

        match self.kind {
            ShapeKind::String if value.is_string() => Ok(()),
            ShapeKind::String => Err(mismatch("string")),
            ShapeKind::Integer if value.as_f64().and_then(whole_number).is_some() => Ok(()),
            ShapeKind::Integer => Err(mismatch("integer")),
            ShapeKind::Number if value.is_number() => Ok(()),
            ShapeKind::Number => Err(mismatch("number")),
            ShapeKind::Object(fields) => {
                let object = value.as_object().ok_or_else(|| mismatch("object"))?;
                for f in fields {
                    let child = join(path, f.name);
                    match object.get(f.name) {
                        None | Some(Value::Null) => {
                            return Err(SchemaError::MissingField { path: child })
                        }
                        Some(v) => f.shape.check(v, &child)?,
                    }
                }
                Ok(())
            }
            ShapeKind::Array(items) => {
                let array = value.as_array().ok_or_else(|| mismatch("array"))?;
                for (i, v) in array.iter().enumerate() {
                    items.check(v, &format!("{}[{}]", path, i))?;
                }
                Ok(())
            }
        }
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const INTEGER_PAIR: &[Field] = &[
    field("home", Shape::integer()),
    field("away", Shape::integer()),
];

const NUMBER_PAIR: &[Field] = &[
    field("home", Shape::number()),
    field("away", Shape::number()),
];

const HALF_TIME: &[Field] = &[
    field("home", Shape::integer().describe("Home team goals at half time")),
    field("away", Shape::integer().describe("Away team goals at half time")),
];

const SCORE: &[Field] = &[
    field("home", Shape::integer().describe("Home team goals at full time")),
    field("away", Shape::integer().describe("Away team goals at full time")),
    field("halfTime", Shape::object(HALF_TIME)),
];

const MATCH_FLOW: &[Field] = &[
    field(
        "firstHalf",
        Shape::string().describe("Detailed account of the first half (600-800 characters)"),
    ),
    field(
        "secondHalf",
        Shape::string().describe("Detailed account of the second half (600-800 characters)"),
    ),
];

const GOAL_FIELDS: &[Field] = &[
    field("minute", Shape::integer().describe("Minute the goal was scored")),
    field("team", Shape::string().describe("Name of the scoring team")),
    field("scorer", Shape::string().describe("Name of the goal scorer")),
    field(
        "assist",
        Shape::string().describe("Name of the assisting player, empty string if none"),
    ),
    field(
        "description",
        Shape::string().describe("Detailed description of the goal (150-200 characters)"),
    ),
];

const GOAL: Shape = Shape::object(GOAL_FIELDS);

const HIGHLIGHT_FIELDS: &[Field] = &[
    field("minute", Shape::integer().describe("Minute of the highlight")),
    field(
        "description",
        Shape::string().describe("Description of the event (100-150 characters)"),
    ),
];

const HIGHLIGHT: Shape = Shape::object(HIGHLIGHT_FIELDS);

const STATISTICS: &[Field] = &[
    field(
        "possession",
        Shape::object(NUMBER_PAIR).describe("Ball possession in percent, home and away must add up to 100"),
    ),
    field("shots", Shape::object(INTEGER_PAIR)),
    field("shotsOnTarget", Shape::object(INTEGER_PAIR)),
    field("corners", Shape::object(INTEGER_PAIR)),
    field("fouls", Shape::object(INTEGER_PAIR)),
    field("yellowCards", Shape::object(INTEGER_PAIR)),
    field("redCards", Shape::object(INTEGER_PAIR)),
];

const WEATHER: &[Field] = &[
    field("condition", Shape::string().describe("Weather, e.g. sunny or rain")),
    field("temperature", Shape::number().describe("Temperature in degrees Celsius")),
    field(
        "pitchCondition",
        Shape::string().describe("Pitch condition, e.g. good or wet"),
    ),
];

const MATCH_REPORT_FIELDS: &[Field] = &[
    field("score", Shape::object(SCORE)),
    field("matchFlow", Shape::object(MATCH_FLOW)),
    field(
        "goals",
        Shape::array(&GOAL).describe("Every goal scored. Must agree exactly with the final score."),
    ),
    field(
        "highlights",
        Shape::array(&HIGHLIGHT).describe("Key moments of the match (6-10 entries)"),
    ),
    field("statistics", Shape::object(STATISTICS)),
    field("weather", Shape::object(WEATHER)),
];

/// Root shape of a match report
pub const MATCH_REPORT: Shape = Shape::object(MATCH_REPORT_FIELDS);

/// The report contract: request schema and response parser in one place
#[derive(Debug, Clone, Copy)]
pub struct ReportSchema {
    root: &'static Shape,
}

impl Default for ReportSchema {
    fn default() -> Self {
        Self::match_report()
    }
}

impl ReportSchema {
    pub const fn match_report() -> Self {
        Self {
            root: &MATCH_REPORT,
        }
    }

    pub fn root(&self) -> &'static Shape {
        self.root
    }

    /// Schema sent with the generation request
    pub fn to_request_schema(&self) -> Value {
        self.root.to_request_schema()
    }

    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        self.root.validate(value)
    }

    /// Parse raw model text: JSON syntax, then shape, then typed decode
    pub fn parse(&self, text: &str) -> Result<MatchReport, SchemaError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;
        self.validate(&value)?;
        serde_json::from_value(value).map_err(|e| SchemaError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    fn sample_value() -> Value {
        serde_json::to_value(sample_report()).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_report() {
        let report = sample_report();
        let text = serde_json::to_string(&report).unwrap();
        let parsed = ReportSchema::match_report().parse(&text).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_request_schema_root() {
        let schema = ReportSchema::match_report().to_request_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(
            schema["required"],
            json!(["score", "matchFlow", "goals", "highlights", "statistics", "weather"])
        );
        assert_eq!(schema["propertyOrdering"], schema["required"]);
    }

    #[test]
    fn test_request_schema_nested() {
        let schema = ReportSchema::match_report().to_request_schema();
        let goal = &schema["properties"]["goals"]["items"];
        assert_eq!(schema["properties"]["goals"]["type"], "ARRAY");
        assert_eq!(goal["type"], "OBJECT");
        assert!(goal["required"].as_array().unwrap().contains(&json!("assist")));
        assert_eq!(goal["properties"]["minute"]["type"], "INTEGER");

        let possession = &schema["properties"]["statistics"]["properties"]["possession"];
        assert_eq!(possession["properties"]["home"]["type"], "NUMBER");
        assert!(possession["description"].as_str().unwrap().contains("100"));

        let half_time = &schema["properties"]["score"]["properties"]["halfTime"];
        assert_eq!(half_time["required"], json!(["home", "away"]));
    }

    #[test]
    fn test_missing_nested_field_reports_path() {
        let mut value = sample_value();
        value["score"]["halfTime"].as_object_mut().unwrap().remove("away");
        let err = ReportSchema::match_report().validate(&value).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                path: "score.halfTime.away".into()
            }
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut value = sample_value();
        value["weather"] = Value::Null;
        let err = ReportSchema::match_report().validate(&value).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { path: "weather".into() });
    }

    #[test]
    fn test_type_mismatch_inside_array() {
        let mut value = sample_value();
        value["goals"][1]["minute"] = json!("58");
        let err = ReportSchema::match_report().validate(&value).unwrap_err();
        assert_eq!(
            err,
            SchemaError::TypeMismatch {
                path: "goals[1].minute".into(),
                expected: "integer",
                found: "string",
            }
        );
    }

    #[test]
    fn test_fractional_integer_rejected() {
        let mut value = sample_value();
        value["score"]["home"] = json!(2.5);
        assert!(matches!(
            ReportSchema::match_report().validate(&value),
            Err(SchemaError::TypeMismatch { expected: "integer", .. })
        ));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut value = sample_value();
        value["referee"] = json!("Michael Oliver");
        let parsed = ReportSchema::match_report()
            .parse(&value.to_string())
            .unwrap();
        assert_eq!(parsed, sample_report());
    }

    #[test]
    fn test_invalid_json() {
        let err = ReportSchema::match_report().parse("{\"score\": ").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidJson(_)));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = ReportSchema::match_report().parse("[]").unwrap_err();
        assert_eq!(
            err,
            SchemaError::TypeMismatch {
                path: "<root>".into(),
                expected: "object",
                found: "array",
            }
        );
    }

    #[test]
    fn test_negative_score_survives_parse() {
        // Negative scores are structurally valid; the result check rejects them.
        let mut value = sample_value();
        value["score"]["away"] = json!(-1);
        let parsed = ReportSchema::match_report()
            .parse(&value.to_string())
            .unwrap();
        assert_eq!(parsed.score.away, -1);
    }

    #[test]
    fn test_negative_count_parses() {
        let mut value = sample_value();
        value["statistics"]["fouls"]["home"] = json!(-1);
        let schema = ReportSchema::match_report();
        assert!(schema.validate(&value).is_ok());
        let parsed = schema.parse(&value.to_string()).unwrap();
        assert_eq!(parsed.statistics.fouls.home, -1);
    }

    #[test]
    fn test_whole_floats_parse() {
        let mut value = sample_value();
        value["goals"][2]["minute"] = json!(90.0);
        value["highlights"][0]["minute"] = json!(12.0);
        value["score"]["home"] = json!(1.0);
        value["statistics"]["corners"]["away"] = json!(4.0);
        let parsed = ReportSchema::match_report()
            .parse(&value.to_string())
            .unwrap();
        assert_eq!(parsed.goals[2].minute, 90);
        assert_eq!(parsed.highlights[0].minute, 12);
        assert_eq!(parsed.score.home, 1);
        assert_eq!(parsed.statistics.corners.away, 4);
    }

    #[test]
    fn test_out_of_range_integer_rejected_by_shape() {
        let mut value = sample_value();
        value["statistics"]["shots"]["home"] = json!(10_000_000_000u64);
        assert_eq!(
            ReportSchema::match_report().validate(&value),
            Err(SchemaError::TypeMismatch {
                path: "statistics.shots.home".into(),
                expected: "integer",
                found: "number",
            })
        );
    }
}
