use async_openai::types::{ResponseFormat, ResponseFormatJsonSchema};
use relevance::InsightId;
use serde::{Deserialize, Serialize};
use serde_json::{from_str, json};
use shared::constant::{DESCRIPTION_MAX_CHARS, NO_INSIGHT_MESSAGE, SUMMARY_MAX_CHARS};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GeneratedInsight {
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Source_Insights", default)]
    pub source_insights: Vec<InsightId>,
}

impl GeneratedInsight {
    fn get_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "Insights": {
                    "type": "array",
                    "description": "Generated insights. Empty when nothing can be derived.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "Summary": {
                                "type": "string",
                                "description": format!("Short summary of the insight, at most {SUMMARY_MAX_CHARS} characters."),
                            },
                            "Description": {
                                "type": "string",
                                "description": format!("Detailed description of the insight, at most {DESCRIPTION_MAX_CHARS} characters."),
                            },
                            "Source_Insights": {
                                "type": "array",
                                "items": {"type": ["integer", "string"]},
                                "description": "Ids of the insight records this insight was derived from.",
                            }
                        },
                        "additionalProperties": false,
                        "required": ["Summary", "Description", "Source_Insights"]
                    }
                }
            },
            "additionalProperties": false,
            "required": ["Insights"]
        })
    }

    pub fn response_format() -> ResponseFormat {
        ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                name: "insight_output".to_string(),
                description: Some(
                    "Insights derived from the question and the provided insight records"
                        .to_string(),
                ),
                schema: Some(Self::get_schema()),
                strict: Some(true),
            },
        }
    }
}

/// The shapes a model reply is allowed to take. Anything else is a
/// parse failure and surfaces as HTTP 500.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ModelReply {
    Insights {
        #[serde(rename = "Insights")]
        insights: Vec<GeneratedInsight>,
    },
    Message {
        #[serde(rename = "message", alias = "Message")]
        message: String,
    },
}

pub fn parse_model_reply(content: &str) -> Result<ModelReply, serde_json::Error> {
    from_str(content)
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum InsightResponse {
    Insights {
        #[serde(rename = "Insights")]
        insights: Vec<GeneratedInsight>,
    },
    Message {
        message: String,
    },
}

impl InsightResponse {
    pub fn no_insight() -> Self {
        InsightResponse::Message {
            message: NO_INSIGHT_MESSAGE.to_string(),
        }
    }
}

impl From<ModelReply> for InsightResponse {
    fn from(reply: ModelReply) -> Self {
        match reply {
            ModelReply::Insights { insights } if !insights.is_empty() => {
                InsightResponse::Insights { insights }
            }
            ModelReply::Insights { .. } => InsightResponse::no_insight(),
            ModelReply::Message { message } => InsightResponse::Message { message },
        }
    }
}
