use relevance::{InsightId, ScoredInsight};
use shared::constant::{DESCRIPTION_MAX_CHARS, SUMMARY_MAX_CHARS};

use super::request::InsightRecord;

/// An insight record selected for the prompt, with its similarity score
/// when it went through the ranker.
#[derive(Debug, Clone)]
pub struct PromptInsight {
    pub id: InsightId,
    pub text: String,
    pub similarity: Option<f32>,
}

impl From<ScoredInsight> for PromptInsight {
    fn from(scored: ScoredInsight) -> Self {
        PromptInsight {
            id: scored.id,
            text: scored.text,
            similarity: Some(scored.similarity),
        }
    }
}

impl From<&InsightRecord> for PromptInsight {
    fn from(record: &InsightRecord) -> Self {
        PromptInsight {
            id: record.id.clone(),
            text: record.text.clone(),
            similarity: None,
        }
    }
}

pub fn create_insight_prompt(question: &str, insights: &[PromptInsight]) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "## The user has asked this question: \"{question}\"\n\n"
    ));
    prompt.push_str("Derive new insights from the insight records below.\n\n");
    prompt.push_str(
        "### The records are given in the format <id>, score <score>: <text>. The score, when present, is the cosine similarity between the record and the question.\n",
    );
    for insight in insights {
        prompt.push_str(&format_insight_entry(insight));
    }
    prompt.push_str(&format!(
        "\nInstructions:\n\
         1. Base every generated insight solely on the question and the records above.\n\
         2. Give each generated insight a \"Summary\" of at most {SUMMARY_MAX_CHARS} characters and a \"Description\" of at most {DESCRIPTION_MAX_CHARS} characters.\n\
         3. List the ids of the records an insight was derived from in its \"Source_Insights\" array.\n\
         4. Respond with a JSON object holding an array named \"Insights\". Return an empty array when nothing can be derived.\n\
         5. Do not mention the model or its provider in the response.\n",
    ));
    prompt
}

fn format_insight_entry(insight: &PromptInsight) -> String {
    match insight.similarity {
        Some(score) => format!("{}, score {:.3}: {}\n", insight.id, score, insight.text),
        None => format!("{}: {}\n", insight.id, insight.text),
    }
}
