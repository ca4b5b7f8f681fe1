// insight-backend
pub const INSIGHT_BACKEND_PORT: &str = "8080";
pub const INSIGHT_BODY_LIMIT_MEBIBYTES: u64 = 4;
pub const OPENAI_CHAT_MODEL: &str = "gpt-4o-2024-08-06";
pub const COMPLETION_MAX_TOKENS: u32 = 1024;

// embedding
pub const OPENAI_EMBEDDING_MODEL: &str = "text-embedding-3-large";

// ranking
pub const DEFAULT_TOP_K: usize = 2;

// generated insights
pub const SUMMARY_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1500;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an analyst. You derive new insights from a user question and a set of prior insight records, and you answer with JSON only.";

pub const NO_INSIGHT_MESSAGE: &str =
    "There is no insight found. Please send a different question.";
