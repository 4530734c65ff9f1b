// Shared prompt fragments. Each service that needs LLM calls keeps its own
// prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps edits factual.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    Never invent employers, titles, dates, degrees, metrics, or certifications. \
    Rewrite and sharpen what the candidate wrote; if a number would help but is not \
    present, suggest the candidate add one instead of making it up.";
