const FENCE: &str = "```";

/// Removes Markdown code fences the model sometimes wraps around its JSON.
///
/// Every "```json" (plus one following newline) and every bare "```" is
/// dropped, then surrounding whitespace is trimmed. Anything that cleans
/// down to nothing becomes `{}`. Nothing else is repaired.
pub fn clean_json_output(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find(FENCE) {
        cleaned.push_str(&rest[..idx]);
        rest = &rest[idx + FENCE.len()..];
        if let Some(after_tag) = rest.strip_prefix("json") {
            rest = after_tag.strip_prefix('\n').unwrap_or(after_tag);
        }
    }
    cleaned.push_str(rest);

    match cleaned.trim() {
        "" => "{}".to_string(),
        trimmed => trimmed.to_string(),
    }
}
