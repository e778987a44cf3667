use serde_json::Value;

const FENCE: &str = "```";

/// Removes Markdown code-fence lines (and any language tag after the opening
/// fence). Backticks elsewhere in a line are left alone.
pub fn strip_fences(raw: &str) -> String {
    raw.lines().map(strip_fence_line).collect::<Vec<_>>().join("\n")
}

fn strip_fence_line(line: &str) -> &str {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return line;
    };

    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    rest.strip_suffix(FENCE).unwrap_or(rest)
}

/// Byte index of the bracket closing the value that opens at `start`.
/// String literals and escapes are skipped; mismatched brackets end the scan.
pub fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut expected: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escape = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => expected.push('}'),
            '[' => expected.push(']'),
            '}' | ']' => {
                if expected.pop() != Some(ch) {
                    return None;
                }
                if expected.is_empty() {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}

/// Finds the first balanced JSON object or array in free-form model output
/// that also parses as JSON.
pub fn extract_json_value(raw: &str) -> Option<Value> {
    let text = strip_fences(raw);
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(['{', '[']) {
        let start = cursor + offset;
        match balanced_end(&text, start) {
            Some(end) => {
                if let Ok(value) = serde_json::from_str::<Value>(&text[start..=end]) {
                    return Some(value);
                }
                cursor = end + 1;
            }
            None => cursor = start + 1,
        }
    }

    None
}
