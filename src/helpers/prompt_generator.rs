use crate::structs::classified_file::ClassifiedFile;
use crate::structs::impact_analysis::ImpactAnalysis;

/// First `max_chars` characters of a diff, on a char boundary.
pub fn diff_excerpt(diff: &str, max_chars: usize) -> String {
    match diff.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}\n... (diff truncated)", &diff[..byte_index]),
        None => diff.to_string(),
    }
}

pub fn generate_impact_prompt(title: &str, files: &[ClassifiedFile], max_files: usize, diff_char_limit: usize) -> String {
    let mut prompt = format!("Analyze these code changes:\n\nMerge Request: {}\n\nCode Changes:\n", title);

    for file in files.iter().take(max_files) {
        prompt.push_str(&format!("\nFile: {}\n", file.path()));
        prompt.push_str(&format!("Change Type: {}\n", file.change.change_type));
        if !file.change.diff_text.is_empty() {
            prompt.push_str(&format!("Diff:\n{}\n", diff_excerpt(&file.change.diff_text, diff_char_limit)));
        }
        prompt.push_str("---\n");
    }

    if files.len() > max_files {
        prompt.push_str(&format!("\n... and {} more files not shown\n", files.len() - max_files));
    }

    prompt
}

pub fn generate_scenario_prompt(title: &str, analysis: &ImpactAnalysis, files: &[ClassifiedFile], max_files: usize) -> String {
    let changed_files: Vec<String> = files
        .iter()
        .take(max_files)
        .map(|f| format!("- {} ({})", f.path(), f.change.change_type))
        .collect();

    format!(
        "Generate UI test scenarios for this merge request:\n\n\
         Title: {}\n\
         Summary: {}\n\
         Affected UI Areas: {}\n\
         User Impact: {}\n\
         Risk Areas: {}\n\n\
         Files Changed:\n{}\n\n\
         Create 3-5 focused test scenarios that cover the main functionality and potential edge cases.",
        title,
        analysis.summary,
        analysis.affected_areas.join(", "),
        analysis.user_impact,
        analysis.risk_areas.join(", "),
        changed_files.join("\n")
    )
}
