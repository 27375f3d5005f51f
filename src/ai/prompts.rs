//! The analysis prompt.
//!
//! Every entry is embedded in one user prompt that asks the model for an
//! eight-part thematic analysis.

/// Separator placed between rendered entries.
pub const ENTRY_SEPARATOR: &str = "\n---\n\n";

/// Renders entries as numbered blocks joined by `ENTRY_SEPARATOR`.
///
/// ```
/// use diary_insights::ai::prompts::combine_entries;
///
/// let entries = vec!["A".to_string(), "B".to_string()];
/// assert_eq!(combine_entries(&entries), "Entry 1:\nA\n\n---\n\nEntry 2:\nB\n");
/// ```
pub fn combine_entries(entries: &[String]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("Entry {}:\n{}\n", i + 1, entry))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Builds the full analysis prompt for `entries`.
pub fn analysis_prompt(entries: &[String]) -> String {
    format!(
        r#"You are an insightful journal analyst. I'm going to share {count} diary entries with you. Please analyze them deeply and provide comprehensive insights about:

1. **Emotional Patterns**: What emotions appear most frequently? Are there emotional cycles or triggers?

2. **Recurring Themes**: What topics, concerns, or interests come up repeatedly?

3. **Personal Growth**: What changes or evolution do you notice over time? What progress or setbacks?

4. **Behavioral Patterns**: Are there habits, routines, or behaviors that emerge?

5. **Relationships**: What patterns emerge in how the person relates to others?

6. **Values & Priorities**: What seems to matter most to this person based on what they write about?

7. **Hidden Insights**: What patterns might the writer not be consciously aware of?

8. **Suggestions**: Based on the patterns, what constructive suggestions would you offer?

Here are the diary entries:

{entries}

Please provide a thorough, compassionate analysis that helps the writer understand themselves better. Be specific and reference patterns you notice. Format your response in a clear, organized way with headers for each section."#,
        count = entries.len(),
        entries = combine_entries(entries)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_combine_entries_numbering_and_separator() {
        let combined = combine_entries(&owned(&["A", "B", "C"]));
        assert_eq!(
            combined,
            "Entry 1:\nA\n\n---\n\nEntry 2:\nB\n\n---\n\nEntry 3:\nC\n"
        );
    }

    #[test]
    fn test_combine_single_entry_has_no_separator() {
        assert_eq!(combine_entries(&owned(&["solo"])), "Entry 1:\nsolo\n");
    }

    #[test]
    fn test_analysis_prompt_embeds_entries_and_count() {
        let prompt = analysis_prompt(&owned(&["A", "B"]));

        assert!(prompt.contains("share 2 diary entries"));
        assert!(prompt.contains("Entry 1:\nA\n"));
        assert!(prompt.contains("Entry 2:\nB\n"));
        assert!(prompt.contains("Entry 1:\nA\n\n---\n\nEntry 2:\nB\n"));
    }

    #[test]
    fn test_analysis_prompt_asks_for_all_dimensions() {
        let prompt = analysis_prompt(&owned(&["x"]));
        for dimension in [
            "Emotional Patterns",
            "Recurring Themes",
            "Personal Growth",
            "Behavioral Patterns",
            "Relationships",
            "Values & Priorities",
            "Hidden Insights",
            "Suggestions",
        ] {
            assert!(prompt.contains(dimension), "missing {}", dimension);
        }
        assert!(prompt.contains("headers for each section"));
    }

    #[test]
    fn test_entry_text_is_not_escaped() {
        let prompt = analysis_prompt(&owned(&["{braces} and \"quotes\""]));
        assert!(prompt.contains("{braces} and \"quotes\""));
    }
}
