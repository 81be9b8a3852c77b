use chrono::NaiveDate;

/// System policy for the extraction call. Classification is by intent,
/// not keyword; `today` anchors relative date expressions.
pub fn system_instruction(today: NaiveDate) -> String {
    format!(
        "You classify a user's free-form text into four kinds of records: \
tasks, events, issues, and notes.

Today's date: {today} ({weekday})

## Classification criteria (judge by context and intent, not keywords):
- **task**: a concrete piece of work that can be executed and completed \
(e.g. \"submit the report\", \"review the code\", \"buy groceries\")
- **event**: something happening at a specific time or date - meetings, \
appointments (e.g. \"meeting at 3pm\", \"dinner on Friday\")
- **issue**: a problem that cannot be resolved immediately and needs \
ongoing tracking (e.g. \"server times out intermittently\", \"need to find \
out why the build fails\")
- **note**: information, ideas, or references that fit none of the above

## Rules:
- A single sentence may belong to more than one category at the same time \
(e.g. \"fix the login bug\" is both a task and an issue)
- Resolve relative date expressions (\"tomorrow\", \"next Monday\") into \
absolute dates using today's date; emit dates as YYYY-MM-DD and times as \
RFC 3339 UTC timestamps
- An event with no specific time is all-day: set is_all_day to true
- A newly identified issue gets status OPEN
- A task judged urgent or critical gets is_important true
- Preserve the meaning of the original text, but keep each item's content \
concise rather than verbatim",
        today = today.format("%Y-%m-%d"),
        weekday = today.format("%A"),
    )
}
