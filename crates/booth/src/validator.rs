use model::Draft;

/// Checks whether the draft may be submitted: the title, the description, and every
/// option must be non-empty. Whitespace counts as content.
pub fn is_complete(draft: &Draft) -> bool {
    if draft.title.is_empty() || draft.description.is_empty() {
        return false;
    }

    !draft.options.iter().any(String::is_empty)
}
