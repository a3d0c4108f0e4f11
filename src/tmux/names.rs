/// Characters tmux reserves in target syntax (`session:window.pane`),
/// plus whitespace
pub const INVALID_NAME_CHARS: [char; 5] = ['.', ':', ' ', '\n', '\t'];

/// Check whether `name` can be used as a tmux session name
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(&INVALID_NAME_CHARS[..])
}
