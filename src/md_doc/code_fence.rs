const FENCE: &str = "```";

/// Removes fenced code blocks from some text.
///
/// Any line that starts with ```` ``` ```` (after trimming whitespace) opens or closes a fence. The fence lines
/// themselves are dropped, as is everything between them. A fence that is never closed drops everything after it.
///
/// ```
/// use mdslice::md_doc::strip_code_blocks;
///
/// let text = "Run this:\n```bash\necho hello\n```\nand you're done.";
/// assert_eq!(strip_code_blocks(text), "Run this:\nand you're done.");
/// ```
pub fn strip_code_blocks(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_fence = false;
    for line in text.split('\n') {
        if line.trim().starts_with(FENCE) {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence {
            result.push_str(line);
            result.push('\n');
        }
    }
    let keep = result.trim_end_matches('\n').len();
    result.truncate(keep);
    result
}
