//! Terminal output helpers
//!
//! Message text comes from other workspace members and is echoed in the report, so it
//! is sanitized before display: ANSI CSI sequences (`ESC [ ... letter`) and control
//! characters are removed so remote content cannot move the cursor, clear the screen
//! or recolor the terminal.

const PREVIEW_MAX_CHARS: usize = 50;
const PREVIEW_KEEP_CHARS: usize = 46;

/// Single-line, sanitized preview of message text
///
/// Runs of `\r`, `\n` and `\t` collapse into one space. Previews longer than 50
/// characters are cut to 46 characters followed by `" ..."`.
///
/// # Examples
///
/// ```
/// use slack_sweeper::utils::message_preview;
///
/// assert_eq!(message_preview("line one\n\n\tline two"), "line one line two");
/// assert_eq!(message_preview("\x1b[31mred\x1b[0m"), "red");
/// ```
pub fn message_preview(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_break = false;

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if matches!(ch, '\r' | '\n' | '\t') {
            if !in_break {
                cleaned.push(' ');
                in_break = true;
            }
            continue;
        }
        in_break = false;

        if ch.is_control() {
            continue;
        }
        cleaned.push(ch);
    }

    if cleaned.chars().count() > PREVIEW_MAX_CHARS {
        let mut truncated: String = cleaned.chars().take(PREVIEW_KEEP_CHARS).collect();
        truncated.push_str(" ...");
        truncated
    } else {
        cleaned
    }
}

/// Masked form of a credential for display, e.g. `xoxp-…f00d`
pub fn mask_token(token: &str) -> String {
    let prefix = token.split_once('-').map(|(kind, _)| kind).unwrap_or("");
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "…".repeat(3);
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    if prefix.is_empty() || prefix.len() >= chars.len() - 4 {
        format!("…{}", tail)
    } else {
        format!("{}-…{}", prefix, tail)
    }
}
