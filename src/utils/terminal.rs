//! Terminal output sanitization.
//!
//! Labels, prompts and plan titles come straight from files written by another
//! program. Before they reach the terminal, escape sequences are removed so that
//! content cannot move the cursor, recolor output or set the window title.

/// Removes ANSI/VT escape sequences and stray control characters.
///
/// Handles CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`) and
/// two-byte `ESC x` sequences. Tabs and newlines are kept.
///
/// # Examples
///
/// ```
/// use claude_history::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mRed\x1b[0m"), "Red");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            if !ch.is_control() || ch == '\n' || ch == '\t' {
                out.push(ch);
            }
            continue;
        }

        match chars.next() {
            Some('[') => {
                // Parameters and intermediates run until a final byte in @..~
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    out
}

/// Collapses text onto one line for list rows: sanitized, whitespace runs folded
pub fn single_line(text: &str) -> String {
    sanitize_for_terminal(text).split_whitespace().collect::<Vec<_>>().join(" ")
}
