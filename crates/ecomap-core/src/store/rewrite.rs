//! Format-preserving rewrite of the `web.logo` field.
//!
//! Records are hand-edited files with comments, deliberate key order, and
//! mixed quoting. A full parse/dump cycle would destroy that, so the rewrite
//! touches exactly one scalar: the `logo:` line inside the `web:` mapping.
//! Every other byte of the file round-trips unchanged.

/// Replace the value of `web.logo` in the raw YAML text.
///
/// Preserves the original quote style of the old value and any trailing
/// comment on the line. Returns `None` when no `logo:` key is found under a
/// top-level `web:` mapping.
pub fn rewrite_logo_field(text: &str, new_logo: &str) -> Option<String> {
    let mut lines: Vec<&str> = text.split_inclusive('\n').collect();
    if lines.is_empty() {
        lines.push("");
    }

    let mut web_indent: Option<usize> = None;
    let mut target: Option<(usize, String)> = None;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim_end_matches(['\n', '\r']);
        let indent = line.len() - line.trim_start().len();
        let content = line.trim_start();

        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        match web_indent {
            None => {
                if content == "web:" || content.starts_with("web:") && content[4..].trim_start().starts_with('#') {
                    web_indent = Some(indent);
                }
            }
            Some(wi) => {
                if indent <= wi {
                    // Left the web mapping without finding a logo key.
                    break;
                }
                if content.starts_with("logo:") {
                    let rewritten = rewrite_scalar_line(line, indent, new_logo);
                    target = Some((i, rewritten));
                    break;
                }
            }
        }
    }

    let (idx, mut replacement) = target?;
    if lines[idx].ends_with("\r\n") {
        replacement.push_str("\r\n");
    } else if lines[idx].ends_with('\n') {
        replacement.push('\n');
    }

    let mut out = String::with_capacity(text.len() + new_logo.len());
    for (i, raw) in lines.iter().enumerate() {
        if i == idx {
            out.push_str(&replacement);
        } else {
            out.push_str(raw);
        }
    }
    Some(out)
}

/// Rebuild one `logo: <value>` line with a new value, keeping indentation,
/// quote style, and any trailing comment.
fn rewrite_scalar_line(line: &str, indent: usize, new_logo: &str) -> String {
    let prefix = &line[..indent];
    let rest = line[indent..].strip_prefix("logo:").unwrap_or("");
    let value_part = rest.trim_start();

    let (quote, comment) = match value_part.chars().next() {
        Some(q @ ('"' | '\'')) => {
            // Trailing comment starts after the closing quote.
            let closing = value_part[1..].find(q).map(|p| p + 2);
            let comment = closing
                .and_then(|end| {
                    let tail = value_part[end..].trim_start();
                    (!tail.is_empty()).then(|| tail.to_string())
                });
            (Some(q), comment)
        }
        _ => {
            let comment = value_part
                .find(" #")
                .map(|p| value_part[p..].trim_start().to_string());
            (None, comment)
        }
    };

    let mut out = format!("{}logo: ", prefix);
    match quote {
        Some(q) => {
            out.push(q);
            out.push_str(new_logo);
            out.push(q);
        }
        None => out.push_str(new_logo),
    }
    if let Some(c) = comment {
        out.push(' ');
        out.push_str(&c);
    }
    out
}
