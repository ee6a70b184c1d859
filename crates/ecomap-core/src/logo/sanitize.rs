//! Project-name sanitization for derived logo filenames.

/// Derive a filesystem-safe base name from a project display name.
///
/// Keeps word characters and hyphens; every other run of characters becomes
/// a single hyphen. The result never starts or ends with a hyphen and never
/// contains consecutive hyphens. An empty result falls back to `fallback`.
pub fn sanitize_basename(name: &str, fallback: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
            cleaned.push(c);
        } else {
            cleaned.push(' ');
        }
    }

    // Whitespace runs become single hyphens, then hyphen runs collapse.
    let hyphenated = cleaned.split_whitespace().collect::<Vec<_>>().join("-");
    let mut out = String::with_capacity(hyphenated.len());
    let mut prev_hyphen = false;
    for c in hyphenated.chars() {
        if c == '-' {
            if !prev_hyphen {
                out.push('-');
            }
            prev_hyphen = true;
        } else {
            out.push(c);
            prev_hyphen = false;
        }
    }

    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_passes_through() {
        assert_eq!(sanitize_basename("Acme", "fallback"), "Acme");
    }

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(sanitize_basename("Acme Corp Tools", "x"), "Acme-Corp-Tools");
    }

    #[test]
    fn punctuation_stripped() {
        assert_eq!(sanitize_basename("Acme! (beta)", "x"), "Acme-beta");
        assert_eq!(sanitize_basename("a.b/c", "x"), "a-b-c");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(sanitize_basename("a -- b", "x"), "a-b");
        assert_eq!(sanitize_basename("--a--", "x"), "a");
    }

    #[test]
    fn never_starts_or_ends_with_hyphen() {
        for input in ["-lead", "trail-", " - padded - ", "!wow!"] {
            let out = sanitize_basename(input, "x");
            assert!(!out.starts_with('-'), "{:?} -> {:?}", input, out);
            assert!(!out.ends_with('-'), "{:?} -> {:?}", input, out);
        }
    }

    #[test]
    fn empty_falls_back() {
        assert_eq!(sanitize_basename("", "project-logo"), "project-logo");
        assert_eq!(sanitize_basename("!!!", "project-logo"), "project-logo");
    }

    #[test]
    fn unicode_word_chars_kept() {
        assert_eq!(sanitize_basename("Späce Örg", "x"), "Späce-Örg");
    }

    #[test]
    fn only_word_chars_and_hyphens_remain() {
        let out = sanitize_basename("We/ird ~ Name (v2.0)", "x");
        assert!(out
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-'));
    }
}
