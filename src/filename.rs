/// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_filename(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// True when the name is empty or only whitespace. No-break spaces
/// (U+00A0, U+2007, U+202F) and NEL count as content; `\u{1c}`..`\u{1f}` do not.
pub fn is_blank(file_name: &str) -> bool {
    file_name.chars().all(|c| {
        (c.is_whitespace() && !matches!(c, '\u{a0}' | '\u{2007}' | '\u{202f}' | '\u{85}'))
            || matches!(c, '\u{1c}'..='\u{1f}')
    })
}

/// Text after the last `.`, or empty when there is no dot or the dot is last.
pub fn file_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_safe_characters() {
        assert_eq!(sanitize_filename("logo-v2_final.PNG"), "logo-v2_final.PNG");
    }

    #[test]
    fn replaces_separators_and_spaces() {
        assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo__1_.jpg");
        assert_eq!(sanitize_filename("../../etc/passwd.png"), ".._.._etc_passwd.png");
        assert_eq!(sanitize_filename(r"C:\temp\a.css"), "C__temp_a.css");
    }

    #[test]
    fn replaces_each_non_ascii_char_once() {
        assert_eq!(sanitize_filename("café.html"), "caf_.html");
        assert_eq!(sanitize_filename("图片.png"), "__.png");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for name in ["../../etc/passwd.png", "a b/c\\d.css", "ok.html", "図.gif", ""] {
            let once = sanitize_filename(name);
            assert_eq!(sanitize_filename(&once), once);
        }
    }

    #[test]
    fn blank_names() {
        for name in ["", " ", "\t\r\n", "\u{3000}", "\u{2003} ", "\u{1f}"] {
            assert!(is_blank(name), "{name:?}");
        }
    }

    #[test]
    fn no_break_spaces_are_not_blank() {
        for name in ["\u{a0}", "\u{2007}", "\u{202f}", "\u{85}", " a "] {
            assert!(!is_blank(name), "{name:?}");
        }
    }

    #[test]
    fn extension_after_last_dot() {
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("photo.PNG"), "PNG");
        assert_eq!(file_extension(".png"), "png");
    }

    #[test]
    fn extension_empty_without_dot_or_trailing_dot() {
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension("image."), "");
        assert_eq!(file_extension(""), "");
    }
}
