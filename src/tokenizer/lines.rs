//! Physical line splitting
//!
//! `\r\n`, a lone `\r` and a lone `\n` each end one line. A trailing break does not
//! start another (empty) line, and an empty input is a single empty line, which keeps
//! `"a\nb"` equivalent to `["a", "b"]` and `"a\n"` equivalent to `["a"]`.

pub fn physical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() || lines.is_empty() {
        lines.push(&text[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(physical_lines("abc"), vec!["abc"]);
    }

    #[test]
    fn test_empty_input_is_one_line() {
        assert_eq!(physical_lines(""), vec![""]);
        assert_eq!(physical_lines("\n"), vec![""]);
    }

    #[test]
    fn test_mixed_breaks() {
        assert_eq!(physical_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_trailing_break_and_blank_lines() {
        assert_eq!(physical_lines("a\n"), vec!["a"]);
        assert_eq!(physical_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(physical_lines("a\r\n\r\n"), vec!["a", ""]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(physical_lines("héllo\nwörld"), vec!["héllo", "wörld"]);
    }
}
