/// Splits a line into argument tokens.
///
/// The ASCII space character is the only delimiter; tabs and every other
/// character belong to tokens. There is no quoting and no escaping, and
/// neither token length nor token count is bounded.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if ch == ' ' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_spaces() {
        assert_eq!(tokenize("ls -la /tmp"), vec!["ls", "-la", "/tmp"]);
    }

    #[test]
    fn test_repeated_spaces_collapse() {
        assert_eq!(tokenize("ls  -la   /tmp"), vec!["ls", "-la", "/tmp"]);
    }

    #[test]
    fn test_leading_and_trailing_spaces_ignored() {
        assert_eq!(tokenize("   echo hi  "), vec!["echo", "hi"]);
    }

    #[test]
    fn test_empty_line_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_all_space_line_yields_no_tokens() {
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tab_is_not_a_delimiter() {
        assert_eq!(tokenize("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn test_tokens_are_nonempty_and_space_free() {
        for token in tokenize("  one   two three   ") {
            assert!(!token.is_empty());
            assert!(!token.contains(' '));
        }
    }

    #[test]
    fn test_rejoin_preserves_token_order() {
        let line = "grep -n main src/main.rs";
        assert_eq!(tokenize(line).join(" "), line);
    }

    #[test]
    fn test_long_token_is_not_truncated() {
        let long = "x".repeat(4096);
        let line = format!("cmd {}", long);
        let tokens = tokenize(&line);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], long);
    }

    #[test]
    fn test_many_tokens_are_not_capped() {
        let line = vec!["t"; 500].join(" ");
        assert_eq!(tokenize(&line).len(), 500);
    }
}
