/// Escape HTML special characters in user-supplied text so it is inert
/// when rendered by a client.
///
/// Replaces:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
pub fn sanitize_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_html_escapes_script_tags() {
        let input = "<script>alert('XSS')</script>";
        let expected = "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;";
        assert_eq!(sanitize_html(input), expected);
    }

    #[test]
    fn test_sanitize_html_escapes_ampersands_and_quotes() {
        assert_eq!(
            sanitize_html(r#"Tom & Jerry's "best" episode"#),
            "Tom &amp; Jerry&#x27;s &quot;best&quot; episode"
        );
    }

    #[test]
    fn test_sanitize_html_leaves_plain_text_alone() {
        assert_eq!(sanitize_html("Plain text 123"), "Plain text 123");
        assert_eq!(sanitize_html(""), "");
    }
}
