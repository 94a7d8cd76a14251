//! URL building helpers.

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// `mailto:` link with subject and body (RFC 6068).
///
/// Line breaks in the body are sent as CRLF. Empty fields are omitted.
pub fn mailto_url(to: &str, subject: &str, body: &str) -> String {
    let body = body.replace("\r\n", "\n").replace('\n', "\r\n");

    let params: Vec<String> = [("subject", subject), ("body", body.as_str())]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect();

    if params.is_empty() {
        format!("mailto:{}", to)
    } else {
        format!("mailto:{}?{}", to, params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode_component("hi there&x=1"), "hi%20there%26x%3D1");
        assert_eq!(encode_component("né"), "n%C3%A9");
    }

    #[test]
    fn test_mailto_plain() {
        assert_eq!(mailto_url("me@example.com", "", ""), "mailto:me@example.com");
    }

    #[test]
    fn test_mailto_with_fields() {
        assert_eq!(
            mailto_url("me@example.com", "hello from ann", "line one\nline two"),
            "mailto:me@example.com?subject=hello%20from%20ann&body=line%20one%0D%0Aline%20two"
        );
    }

    #[test]
    fn test_mailto_body_only() {
        assert_eq!(
            mailto_url("me@example.com", "", "a+b?"),
            "mailto:me@example.com?body=a%2Bb%3F"
        );
    }
}
