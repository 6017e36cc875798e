//! Chat-command extraction — turns a poll batch into request candidates.

use jockey_core::message::ChatMessage;

/// Extract request candidates from a batch of chat messages, preserving
/// arrival order.
///
/// A message yields a candidate iff its text starts with `prefix` followed
/// by a whitespace delimiter. The candidate is the trimmed remainder; an
/// empty remainder is still emitted (no minimum-length filter).
pub fn extract_requests(prefix: &str, messages: &[ChatMessage]) -> Vec<String> {
    messages
        .iter()
        .filter_map(|m| extract_request(prefix, &m.text))
        .collect()
}

/// Extract the request from a single message text, if it carries the command.
pub fn extract_request(prefix: &str, text: &str) -> Option<String> {
    let rest = text.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    // The prefix must be followed by a delimiter: bare `/dj` and `/djX`
    // run-ons are not commands.
    if !chars.next()?.is_whitespace() {
        return None;
    }
    Some(chars.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn msg(text: &str) -> ChatMessage {
        ChatMessage {
            id: "m1".into(),
            author_id: "viewer".into(),
            author_name: Some("Viewer".into()),
            text: text.into(),
            published_at: Utc::now(),
        }
    }

    #[test]
    fn test_plain_message_yields_nothing() {
        assert_eq!(extract_request("/dj", "great stream!"), None);
    }

    #[test]
    fn test_command_yields_trimmed_remainder() {
        assert_eq!(
            extract_request("/dj", "/dj  Bohemian Rhapsody  "),
            Some("Bohemian Rhapsody".to_string())
        );
    }

    #[test]
    fn test_bare_prefix_yields_nothing() {
        assert_eq!(extract_request("/dj", "/dj"), None);
    }

    #[test]
    fn test_prefix_run_on_yields_nothing() {
        assert_eq!(extract_request("/dj", "/django unchained theme"), None);
    }

    #[test]
    fn test_prefix_mid_message_yields_nothing() {
        assert_eq!(extract_request("/dj", "try /dj something"), None);
    }

    #[test]
    fn test_empty_remainder_is_still_emitted() {
        assert_eq!(extract_request("/dj", "/dj "), Some(String::new()));
        assert_eq!(extract_request("/dj", "/dj    "), Some(String::new()));
    }

    #[test]
    fn test_batch_preserves_arrival_order() {
        let batch = vec![
            msg("/dj first song"),
            msg("hello"),
            msg("/dj second song"),
            msg("/djnope"),
        ];
        assert_eq!(
            extract_requests("/dj", &batch),
            vec!["first song".to_string(), "second song".to_string()]
        );
    }
}
