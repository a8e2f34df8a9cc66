/// The delivery URL for a node path: the base address, a slash, the path.
///
/// The path is used as-is, without further encoding.
pub fn action_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_slash() {
        assert_eq!(
            action_url("https://files.example.com", "2023/w/p1.pdf"),
            "https://files.example.com/2023/w/p1.pdf"
        );
        assert_eq!(
            action_url("https://files.example.com/", "2023/w/p1.pdf"),
            "https://files.example.com/2023/w/p1.pdf"
        );
    }

    #[test]
    fn path_is_not_encoded() {
        assert_eq!(
            action_url("http://h", "a b/c#1.pdf"),
            "http://h/a b/c#1.pdf"
        );
    }
}
