#[cfg(test)]
mod common_tests {
    use crate::common::common::{parse_form_body, parse_log_level};
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_form_body_single_field() {
        let fields = parse_form_body(b"infoHash=abc123");
        assert_eq!(fields.get("infoHash"), Some(&vec![String::from("abc123")]));
    }

    #[test]
    fn test_parse_form_body_percent_and_plus_decoding() {
        let fields = parse_form_body(b"name=My+Torrent%21&infoHash=ABC");
        assert_eq!(fields.get("name"), Some(&vec![String::from("My Torrent!")]));
        assert_eq!(fields.get("infoHash"), Some(&vec![String::from("ABC")]));
    }

    #[test]
    fn test_parse_form_body_repeated_keys_keep_order() {
        let fields = parse_form_body(b"infoHash=first&infoHash=second");
        assert_eq!(fields.get("infoHash"), Some(&vec![String::from("first"), String::from("second")]));
    }

    #[test]
    fn test_parse_form_body_key_without_value() {
        let fields = parse_form_body(b"infoHash&other=1");
        assert_eq!(fields.get("infoHash"), Some(&vec![String::new()]));
    }

    #[test]
    fn test_parse_form_body_empty() {
        assert!(parse_form_body(b"").is_empty());
        assert!(parse_form_body(b"=value").is_empty());
    }

    #[test]
    fn test_parse_form_body_keys_are_case_sensitive() {
        let fields = parse_form_body(b"infohash=abc");
        assert!(fields.get("infoHash").is_none());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info"), Some(log::LevelFilter::Info));
        assert_eq!(parse_log_level("off"), Some(log::LevelFilter::Off));
        assert_eq!(parse_log_level("trace"), Some(log::LevelFilter::Trace));
        assert_eq!(parse_log_level("INFO"), None);
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(format!("{}", error), "could not create config.toml file");
        assert_eq!(error.message(), "could not create config.toml file");
    }
}
