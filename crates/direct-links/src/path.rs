//! Turning local paths into the `path` query parameter the daemon expects.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters sent through unescaped.
///
/// The daemon matches on these literally. A space passes through here
/// untouched, but URL serialization still sends it as `%20`.
const PATH_QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'[')
    .remove(b']')
    .remove(b'(')
    .remove(b')')
    .remove(b',')
    .remove(b'-')
    .remove(b'_')
    .remove(b' ')
    .remove(b'.')
    .remove(b'~');

/// Path relative to the filespace root.
///
/// `mount_point` is matched as a plain string prefix and must already have
/// its trailing separators removed.
pub fn relative_path<'a>(path: &'a str, mount_point: &str) -> &'a str {
    path.strip_prefix(mount_point)
        .unwrap_or(path)
        .trim_start_matches('/')
}

pub fn encode_path(relative: &str) -> String {
    utf8_percent_encode(relative, PATH_QUERY).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    const MOUNT: &str = "/Volumes/filespace";

    #[test]
    fn test_relative_path_under_mount() {
        assert_eq!(
            relative_path("/Volumes/filespace/path/to/file1.txt", MOUNT),
            "path/to/file1.txt"
        );
        assert_eq!(
            relative_path("/Volumes/filespace//double/slash", MOUNT),
            "double/slash"
        );
        assert_eq!(relative_path("/Volumes/filespace", MOUNT), "");
    }

    #[test]
    fn test_relative_path_outside_mount() {
        assert_eq!(relative_path("/other/place/file", MOUNT), "other/place/file");
        assert_eq!(relative_path("///rooted", MOUNT), "rooted");
        assert_eq!(relative_path("already/relative", MOUNT), "already/relative");
    }

    #[test]
    fn test_relative_path_is_plain_prefix_match() {
        assert_eq!(relative_path("/Volumes/filespace2/a", MOUNT), "2/a");
    }

    #[test]
    fn test_relative_path_empty_mount() {
        assert_eq!(relative_path("/a/b", ""), "a/b");
    }

    #[test]
    fn test_encode_keeps_safe_characters() {
        let input = "path to/file2[v1] (copy),final-draft_01.pdf";
        assert_eq!(encode_path(input), input);
    }

    #[test]
    fn test_encode_escapes_everything_else() {
        assert_eq!(encode_path("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_path("q?#%"), "q%3F%23%25");
        assert_eq!(encode_path("plus+sign"), "plus%2Bsign");
        assert_eq!(encode_path("café"), "caf%C3%A9");
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let samples = [
            "path/to/file1.txt",
            "path to file3.doc",
            "weird/na#me?&=%/ünïcødé [1].mov",
            "",
        ];
        for sample in samples {
            let encoded = encode_path(sample);
            let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
            assert_eq!(decoded, sample);
            for safe in ["%2F", "%5B", "%5D", "%28", "%29", "%2C", "%2D", "%5F", "%20", "%2E"] {
                assert!(!encoded.contains(safe), "{encoded} contains {safe}");
            }
        }
    }
}
