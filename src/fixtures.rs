#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// Quotes, comments, and quote characters nested inside other quotes.
    pub const TRICKY_INI: &str = r##"[section1]
# This is a comment
key1 = "quoted value"
key2 = 'single quoted'
key3 = value with # comment

[tricky_section]
key1='value1"more' # comment
key2="value' some more "
key3="#value some more'"
"##;

    /// Write `content` to `name` inside a fresh temp dir.
    ///
    /// Keep the returned `TempDir` alive for as long as the file is needed.
    pub fn write_file(name: &str, content: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn write_file_round_trips_bytes() {
        let (_dir, path) = write_file("x.env", b"A=\xff");
        assert_eq!(fs::read(&path).unwrap(), b"A=\xff");
    }
}
