//! Upload storage
//!
//! Uploaded files land flat in the configured upload directory under a
//! sanitised version of the client-supplied name. The path recorded on the
//! song row is relative: `uploads/<name>`.

use std::path::{Path, PathBuf};

use tokio::fs;
use unicode_normalization::UnicodeNormalization;

/// Prefix of the stored `file_path`, also the URL prefix files are served under
pub const UPLOADS_PREFIX: &str = "uploads";

/// Reduce a client-supplied filename to a safe, flat name.
///
/// The name is NFKD-decomposed so accented letters keep their base letter,
/// then remaining non-ASCII characters are dropped, path separators count as whitespace,
/// whitespace runs become `_`, anything outside `[A-Za-z0-9_.-]` is removed,
/// and leading/trailing `.`/`_` are trimmed. Returns `None` if nothing
/// usable is left.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let spaced: String = raw
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Relative path recorded on the song row
pub fn stored_path(filename: &str) -> String {
    format!("{}/{}", UPLOADS_PREFIX, filename)
}

/// Write an upload to `<upload_dir>/<filename>`, overwriting any previous file
pub async fn save(upload_dir: &Path, filename: &str, data: &[u8]) -> std::io::Result<PathBuf> {
    fs::create_dir_all(upload_dir).await?;

    let target = upload_dir.join(filename);
    fs::write(&target, data).await?;

    tracing::info!("Saved upload {} ({} bytes)", target.display(), data.len());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_name() {
        assert_eq!(sanitize_filename("song.mp3").as_deref(), Some("song.mp3"));
        assert_eq!(
            sanitize_filename("My Song - Live.mp3").as_deref(),
            Some("My_Song_-_Live.mp3")
        );
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("etc_passwd")
        );
        assert_eq!(
            sanitize_filename(r"C:\music\track 01.flac").as_deref(),
            Some("C_music_track_01.flac")
        );
    }

    #[test]
    fn test_sanitize_drops_unsafe_characters() {
        assert_eq!(sanitize_filename("héllo?.mp3").as_deref(), Some("hello.mp3"));
        assert_eq!(sanitize_filename(".hidden").as_deref(), Some("hidden"));
    }

    #[test]
    fn test_sanitize_transliterates_accents() {
        assert_eq!(
            sanitize_filename("Café Señor - Über.mp3").as_deref(),
            Some("Cafe_Senor_-_Uber.mp3")
        );
        // Compatibility forms fold to plain ASCII
        assert_eq!(sanitize_filename("ﬁle².mp3").as_deref(), Some("file2.mp3"));
    }

    #[test]
    fn test_sanitize_rejects_empty() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("..."), None);
        assert_eq!(sanitize_filename("日本語"), None);
    }

    #[test]
    fn test_stored_path() {
        assert_eq!(stored_path("a.mp3"), "uploads/a.mp3");
    }

    #[tokio::test]
    async fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().join("uploads");

        let target = save(&upload_dir, "a.mp3", b"ID3").await.unwrap();

        assert_eq!(target, upload_dir.join("a.mp3"));
        assert_eq!(std::fs::read(target).unwrap(), b"ID3");
    }
}
