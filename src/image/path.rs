use std::path::PathBuf;

const FILE_URI_PREFIX: &str = "file://";

/// Turns a path that may carry a `file://` prefix into a plain filesystem path.
///
/// Pure string transform, applying it twice yields the same result as
/// applying it once.
pub fn clean_file_path(path: &str) -> String {
    let mut clean_path = path;
    while let Some(stripped) = clean_path.strip_prefix(FILE_URI_PREFIX) {
        clean_path = stripped;
    }
    strip_leading_separator_before_drive(clean_path).to_owned()
}

pub fn clean_path_buf(path: &str) -> PathBuf {
    PathBuf::from(clean_file_path(path))
}

// "/C:/images/a.png" -> "C:/images/a.png"
#[cfg(windows)]
fn strip_leading_separator_before_drive(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':'
    {
        &path[1..]
    } else {
        path
    }
}

#[cfg(not(windows))]
fn strip_leading_separator_before_drive(path: &str) -> &str {
    path
}
