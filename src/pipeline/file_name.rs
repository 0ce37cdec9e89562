use chrono::{DateTime, SecondsFormat, Utc};

const EXTENSION: &str = ".gpx";
const REPLACEMENT: char = '-';
const MAX_FILE_NAME_BYTES: usize = 255;

/// Builds `<start time> <track name>.gpx` with every character that is unsafe in a file name
/// replaced. Runs of unsafe characters collapse into a single replacement.
pub fn build_file_name(start_time: &DateTime<Utc>, track_name: &str) -> String {
    let stem = format!("{} {}", start_time.to_rfc3339_opts(SecondsFormat::Secs, true), track_name);
    let mut file_name = sanitize(stem.trim_end());
    truncate_at_char_boundary(&mut file_name, MAX_FILE_NAME_BYTES - EXTENSION.len());
    file_name.push_str(EXTENSION);
    file_name
}

fn is_unsafe(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '<' | '>' | '"' | '|' | '?' | '*') || c.is_control()
}

fn sanitize(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut replaced = false;
    for c in value.chars() {
        if !is_unsafe(c) {
            result.push(c);
            replaced = false;
        } else if !replaced {
            result.push(REPLACEMENT);
            replaced = true;
        }
    }
    result
}

fn truncate_at_char_boundary(value: &mut String, max_bytes: usize) {
    if value.len() <= max_bytes {
        return;
    }
    let mut end = max_bytes;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value.truncate(end);
}
