//! Line-aligned, size-bounded reads of append-only log files.
//!
//! Files within the budget are returned whole. Larger files are reduced to their
//! opening lines and their most recent lines: the first and last halves of the
//! budget, each widened by [`BOUNDARY_MARGIN`], then trimmed back to whole lines.
//! Trimming happens on `\n` bytes, which never occur inside a multi-byte UTF-8
//! sequence, so the excerpt is never cut through a character.

use std::io::{self, SeekFrom};
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

/// Extra bytes read past each half of the budget
pub const BOUNDARY_MARGIN: u64 = 64;

/// Read `path` as text, bounded to roughly `max_bytes`.
///
/// Returns the full content when the file fits the budget; otherwise the head and
/// tail excerpts joined by a newline. An unreadable file yields an empty string.
pub async fn read_bounded(path: &Path, max_bytes: u64) -> String {
    match try_read_bounded(path, max_bytes).await {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(path = ?path, error = %e, "bounded read failed");
            String::new()
        }
    }
}

async fn try_read_bounded(path: &Path, max_bytes: u64) -> io::Result<String> {
    let mut file = File::open(path).await?;
    let size = file.metadata().await?.len();

    if size <= max_bytes {
        let mut buf = Vec::with_capacity(size as usize);
        file.read_to_end(&mut buf).await?;
        return Ok(into_text(buf));
    }

    let half = max_bytes / 2;
    let window = half + BOUNDARY_MARGIN;

    let head = read_range(&mut file, 0, window.min(size)).await?;
    let (head_lines, resume_at) = match head.iter().rposition(|&b| b == b'\n') {
        Some(pos) => (&head[..pos], pos as u64 + 1),
        None => (&head[..0], 0),
    };

    // The tail never re-reads lines already kept in the head
    let tail_start = size.saturating_sub(window).max(resume_at);
    let tail = read_range(&mut file, tail_start, size - tail_start).await?;
    let tail_lines = if resume_at > 0 && tail_start == resume_at {
        &tail[..]
    } else {
        match tail.iter().position(|&b| b == b'\n') {
            Some(pos) => &tail[pos + 1..],
            None => &tail[..0],
        }
    };

    tracing::debug!(
        path = ?path,
        size,
        kept = head_lines.len() + tail_lines.len(),
        "read bounded excerpt of oversized file"
    );

    let mut excerpt = Vec::with_capacity(head_lines.len() + 1 + tail_lines.len());
    excerpt.extend_from_slice(head_lines);
    excerpt.push(b'\n');
    excerpt.extend_from_slice(tail_lines);
    Ok(into_text(excerpt))
}

async fn read_range(file: &mut File, start: u64, len: u64) -> io::Result<Vec<u8>> {
    file.seek(SeekFrom::Start(start)).await?;
    let mut buf = Vec::with_capacity(len as usize);
    file.take(len).read_to_end(&mut buf).await?;
    Ok(buf)
}

fn into_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
