use std::io;
use std::path::Path;
use tokio::fs as async_fs;

/// Read a whole file, replacing invalid UTF-8 sequences instead of failing
pub async fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = async_fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Non-blank lines, in file order
pub fn non_blank_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
