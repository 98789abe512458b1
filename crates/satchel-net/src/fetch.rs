use std::path::Path;

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::client::HttpClient;
use crate::error::{NetError, Result};

/// Downloads `url` into a newly created file at `destination`, returning
/// the number of bytes written.
///
/// The destination file is created before the first chunk arrives; if the
/// body stream fails midway, the partially written file is left in place
/// for the caller to deal with.
pub async fn download_to_file<C: HttpClient>(
    client: &C,
    url: &str,
    destination: impl AsRef<Path>,
) -> Result<u64> {
    let destination = destination.as_ref();
    let mut stream = client
        .stream(url)
        .await
        .map_err(|e| NetError::Request(e.to_string()))?;
    let mut file = tokio::fs::File::create(destination)
        .await
        .map_err(|source| NetError::Create {
            path: destination.to_path_buf(),
            source,
        })?;

    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| NetError::Request(e.to_string()))?;
        file.write_all(&chunk)
            .await
            .map_err(|source| NetError::Write {
                path: destination.to_path_buf(),
                source,
            })?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(|source| NetError::Write {
        path: destination.to_path_buf(),
        source,
    })?;
    Ok(written)
}
