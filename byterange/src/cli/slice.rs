use anyhow::{Context, Result};
use byterange_core::config::ServeConfig;
use byterange_core::serve::handle_range_request;
use bytes::Bytes;
use http::StatusCode;
use std::path::Path;
use std::process::ExitCode;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

pub async fn run(
    file: &Path,
    range: Option<&str>,
    config: Option<&Path>,
    output: Option<&Path>,
) -> Result<StatusCode> {
    let config = match config {
        Some(path) => ServeConfig::from_file(path)?,
        None => ServeConfig::default(),
    };

    let data = fs::read(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;

    let res = handle_range_request(Bytes::from(data), range, &config);

    for (name, value) in &res.headers {
        info!(
            header = %name,
            value = value.to_str().unwrap_or("<binary>"),
            "response header"
        );
    }
    info!(status = res.status.as_u16(), body_len = res.body.len(), "response");

    match output {
        Some(path) => fs::write(path, &res.body)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(&res.body)
                .await
                .context("failed to write body to stdout")?;
            stdout.flush().await.context("failed to flush stdout")?;
        }
    }

    Ok(res.status)
}

/// 200 and 206 succeed; 413 and 416 fail.
pub fn exit_code(status: StatusCode) -> ExitCode {
    if status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
