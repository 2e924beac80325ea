//! 文档文本提取 - 业务能力层
//!
//! 只负责"把一个文件读成纯文本"，单次尝试，不重试。

use crate::error::{AppError, AppResult, ExtractionError};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// 读取文档的全部纯文本
///
/// 支持 `.pdf`（文字层）以及 `.txt` / `.md`（UTF-8）。
pub async fn extract_text(path: &Path) -> AppResult<String> {
    let path_str = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let bytes = fs::read(path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let text = match extension.as_str() {
        "pdf" => decode_pdf(bytes, &path_str).await?,
        "txt" | "md" => String::from_utf8(bytes).map_err(|e| ExtractionError::InvalidUtf8 {
            path: path_str.clone(),
            source: e,
        })?,
        _ => {
            return Err(ExtractionError::UnsupportedFormat {
                path: path_str,
                extension,
            }
            .into())
        }
    };

    debug!("读取文本 {} ({} 字符)", path_str, text.chars().count());
    Ok(text)
}

/// PDF 解码放在阻塞线程池中，解码器 panic 也会转成错误
async fn decode_pdf(bytes: Vec<u8>, path_str: &str) -> AppResult<String> {
    let decoded = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ExtractionError::PdfDecodeFailed {
            path: path_str.to_string(),
            message: format!("解码任务异常终止: {}", e),
        })?;

    decoded.map_err(|e| {
        ExtractionError::PdfDecodeFailed {
            path: path_str.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
