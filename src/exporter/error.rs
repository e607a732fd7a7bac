// ==========================================
// 邮轮部署排期系统 - 导出模块错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("导出格式不支持: {0}（仅支持 .xlsx/.csv）")]
    UnsupportedFormat(String),

    #[error("导出路径为空")]
    EmptyPath,

    #[error("文件写入失败: {0}")]
    WriteError(String),

    #[error("Excel 写入失败: {0}")]
    XlsxError(String),

    #[error("CSV 写入失败: {0}")]
    CsvError(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::WriteError(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvError(err.to_string())
    }
}

impl From<umya_spreadsheet::XlsxError> for ExportError {
    fn from(err: umya_spreadsheet::XlsxError) -> Self {
        ExportError::XlsxError(err.to_string())
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
