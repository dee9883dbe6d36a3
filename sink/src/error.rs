#[derive(Debug, thiserror::Error)]
pub enum Error {
    // 扩容失败。只在try_*接口返回，其他接口直接abort
    #[error("alloc failed: requested {requested} bytes")]
    Alloc { requested: usize },
    #[error("invalid utf8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("invalid utf16 at byte {at}")]
    Utf16 { at: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
