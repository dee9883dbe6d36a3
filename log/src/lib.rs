// 日志门面。未开启enable-log时，所有宏都编译为空操作，只保留参数的类型检查。
#[cfg(feature = "enable-log")]
mod enable;
#[cfg(feature = "enable-log")]
pub use enable::*;

#[cfg(not(feature = "enable-log"))]
mod disable;
#[cfg(not(feature = "enable-log"))]
pub use disable::*;

mod init;
pub use init::{level_filter, FILE_NAME};

#[doc(hidden)]
pub use elog as __elog;

pub type Level = elog::Level;
pub type LevelFilter = elog::LevelFilter;
