#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => ($crate::log!($crate::Level::Trace, $($arg)+))
}
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => ($crate::log!($crate::Level::Debug, $($arg)+))
}
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => ($crate::log!($crate::Level::Info, $($arg)+))
}
#[macro_export]
macro_rules! _warn {
    ($($arg:tt)+) => ($crate::log!($crate::Level::Warn, $($arg)+))
}
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => ($crate::log!($crate::Level::Error, $($arg)+))
}
#[macro_export]
macro_rules! log {
    ($lvl:expr, $($arg:tt)+) => ({
        let lvl = $lvl;
        if lvl <= $crate::max_level() {
            $crate::__elog::log!(target: module_path!(), lvl, $($arg)+);
        }
    })
}
#[macro_export]
macro_rules! log_enabled {
    ($lvl:expr) => {
        $lvl <= $crate::max_level() && $crate::__elog::log_enabled!($lvl)
    };
}
pub use crate::_warn as warn;

#[inline]
pub fn max_level() -> crate::LevelFilter {
    elog::max_level()
}

pub use super::init::init;
