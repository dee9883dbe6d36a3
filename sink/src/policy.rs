// 字节sink的最小容量
pub const BYTE_FLOOR: usize = 32;
// 文本sink的最小容量
pub const TEXT_FLOOR: usize = 64;

// 大于等于n的最小的2的指数。n为0时返回1。
#[inline(always)]
pub const fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

// sink的容量策略：
// 1. 扩容只在写入前触发，扩容后的容量为 len + reserve 向上取2的指数
// 2. 不会隐式缩容。缩容、reserve只由调用方显式触发，且不小于floor与len
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapPolicy {
    floor: usize,
}

impl CapPolicy {
    #[inline]
    pub fn new(floor: usize) -> Self {
        // floor为0时，2的指数扩容无意义
        Self {
            floor: floor.max(1),
        }
    }
    #[inline]
    pub fn floor(&self) -> usize {
        self.floor
    }
    #[inline(always)]
    pub fn need_grow(&self, len: usize, cap: usize, reserve: usize) -> bool {
        len.saturating_add(reserve) > cap
    }
    #[inline]
    pub fn grow(&self, len: usize, cap: usize, reserve: usize) -> usize {
        let new = next_power_of_two(len + reserve);
        log::debug!("grow: {} + {} > {} => {} {}", len, reserve, cap, new, self);
        new
    }
    // 溢出时返回None
    #[inline]
    pub fn try_grow(&self, len: usize, cap: usize, reserve: usize) -> Option<usize> {
        let new = len.checked_add(reserve)?.checked_next_power_of_two()?;
        log::debug!("try grow: {} + {} > {} => {} {}", len, reserve, cap, new, self);
        Some(new)
    }
    // 显式指定容量：不小于floor，不小于已写入的长度。不取2的指数。
    #[inline]
    pub fn reserve(&self, len: usize, min: usize) -> usize {
        len.max(self.floor.max(min))
    }
    #[inline]
    pub fn shrink(&self, len: usize) -> usize {
        len.max(self.floor)
    }
}

use std::fmt::{self, Debug, Display, Formatter};
impl Display for CapPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "policy:(floor:{})", self.floor)
    }
}
impl Debug for CapPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
