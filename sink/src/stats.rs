use std::sync::atomic::{AtomicUsize, Ordering::*};

// 所有sink当前持有的容量（字节）。未开启heap-stats时恒为0。
pub static BUF_SINK: HeapCounter = HeapCounter::new();

pub struct HeapCounter {
    bytes: AtomicUsize,
}

impl HeapCounter {
    pub const fn new() -> Self {
        Self {
            bytes: AtomicUsize::new(0),
        }
    }
    #[inline(always)]
    pub fn incr_by(&self, n: usize) {
        if cfg!(feature = "heap-stats") {
            self.bytes.fetch_add(n, Relaxed);
        }
    }
    #[inline(always)]
    pub fn decr_by(&self, n: usize) {
        if cfg!(feature = "heap-stats") {
            self.bytes.fetch_sub(n, Relaxed);
        }
    }
    #[inline]
    pub fn get(&self) -> usize {
        self.bytes.load(Relaxed)
    }
}

impl Default for HeapCounter {
    fn default() -> Self {
        Self::new()
    }
}

use std::fmt::{self, Display, Formatter};
impl Display for HeapCounter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "sink heap:{}", self.get())
    }
}
