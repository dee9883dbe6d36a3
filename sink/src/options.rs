use serde::Deserialize;

use crate::{BYTE_FLOOR, TEXT_FLOOR};

// 构造sink时的配置。floor为最小容量，capacity为初始容量（小于floor时按floor）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SinkOptions {
    pub floor: usize,
    pub capacity: usize,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self::bytes()
    }
}

impl SinkOptions {
    pub const fn bytes() -> Self {
        Self {
            floor: BYTE_FLOOR,
            capacity: BYTE_FLOOR,
        }
    }
    pub const fn text() -> Self {
        Self {
            floor: TEXT_FLOOR,
            capacity: TEXT_FLOOR,
        }
    }
    #[must_use]
    pub fn floor(mut self, floor: usize) -> Self {
        self.floor = floor;
        self
    }
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
