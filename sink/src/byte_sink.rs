use bytes::Bytes;

use crate::{
    clamp_range, utf8, CapPolicy, Error, Number, Result, SinkOptions, BUF_SINK, BYTE_FLOOR,
};

// 只追加的字节缓冲。
// data.len() 即写入游标，[0, len) 为已写入的数据，之后的内存不会被读取。
// cap 为逻辑容量：始终 >= floor，>= len，且 data.capacity() >= cap。
// 写入时按需扩容为2的指数，不会隐式缩容。
pub struct ByteSink {
    data: Vec<u8>,
    cap: usize,
    policy: CapPolicy,
}

impl ByteSink {
    #[inline]
    pub fn new() -> Self {
        Self::from_parts(&[], BYTE_FLOOR, BYTE_FLOOR)
    }
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(&[], capacity, BYTE_FLOOR)
    }
    #[inline]
    pub fn from_bytes<D: AsRef<[u8]>>(initial: D) -> Self {
        Self::from_parts(initial.as_ref(), BYTE_FLOOR, BYTE_FLOOR)
    }
    #[inline]
    pub fn from_options<D: AsRef<[u8]>>(initial: D, opts: SinkOptions) -> Self {
        Self::from_parts(initial.as_ref(), opts.capacity, opts.floor)
    }
    // 容量为 max(initial.len(), max(floor, capacity))
    pub fn from_parts(initial: &[u8], capacity: usize, floor: usize) -> Self {
        let policy = CapPolicy::new(floor);
        let cap = policy.reserve(initial.len(), capacity);
        let mut data = Vec::with_capacity(cap);
        data.extend_from_slice(initial);
        BUF_SINK.incr_by(cap);
        Self { data, cap, policy }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }
    #[inline]
    pub fn floor(&self) -> usize {
        self.policy.floor()
    }
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn write<D: AsRef<[u8]>>(&mut self, src: D) {
        let src = src.as_ref();
        if src.is_empty() {
            return;
        }
        self.grow(src.len());
        debug_assert!(self.cap - self.len() >= src.len());
        self.data.extend_from_slice(src);
    }
    // 写入src[start..end)，区间规整见clamp_range。规整后为空则不做任何事。
    #[inline]
    pub fn write_range<D: AsRef<[u8]>>(&mut self, src: D, start: isize, end: isize) {
        let src = src.as_ref();
        self.write(&src[clamp_range(src.len(), start, end)]);
    }
    pub fn try_write<D: AsRef<[u8]>>(&mut self, src: D) -> Result<()> {
        let src = src.as_ref();
        if src.is_empty() {
            return Ok(());
        }
        self.try_grow(src.len())?;
        self.data.extend_from_slice(src);
        Ok(())
    }
    #[inline]
    pub fn write_code_point(&mut self, cp: u32) {
        let mut buf = [0u8; 4];
        self.write(utf8::encode_code_point(cp, &mut buf));
    }
    #[inline]
    pub fn write_ln<D: AsRef<[u8]>>(&mut self, text: D) {
        self.write(text);
        self.write(b"\n");
    }
    // 先按类型的最大宽度预留，再写入十进制文本。
    #[inline]
    pub fn write_number<N: Number>(&mut self, num: N) {
        self.grow(N::MAX_WIDTH);
        num.visit(|s| self.write(s));
    }

    // 精确调整容量为 max(len, max(floor, min))，可能扩容也可能缩容。
    // reset为true时先清空已写入的数据。
    pub fn reserve(&mut self, min: usize, reset: bool) {
        if reset {
            self.data.clear();
        }
        let new = self.policy.reserve(self.len(), min);
        self.resize(new);
    }
    pub fn try_reserve(&mut self, min: usize, reset: bool) -> Result<()> {
        if reset {
            self.data.clear();
        }
        let new = self.policy.reserve(self.len(), min);
        self.try_resize(new)
    }
    #[inline]
    pub fn shrink(&mut self) {
        let new = self.policy.shrink(self.len());
        self.resize(new);
    }
    #[inline]
    pub fn clear(&mut self) {
        self.reserve(0, true);
    }

    // 非法的utf8以U+FFFD替代
    #[inline]
    pub fn to_text_utf8(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
    #[inline]
    pub fn try_to_text_utf8(&self) -> Result<&str> {
        Ok(std::str::from_utf8(&self.data)?)
    }
    // 按小端utf16解码
    #[inline]
    pub fn to_text_utf16(&self) -> String {
        utf8::utf16_lossy(&self.data)
    }
    #[inline]
    pub fn try_to_text_utf16(&self) -> Result<String> {
        utf8::utf16(&self.data)
    }
    #[inline]
    pub fn to_owned_bytes(&self) -> Box<[u8]> {
        self.data.as_slice().into()
    }
    #[inline]
    pub fn to_raw_buffer(&self) -> Bytes {
        Bytes::copy_from_slice(&self.data)
    }
    // 不复制，直接把已写入的数据转为Bytes
    #[inline]
    pub fn into_bytes(mut self) -> Bytes {
        Bytes::from(std::mem::take(&mut self.data))
    }

    #[inline]
    fn grow(&mut self, reserve: usize) {
        let len = self.len();
        if self.policy.need_grow(len, self.cap, reserve) {
            let new = self.policy.grow(len, self.cap, reserve);
            self.resize(new);
        }
    }
    fn try_grow(&mut self, reserve: usize) -> Result<()> {
        let len = self.len();
        if self.policy.need_grow(len, self.cap, reserve) {
            let new = self
                .policy
                .try_grow(len, self.cap, reserve)
                .ok_or(Error::Alloc {
                    requested: len.saturating_add(reserve),
                })?;
            self.try_resize(new)?;
        }
        Ok(())
    }
    // new >= len。扩容时由Vec负责复制已写入的数据并释放老的内存。
    fn resize(&mut self, new: usize) {
        assert!(new >= self.len(), "{self:?} => {new}");
        if new == self.cap {
            return;
        }
        if new > self.data.capacity() {
            self.data.reserve_exact(new - self.len());
        } else {
            self.data.shrink_to(new);
        }
        log::trace!("resize: {} => {} {}", self.cap, new, self);
        self.account(new);
    }
    fn try_resize(&mut self, new: usize) -> Result<()> {
        debug_assert!(new >= self.len());
        if new == self.cap {
            return Ok(());
        }
        if new > self.data.capacity() {
            self.data
                .try_reserve_exact(new - self.len())
                .map_err(|_| Error::Alloc { requested: new })?;
        } else {
            self.data.shrink_to(new);
        }
        self.account(new);
        Ok(())
    }
    #[inline(always)]
    fn account(&mut self, new: usize) {
        BUF_SINK.incr_by(new);
        BUF_SINK.decr_by(self.cap);
        self.cap = new;
    }
}

impl Default for ByteSink {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ByteSink {
    fn clone(&self) -> Self {
        Self::from_parts(&self.data, self.cap, self.floor())
    }
}

impl Drop for ByteSink {
    #[inline]
    fn drop(&mut self) {
        BUF_SINK.decr_by(self.cap);
    }
}

impl From<&[u8]> for ByteSink {
    #[inline]
    fn from(initial: &[u8]) -> Self {
        Self::from_bytes(initial)
    }
}
impl From<&str> for ByteSink {
    #[inline]
    fn from(initial: &str) -> Self {
        Self::from_bytes(initial)
    }
}
// 复用Vec的内存，容量按floor规整
impl From<Vec<u8>> for ByteSink {
    fn from(data: Vec<u8>) -> Self {
        let mut sink = Self {
            data,
            cap: 0,
            policy: CapPolicy::new(BYTE_FLOOR),
        };
        sink.shrink();
        sink
    }
}

impl std::ops::Deref for ByteSink {
    type Target = [u8];
    #[inline]
    fn deref(&self) -> &[u8] {
        &self.data
    }
}
impl AsRef<[u8]> for ByteSink {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl std::io::Write for ByteSink {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.try_write(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::OutOfMemory, e))?;
        Ok(buf.len())
    }
    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

use std::fmt::{self, Debug, Display, Formatter};
impl Display for ByteSink {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sink:(len:{} cap:{} floor:{})",
            self.len(),
            self.cap,
            self.floor()
        )
    }
}
impl Debug for ByteSink {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sink:(ptr:{:#x} len:{} cap:{} floor:{})",
            self.data.as_ptr() as usize,
            self.len(),
            self.cap,
            self.floor()
        )
    }
}
