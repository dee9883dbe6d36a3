use crate::{ByteSink, SinkOptions};

// 文本sink：与ByteSink共享写入、扩容逻辑，最小容量默认为64，读取时按utf8解码。
#[derive(Clone)]
pub struct TextSink {
    inner: ByteSink,
}

impl TextSink {
    #[inline]
    pub fn new() -> Self {
        Self::from_options("", SinkOptions::text())
    }
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_options("", SinkOptions::text().capacity(capacity))
    }
    #[inline]
    pub fn from_text(initial: &str) -> Self {
        Self::from_options(initial, SinkOptions::text())
    }
    #[inline]
    pub fn from_options(initial: &str, opts: SinkOptions) -> Self {
        Self {
            inner: ByteSink::from_options(initial, opts),
        }
    }
    #[inline]
    pub fn as_byte_sink(&self) -> &ByteSink {
        &self.inner
    }
    #[inline]
    pub fn into_inner(self) -> ByteSink {
        self.inner
    }
    #[inline]
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(self.inner.data())
    }
}

impl std::ops::Deref for TextSink {
    type Target = ByteSink;
    #[inline]
    fn deref(&self) -> &ByteSink {
        &self.inner
    }
}
impl std::ops::DerefMut for TextSink {
    #[inline]
    fn deref_mut(&mut self) -> &mut ByteSink {
        &mut self.inner
    }
}

impl Default for TextSink {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextSink {
    #[inline]
    fn from(initial: &str) -> Self {
        Self::from_text(initial)
    }
}

impl std::fmt::Write for TextSink {
    #[inline]
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.inner.write(s);
        Ok(())
    }
}

use std::fmt::{self, Debug, Display, Formatter};
impl Display for TextSink {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
impl Debug for TextSink {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "text {:?}", self.inner)
    }
}
