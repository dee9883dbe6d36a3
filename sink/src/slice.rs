use std::ops::Range;

// 写入区间的规整：
// 1. start、end都截断到[0, len]。负数截断为0，不是从尾部倒数
// 2. start > end 时交换，结果与参数顺序无关
#[inline]
pub fn clamp_range(len: usize, start: isize, end: isize) -> Range<usize> {
    let clamp = |v: isize| (v.max(0) as usize).min(len);
    let (from, end) = (clamp(start), clamp(end));
    from.min(end)..from.max(end)
}
