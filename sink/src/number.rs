// 可以按十进制文本写入sink的数值类型。
//
// MAX_WIDTH 为格式化后的最大长度（含符号），写入前按此预留容量，
// 实际写入的长度以格式化结果为准。
pub trait Number: Copy + private::Sealed {
    const MAX_WIDTH: usize;
    // 以十进制文本访问数值，visit可能被调用多次，按顺序拼接即为完整文本。
    fn visit<F: FnMut(&[u8])>(self, visit: F);
}

// 整数按字节宽度预留：1字节 -> 4，2字节 -> 6，4字节 -> 11，8字节 -> 21，16字节 -> 40
const fn int_width(size: usize) -> usize {
    match size {
        1 => 4,
        2 => 6,
        4 => 11,
        8 => 21,
        _ => 40,
    }
}
const FLOAT_WIDTH: usize = 32;

macro_rules! impl_integer {
    ($($t:ty),+) => {
        $(
        impl private::Sealed for $t {}
        impl Number for $t {
            const MAX_WIDTH: usize = int_width(std::mem::size_of::<$t>());
            #[inline]
            fn visit<F: FnMut(&[u8])>(self, mut visit: F) {
                let mut buf = itoa::Buffer::new();
                visit(buf.format(self).as_bytes());
            }
        }
        )+
    };
}

// 浮点数使用最短可还原的十进制表示。指数过大或过小时使用科学计数法，如 -2.220446049250313e-16
macro_rules! impl_float {
    ($($t:ty),+) => {
        $(
        impl private::Sealed for $t {}
        impl Number for $t {
            const MAX_WIDTH: usize = FLOAT_WIDTH;
            #[inline]
            fn visit<F: FnMut(&[u8])>(self, visit: F) {
                use std::fmt::Write;
                // Visitor::write_str不会失败
                let _ = write!(Visitor(visit), "{:?}", self);
            }
        }
        )+
    };
}

impl_integer!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
impl_float!(f32, f64);

struct Visitor<F>(F);
impl<F: FnMut(&[u8])> std::fmt::Write for Visitor<F> {
    #[inline]
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        (self.0)(s.as_bytes());
        Ok(())
    }
}

mod private {
    pub trait Sealed {}
}
