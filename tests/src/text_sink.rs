use sink::{SinkOptions, TextSink, TEXT_FLOOR};

#[test]
fn text_defaults() {
    let text = TextSink::new();
    assert_eq!(text.len(), 0);
    assert_eq!(text.cap(), TEXT_FLOOR);
    assert_eq!(text.floor(), 64);
    assert_eq!(text.to_string(), "");

    let text = TextSink::default();
    assert_eq!(text.cap(), 64);
    let text = TextSink::with_capacity(10);
    assert_eq!(text.cap(), 64);
    let text = TextSink::with_capacity(200);
    assert_eq!(text.cap(), 200);
}

#[test]
fn text_write_ln() {
    let mut text = TextSink::from("hello");
    text.write_ln(",");
    text.write_ln("world");
    assert_eq!(text.to_string(), "hello,\nworld\n");
    assert_eq!(text.len(), 13);
    assert_eq!(text.cap(), 64);
}

#[test]
fn text_grow_and_clear() {
    let mut text = TextSink::new();
    let line = "0123456789";
    for _ in 0..10 {
        text.write_ln(line);
    }
    assert_eq!(text.len(), 110);
    assert_eq!(text.cap(), 128);
    text.shrink();
    assert_eq!(text.cap(), 110);
    text.clear();
    assert_eq!(text.len(), 0);
    assert_eq!(text.cap(), 64);
}

#[test]
fn text_fmt_write() {
    use std::fmt::Write;
    let mut text = TextSink::new();
    write!(text, "{}:{}", "port", 8080).expect("fmt");
    text.write_number(-1i32);
    text.write_code_point(0x1F525);
    assert_eq!(text.to_string(), "port:8080-1🔥");
    assert_eq!(text.text(), "port:8080-1🔥");
    assert_eq!(text.as_byte_sink().len(), "port:8080-1🔥".len());
}

#[test]
fn text_options() {
    let opts = SinkOptions::text().floor(16);
    let mut text = TextSink::from_options("abc", opts);
    assert_eq!(text.cap(), 64);
    text.clear();
    assert_eq!(text.cap(), 16);

    let inner = TextSink::from_text("xyz").into_inner();
    assert_eq!(inner.cap(), 64);
    assert_eq!(inner.to_text_utf8(), "xyz");
}
