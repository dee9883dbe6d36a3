use proptest::prelude::*;
use rand::Rng;
use sink::{next_power_of_two, ByteSink, TextSink, BYTE_FLOOR};

proptest! {
    #[test]
    fn grow_matches_power_of_two(chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..200), 0..20)) {
        let mut sink = ByteSink::new();
        let mut total = 0;
        for c in &chunks {
            sink.write(c);
            total += c.len();
            prop_assert!(sink.cap() >= sink.len());
        }
        prop_assert_eq!(sink.len(), total);
        prop_assert_eq!(sink.cap(), next_power_of_two(total.max(BYTE_FLOOR)));
        let expected: Vec<u8> = chunks.concat();
        prop_assert_eq!(sink.data(), &expected[..]);
    }

    #[test]
    fn range_order_independent(src in prop::collection::vec(any::<u8>(), 0..64), a in -100isize..100, b in -100isize..100) {
        let mut l = ByteSink::from("prefix");
        let mut r = ByteSink::from("prefix");
        l.write_range(&src, a, b);
        r.write_range(&src, b, a);
        prop_assert_eq!(l.data(), r.data());
        prop_assert_eq!(l.cap(), r.cap());
    }

    #[test]
    fn negative_bounds_clamp_to_zero(src in "[a-z]{0,32}", a in -100isize..0, b in 0isize..40) {
        let mut sink = ByteSink::new();
        sink.write_range(&src, a, b);
        let end = (b as usize).min(src.len());
        prop_assert_eq!(sink.to_text_utf8(), &src[..end]);
    }

    #[test]
    fn empty_range_is_noop(src in prop::collection::vec(any::<u8>(), 0..64), at in -10isize..80) {
        let mut sink = ByteSink::from_bytes(vec![1u8; 32]);
        sink.write_range(&src, at, at);
        prop_assert_eq!(sink.len(), 32);
        prop_assert_eq!(sink.cap(), 32);
    }

    #[test]
    fn owned_bytes_round_trip(s in "\\PC{0,64}") {
        let mut sink = ByteSink::new();
        sink.write(&s);
        let again = ByteSink::from_bytes(sink.to_owned_bytes());
        prop_assert_eq!(again.to_text_utf8(), sink.to_text_utf8());
        prop_assert_eq!(again.to_text_utf8(), s);
    }

    #[test]
    fn code_points_round_trip(s in "\\PC{0,32}") {
        let mut text = TextSink::new();
        for c in s.chars() {
            text.write_code_point(c as u32);
        }
        prop_assert_eq!(text.to_string(), s);
    }

    #[test]
    fn reserve_never_below_len(len in 0usize..300, k in 0usize..300) {
        let mut sink = ByteSink::from_bytes(vec![b'r'; len]);
        sink.reserve(k, false);
        prop_assert_eq!(sink.cap(), len.max(BYTE_FLOOR.max(k)));
        prop_assert_eq!(sink.len(), len);
        sink.shrink();
        prop_assert_eq!(sink.cap(), len.max(BYTE_FLOOR));
        sink.clear();
        prop_assert_eq!(sink.cap(), BYTE_FLOOR);
        prop_assert_eq!(sink.len(), 0);
    }

    #[test]
    fn numbers_match_to_string(i in any::<i64>(), u in any::<u32>(), f in any::<f64>()) {
        let mut sink = ByteSink::new();
        sink.write_number(i);
        sink.write(" ");
        sink.write_number(u);
        sink.write(" ");
        sink.write_number(f);
        prop_assert_eq!(sink.to_text_utf8(), format!("{} {} {:?}", i, u, f));
    }
}

// 随机写入，与Vec对比
#[test]
fn random_writes() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let mut sink = ByteSink::new();
        let mut v: Vec<u8> = Vec::new();
        for _ in 0..rng.gen_range(1..50) {
            let chunk = tests::rnd_bytes(rng.gen_range(0..64));
            let start = rng.gen_range(-8isize..72);
            let end = rng.gen_range(-8isize..72);
            sink.write_range(&chunk, start, end);
            let r = sink::clamp_range(chunk.len(), start, end);
            v.extend_from_slice(&chunk[r]);
            assert!(sink.cap() >= sink.len());
            assert!(sink.cap().is_power_of_two());
        }
        assert_eq!(sink.data(), &v[..]);
        assert_eq!(&*sink.to_owned_bytes(), &v[..]);
    }
}

#[test]
fn random_text_lines() {
    let mut text = TextSink::new();
    let mut s = String::new();
    for i in 0..64 {
        let line = tests::rnd_text(i * 3);
        text.write_ln(&line);
        s += &line;
        s.push('\n');
    }
    assert_eq!(text.to_string(), s);
    assert_eq!(text.cap(), next_power_of_two(s.len()));
}
