//! Tests for builtin functions

use super::*;
use crate::error::RuntimeError;
use std::io::Cursor;

#[test]
fn test_range_basic() {
    let mut r = range(5).iter();
    assert_eq!(r.next(), Some(0));
    assert_eq!(r.next(), Some(1));
    assert_eq!(r.next(), Some(2));
    assert_eq!(r.next(), Some(3));
    assert_eq!(r.next(), Some(4));
    assert_eq!(r.next(), None);
    assert_eq!(r.next(), None);
}

#[test]
fn test_range_step() {
    let r = range_step(0, 10, 2).unwrap();
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
}

#[test]
fn test_range_negative_step() {
    let r = range_step(10, 0, -2).unwrap();
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![10, 8, 6, 4, 2]);
    assert_eq!(r.len(), 5);
}

#[test]
fn test_range_default_step() {
    let r = RangeSequence::between(3, 6);
    assert_eq!(r.step(), 1);
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    assert!(RangeSequence::between(6, 3).is_exhausted());
}

#[test]
fn test_range_non_positive_stop_is_empty() {
    assert_eq!(range(0).iter().count(), 0);
    assert_eq!(range(-3).iter().count(), 0);
    assert!(range(-3).is_exhausted());
}

#[test]
fn test_range_equal_bounds() {
    let r = range_step(0, 0, 1).unwrap();
    assert!(r.is_exhausted());
    assert!(r.is_empty());
    assert!(range(0).is_exhausted());
    let r = range_step(5, 5, -1).unwrap();
    assert!(r.is_exhausted());
    assert_eq!(r.iter().next(), None);
}

#[test]
fn test_range_direction_conflict() {
    let up_with_negative = range_step(0, 10, -1).unwrap();
    assert!(up_with_negative.is_exhausted());
    assert_eq!(up_with_negative.iter().count(), 0);

    let down_with_positive = range_step(10, 0, 3).unwrap();
    assert!(down_with_positive.is_exhausted());
    assert_eq!(down_with_positive.len(), 0);
}

#[test]
fn test_range_zero_step() {
    for (start, stop) in [(0, 10), (10, 0), (3, 3)] {
        match range_step(start, stop, 0) {
            Err(RuntimeError::InvalidStep { start: s, stop: e }) => {
                assert_eq!((s, e), (start, stop));
            }
            other => panic!("expected InvalidStep, got {other:?}"),
        }
    }
}

#[test]
fn test_range_restartable() {
    let first: Vec<_> = range_step(2, 10, 3).unwrap().into_iter().collect();
    let second: Vec<_> = range_step(2, 10, 3).unwrap().into_iter().collect();
    assert_eq!(first, vec![2, 5, 8]);
    assert_eq!(first, second);

    let r = range_step(2, 10, 3).unwrap();
    let mut a = r.iter();
    let mut b = r.iter();
    assert_eq!(a.next(), Some(2));
    assert_eq!(a.next(), Some(5));
    assert_eq!(b.next(), Some(2));
    assert_eq!(r.start(), 2);
    assert_eq!(r.stop(), 10);
    assert_eq!(r.step(), 3);
}

#[test]
fn test_range_step_larger_than_span() {
    assert_eq!(range_step(0, 3, 100).unwrap().iter().collect::<Vec<_>>(), vec![0]);
    assert_eq!(range_step(3, 0, -100).unwrap().iter().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn test_range_extreme_bounds() {
    let r = range_step(i64::MAX - 2, i64::MAX, 1).unwrap();
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![i64::MAX - 2, i64::MAX - 1]);

    let r = range_step(i64::MIN + 1, i64::MIN, -5).unwrap();
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![i64::MIN + 1]);

    let r = range_step(i64::MAX - 1, i64::MAX, i64::MAX).unwrap();
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![i64::MAX - 1]);

    let full = range_step(i64::MIN, i64::MAX, i64::MAX).unwrap();
    assert_eq!(full.len(), 3);
    assert_eq!(full.iter().count(), 3);
}

#[test]
fn test_range_size_hint() {
    let mut r = range_step(0, 10, 3).unwrap().iter();
    assert_eq!(r.size_hint(), (4, Some(4)));
    r.next();
    assert_eq!(r.size_hint(), (3, Some(3)));
    assert_eq!(range_step(0, 10, -3).unwrap().iter().size_hint(), (0, Some(0)));
}

#[test]
fn test_range_contains() {
    let r = range_step(2, 10, 3).unwrap();
    assert!(r.contains(2));
    assert!(r.contains(8));
    assert!(!r.contains(3));
    assert!(!r.contains(11));

    let down = range_step(10, 0, -4).unwrap();
    assert!(down.contains(2));
    assert!(!down.contains(0));
    assert!(!range_step(0, 10, -1).unwrap().contains(5));
}

#[test]
fn test_range_display() {
    assert_eq!(range(10).to_string(), "range(0, 10)");
    assert_eq!(range_step(10, 0, -2).unwrap().to_string(), "range(10, 0, -2)");
}

#[test]
fn test_range_shared_across_threads() {
    let r = range_step(0, 1000, 7).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || r.iter().sum::<i64>()))
        .collect();
    let expected: i64 = (0..1000).step_by(7).sum();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_print_values() {
    let mut out: Vec<u8> = Vec::new();
    print(&mut out, 42).unwrap();
    print(&mut out, "hello").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "42\nhello\n");
}

#[test]
fn test_shared_buffer_clones_share_contents() {
    let buffer = SharedBuffer::new();
    let mut writer = buffer.clone();
    print(&mut writer, "a").unwrap();
    print(&mut writer, 1).unwrap();
    assert_eq!(buffer.lines(), vec!["a", "1"]);
    buffer.clear();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn test_input_prints_prompt_and_reads_token() {
    let mut out: Vec<u8> = Vec::new();
    let mut src = Cursor::new("  hello world\nnext\n");
    assert_eq!(input(&mut out, &mut src, "Give me input: ").unwrap(), "hello");
    assert_eq!(String::from_utf8(out).unwrap(), "Give me input: \n");
    assert_eq!(read_token(&mut src).unwrap(), "world");
    assert_eq!(read_token(&mut src).unwrap(), "next");
    assert_eq!(read_token(&mut src).unwrap(), "");
}

#[test]
fn test_read_token_across_buffer_boundaries() {
    let data = Cursor::new("abcdefgh ijk");
    let mut src = std::io::BufReader::with_capacity(3, data);
    assert_eq!(read_token(&mut src).unwrap(), "abcdefgh");
    assert_eq!(read_token(&mut src).unwrap(), "ijk");
}

#[test]
fn test_read_token_invalid_utf8() {
    let mut src = Cursor::new(vec![0xff, 0xfe, b' ']);
    assert!(matches!(read_token(&mut src), Err(RuntimeError::InvalidUtf8)));
}

#[test]
fn test_int_cast() {
    assert_eq!(int_cast("42").unwrap(), 42);
    assert_eq!(int_cast("-7").unwrap(), -7);
    assert_eq!(int_cast(" 13\n").unwrap(), 13);
    assert!(matches!(int_cast("abc"), Err(RuntimeError::Parse { .. })));
    assert!(matches!(int_cast(""), Err(RuntimeError::Parse { .. })));
    assert!(matches!(int_cast("12abc"), Err(RuntimeError::Parse { .. })));
}

#[test]
fn test_str_cast() {
    assert_eq!(str_cast(26), "26");
    assert_eq!(str_cast(-5i64), "-5");
    assert_eq!(str_cast(2.5f64), "2.5");
}

#[test]
fn test_arithmetic() {
    assert_eq!(add(13, 13).unwrap(), 26);
    assert_eq!(mul(3, 4).unwrap(), 12);
    assert_eq!(mul(5, 6).unwrap(), 30);
    assert_eq!(pow(2, 10).unwrap(), 1024);
    assert_eq!(pow(-3, 3).unwrap(), -27);
    assert_eq!(pow(7, 0).unwrap(), 1);
    assert_eq!(pow(1, i64::MAX).unwrap(), 1);
}

#[test]
fn test_arithmetic_errors() {
    assert!(matches!(add(i64::MAX, 1), Err(RuntimeError::Overflow { op: "add" })));
    assert!(matches!(mul(i64::MAX, 2), Err(RuntimeError::Overflow { op: "mul" })));
    assert!(matches!(pow(2, 64), Err(RuntimeError::Overflow { op: "pow" })));
    assert!(matches!(
        pow(2, -1),
        Err(RuntimeError::NegativeExponent { exponent: -1 })
    ));
}

#[test]
fn test_registry_standard() {
    let registry = BuiltinRegistry::standard();
    assert!(registry.contains("range"));
    assert!(!registry.is_empty());
    assert_eq!(registry.names().count(), 8);
    assert_eq!(registry.get("pow").unwrap().arity(), 2);
    assert!(matches!(
        registry.get("open"),
        Err(RuntimeError::UnknownBuiltin { name }) if name == "open"
    ));
}

#[test]
fn test_registry_resolves_links_first() {
    let registry = BuiltinRegistry::standard();
    let resolved: Vec<_> = registry
        .resolve(["input"])
        .unwrap()
        .into_iter()
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(resolved, vec!["print", "input"]);

    let headers = registry.headers(["input", "pow", "range"]).unwrap();
    assert_eq!(headers, vec!["cmath", "iostream", "utility"]);
}

#[test]
fn test_registry_unknown_link() {
    let mut registry = BuiltinRegistry::standard();
    registry.register(Builtin::new("greet").with_links(["missing"]));
    assert!(matches!(
        registry.resolve(["greet"]),
        Err(RuntimeError::UnknownBuiltin { name }) if name == "missing"
    ));
}

#[test]
fn test_registry_link_cycle() {
    let mut library = BuiltinRegistry::new();
    library.register(Builtin::new("ping").with_links(["pong"]));
    library.register(Builtin::new("pong").with_links(["ping"]));

    let mut registry = BuiltinRegistry::standard();
    let before = registry.len();
    registry.link_library(library);
    assert_eq!(registry.len(), before + 2);
    assert!(matches!(
        registry.resolve(["ping"]),
        Err(RuntimeError::LinkCycle { .. })
    ));
}

#[test]
fn test_registry_override() {
    let mut registry = BuiltinRegistry::standard();
    let replaced = registry.register(Builtin::new("print").with_params(["value", "end"]));
    assert_eq!(replaced.unwrap().params, vec!["print_string"]);
    assert_eq!(registry.get("print").unwrap().arity(), 2);
}
