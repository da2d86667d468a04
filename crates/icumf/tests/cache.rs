//! Tests for the compiled-message cache.

use std::sync::Arc;
use std::thread;

use icumf::{CldrLocaleTable, Error, MessageCache, args};

#[test]
fn test_hit_returns_same_message() {
    let cache = MessageCache::new(CldrLocaleTable::new());
    assert!(cache.is_empty());
    let a = cache.get_or_compile("{n} items", "en").unwrap();
    let b = cache.get_or_compile("{n} items", "en").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_language_is_part_of_key() {
    let cache = MessageCache::new(CldrLocaleTable::new());
    let template = "{n, plural, one {one} few {few} other {other}}";
    let en = cache.get_or_compile(template, "en").unwrap();
    let ru = cache.get_or_compile(template, "ru").unwrap();
    assert_eq!(cache.len(), 2);
    assert_eq!(en.format(&mut args! { "n" => 3 }).unwrap(), "other");
    assert_eq!(ru.format(&mut args! { "n" => 3 }).unwrap(), "few");
}

#[test]
fn test_errors_are_not_cached() {
    let cache = MessageCache::new(CldrLocaleTable::new());
    assert!(matches!(
        cache.get_or_compile("{x, select, a {A}}", "en"),
        Err(Error::Compile(_))
    ));
    assert!(cache.is_empty());
}

#[test]
fn test_clear() {
    let cache = MessageCache::new(CldrLocaleTable::new());
    cache.get_or_compile("a", "en").unwrap();
    cache.get_or_compile("b", "en").unwrap();
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_shared_across_threads() {
    let cache = Arc::new(MessageCache::new(CldrLocaleTable::new()));
    let template = "{n, plural, one {# file} other {# files}}";

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let message = cache.get_or_compile(template, "en").unwrap();
                message.format(&mut args! { "n" => n }).unwrap()
            })
        })
        .collect();

    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs[0], "0 files");
    assert_eq!(outputs[1], "1 file");
    assert_eq!(outputs[7], "7 files");
    assert_eq!(cache.len(), 1);
}
