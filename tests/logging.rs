//! Log callback integration.
//!
//! The callback is process-wide, so this binary holds a single test.

use std::sync::{Arc, Mutex};

use textnorm::{
    Config, Engine, LogLevel, MalformedPolicy, clear_log_callback, codec, set_log_callback,
};

#[test]
fn engine_emits_logs_through_callback() {
    let records: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::default();
    let sink = Arc::clone(&records);
    set_log_callback(move |level, message| {
        if let Ok(mut guard) = sink.lock() {
            guard.push((level, message.to_string()));
        }
    });

    // Already normalized input takes the fast path and logs nothing.
    let engine = Engine::new(Config::default().with_malformed(MalformedPolicy::Passthrough));
    engine
        .normalize(&codec::decode_str("plain"))
        .expect("valid input");
    assert!(records.lock().expect("records").is_empty());

    engine
        .normalize(&codec::decode(b"e\xCC\x81\x80"))
        .expect("passthrough");
    let _: textnorm::Locale = "fr-CA".parse().expect("valid tag");

    clear_log_callback();
    engine
        .normalize(&codec::decode_str("e\u{301}"))
        .expect("valid input");

    let records = records.lock().expect("records");
    let levels: Vec<LogLevel> = records.iter().map(|(level, _)| *level).collect();
    assert_eq!(levels, vec![LogLevel::Warn, LogLevel::Debug, LogLevel::Info]);
    assert!(records[0].1.contains("malformed"));
    assert!(records[1].1.contains("NFC"));
    assert!(records[2].1.contains("fr-CA"));
}
