//! Shared helpers for the integration tests.

#![allow(dead_code)]
#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry

use std::sync::Once;

use textnorm::{Config, Engine, LogLevel, NormalizationForm, set_log_callback};

/// Install a tracing subscriber and forward engine logs into it.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!(target: "textnorm", "{message}"),
            LogLevel::Info => tracing::info!(target: "textnorm", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "textnorm", "{message}"),
            LogLevel::Error => tracing::error!(target: "textnorm", "{message}"),
        });
    });
}

pub fn cps(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

pub fn text(codepoints: &[u32]) -> String {
    textnorm::codec::encode_codepoints(codepoints)
}

/// Format codepoints as `U+XXXX` for readable assertion messages.
pub fn hex(codepoints: &[u32]) -> String {
    codepoints
        .iter()
        .map(|cp| format!("U+{cp:04X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn engine(form: NormalizationForm) -> Engine<'static> {
    Engine::new(Config::default().with_form(form))
}

pub fn nfc(codepoints: &[u32]) -> Vec<u32> {
    normalize(codepoints, NormalizationForm::Nfc)
}

pub fn nfd(codepoints: &[u32]) -> Vec<u32> {
    normalize(codepoints, NormalizationForm::Nfd)
}

pub fn nfkc(codepoints: &[u32]) -> Vec<u32> {
    normalize(codepoints, NormalizationForm::Nfkc)
}

pub fn nfkd(codepoints: &[u32]) -> Vec<u32> {
    normalize(codepoints, NormalizationForm::Nfkd)
}

pub fn normalize(codepoints: &[u32], form: NormalizationForm) -> Vec<u32> {
    engine(form)
        .normalize_codepoints(codepoints)
        .expect("scalar input normalizes")
}
