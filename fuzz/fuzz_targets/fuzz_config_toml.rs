#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing (including unknown-key collection) should never panic
        let _ = toml::from_str::<static_import::Config>(content);
        let _ = static_import::config::parse_with_warnings(
            content,
            std::path::Path::new("static-import.toml"),
        );
    }
});
