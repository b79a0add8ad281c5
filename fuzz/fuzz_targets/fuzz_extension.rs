#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (path, ext) = data;
    let source = std::path::Path::new(path);

    // A resolved extension must never let the file name escape the asset dir
    for override_ext in [None, Some(ext)] {
        if let Ok(resolved) = static_import::resolve_extension(source, override_ext) {
            let name = format!("{}.{}", "0".repeat(64), resolved);
            assert!(!name.contains('/') && !name.contains('\\'));
            assert_eq!(std::path::Path::new(&name).components().count(), 1);
        }
    }
});
