//! Property tests for content digests and asset placement.

use std::path::Path;

use proptest::prelude::*;

use static_import::infrastructure::fs::LocalFs;
use static_import::{compute_digest, Extension, ImportOptions, ImportRequest, ImportUseCase};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the digest is always 64 lowercase hex characters.
    #[test]
    fn property_digest_is_64_lowercase_hex(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let digest = compute_digest(&bytes);
        prop_assert_eq!(digest.as_str().len(), 64);
        prop_assert!(digest
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    /// PROPERTY: hashing is deterministic.
    #[test]
    fn property_digest_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(compute_digest(&bytes), compute_digest(&bytes));
    }

    /// PROPERTY: the destination file name is `<digest>.<ext>` for any source directory.
    #[test]
    fn property_destination_is_independent_of_source_dir(
        dir in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let ext = Extension::new("png").unwrap();
        let asset = static_import::ImportedAsset::new(bytes.clone(), ext);
        let request = ImportRequest::new(format!("{dir}/photo.png"));

        let resolved = request.resolve_extension().unwrap();
        prop_assert_eq!(resolved.as_str(), "png");
        prop_assert_eq!(
            asset.destination(Path::new("assets/img")),
            Path::new("assets/img").join(format!("{}.png", compute_digest(&bytes)))
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: importing then reading back yields the original bytes.
    #[test]
    fn property_import_round_trips_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("input.bin");
        let asset_dir = dir.path().join("assets");
        std::fs::create_dir(&asset_dir).unwrap();
        std::fs::write(&source, &bytes).unwrap();

        let use_case = ImportUseCase::new(LocalFs::new(), ImportOptions::new(&asset_dir));
        let outcome = use_case.execute(&ImportRequest::new(&source)).unwrap();

        prop_assert_eq!(std::fs::read(&outcome.destination).unwrap(), bytes);
    }
}
