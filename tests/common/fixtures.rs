//! Reusable test constants

/// SHA-256 of the three bytes `abc`
pub const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// SHA-256 of the empty byte sequence
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Default asset directory, relative to the project root
pub const ASSET_DIR: &str = "assets/img";
