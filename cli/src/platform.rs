use model::{Arch, Os, Platform};

// Defines `PLATFORM`, resolved by the build script for the compile target.
include!(concat!(env!("OUT_DIR"), "/platform.rs"));

/// Get the platform this binary was built for.
pub fn current() -> Platform {
    PLATFORM
}
