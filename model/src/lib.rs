//! Labels and selection rules for the platform a binary is built for.
//!
//! Selection happens at build time: a build script describes the compile
//! target as a [`Target`], calls [`Platform::select`], and emits the result as
//! a constant. Nothing here does I/O.

mod error;
mod label;
mod report;
mod target;

pub use error::ParseError;
pub use label::{Arch, Os};
pub use report::{check_tag, Report};
pub use target::{Rule, Target, ARCH_RULES, OS_RULES};

/// The OS and architecture labels of one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// A platform that matched no rule on either axis.
    pub const UNKNOWN: Platform = Platform {
        os: Os::Unknown,
        arch: Arch::Unknown,
    };

    /// Selects the labels for a build target.
    ///
    /// Each axis is resolved independently against its rule table and falls
    /// back to `Unknown` when no rule matches.
    pub fn select(target: &Target) -> Self {
        Self {
            os: Rule::select(OS_RULES, target, Os::Unknown),
            arch: Rule::select(ARCH_RULES, target, Arch::Unknown),
        }
    }

    /// Renders the platform as a Rust constant item named `name`.
    ///
    /// Paths are relative to this crate, so the including module must import
    /// `model::{Arch, Os, Platform}`.
    pub fn to_const_item(&self, name: &str) -> String {
        format!(
            "pub const {name}: Platform = Platform {{ os: {}, arch: {} }};\n",
            self.os.path(),
            self.arch.path()
        )
    }
}
