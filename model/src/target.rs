use crate::{Arch, Os};

/// What the toolchain declares about a build target.
///
/// Mirrors the `TARGET` and `CARGO_CFG_TARGET_*` values a build script sees.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Target {
    /// The full target triple, e.g. `armv7-unknown-linux-gnueabihf`.
    pub triple: String,
    /// The `target_arch` cfg value, e.g. `arm`.
    pub arch: String,
    /// The `target_os` cfg value, e.g. `linux`.
    pub os: String,
    /// The `target_family` cfg values, e.g. `["unix"]`.
    pub families: Vec<String>,
}

impl Target {
    /// Returns the architecture component of the triple.
    ///
    /// This carries the ARM revision and profile, which `target_arch` does not.
    pub fn triple_arch(&self) -> &str {
        self.triple.split('-').next().unwrap_or_default()
    }

    /// Returns `true` if the target belongs to the given family.
    pub fn has_family(&self, family: &str) -> bool {
        self.families.iter().any(|f| f == family)
    }

    fn arch_is(&self, archs: &[&str]) -> bool {
        archs.contains(&self.arch.as_str())
    }

    fn is_arm(&self) -> bool {
        self.arch == "arm"
    }
}

/// A single row of a selection table.
pub struct Rule<L> {
    /// The label chosen when the rule matches.
    pub label: L,
    /// The predicate over the build target.
    pub matches: fn(&Target) -> bool,
}

impl<L: Copy> Rule<L> {
    /// Returns the label of the first matching rule, or `fallback`.
    pub fn select(rules: &[Rule<L>], target: &Target, fallback: L) -> L {
        rules
            .iter()
            .find(|rule| (rule.matches)(target))
            .map(|rule| rule.label)
            .unwrap_or(fallback)
    }
}

// Predicates within a table are mutually exclusive. Order is for reading only.

/// Operating system rules.
pub const OS_RULES: &[Rule<Os>] = &[
    Rule {
        label: Os::Windows,
        matches: |t| t.os == "windows",
    },
    Rule {
        label: Os::Linux,
        matches: is_linux,
    },
    Rule {
        label: Os::Unix,
        matches: |t| t.has_family("unix") && t.os != "windows" && !is_linux(t),
    },
];

fn is_linux(t: &Target) -> bool {
    matches!(t.os.as_str(), "linux" | "android")
}

/// Architecture rules.
pub const ARCH_RULES: &[Rule<Arch>] = &[
    Rule {
        label: Arch::X86_64,
        matches: |t| t.arch == "x86_64",
    },
    Rule {
        label: Arch::X86,
        matches: |t| t.arch == "x86",
    },
    Rule {
        label: Arch::ArmV2,
        matches: |t| t.is_arm() && t.triple_arch().starts_with("armv2"),
    },
    Rule {
        label: Arch::ArmV3,
        matches: |t| t.is_arm() && t.triple_arch().starts_with("armv3"),
    },
    Rule {
        label: Arch::ArmV4T,
        matches: |t| t.is_arm() && matches!(t.triple_arch(), "armv4t" | "thumbv4t"),
    },
    Rule {
        label: Arch::ArmV5,
        matches: |t| {
            let a = t.triple_arch();
            t.is_arm() && (a.starts_with("armv5") || a.starts_with("thumbv5"))
        },
    },
    Rule {
        label: Arch::ArmV6T2,
        matches: is_armv6t2,
    },
    Rule {
        label: Arch::ArmV6,
        matches: |t| {
            let a = t.triple_arch();
            t.is_arm()
                && (a == "arm" || a.starts_with("armv6") || a.starts_with("thumbv6"))
                && !is_armv6t2(t)
        },
    },
    Rule {
        label: Arch::ArmV7A,
        matches: is_armv7a,
    },
    Rule {
        label: Arch::ArmV7R,
        matches: is_armv7r,
    },
    Rule {
        label: Arch::ArmV7M,
        matches: is_armv7m,
    },
    Rule {
        label: Arch::ArmV7S,
        matches: is_armv7s,
    },
    Rule {
        label: Arch::ArmV7,
        matches: |t| {
            let a = t.triple_arch();
            t.is_arm()
                && (a.starts_with("armv7") || a.starts_with("thumbv7"))
                && !(is_armv7a(t) || is_armv7r(t) || is_armv7m(t) || is_armv7s(t))
        },
    },
    Rule {
        label: Arch::Arm64,
        matches: |t| t.arch_is(&["aarch64", "arm64ec"]),
    },
    Rule {
        label: Arch::Mips,
        matches: |t| t.arch_is(&["mips", "mips64", "mips32r6", "mips64r6"]),
    },
    Rule {
        label: Arch::SuperH,
        matches: |t| t.arch == "sh",
    },
    Rule {
        label: Arch::PowerPc,
        matches: |t| t.arch == "powerpc",
    },
    Rule {
        label: Arch::PowerPc64,
        matches: |t| t.arch == "powerpc64",
    },
    Rule {
        label: Arch::Sparc,
        matches: |t| t.arch_is(&["sparc", "sparc64"]),
    },
    Rule {
        label: Arch::M68k,
        matches: |t| t.arch == "m68k",
    },
    Rule {
        label: Arch::RiscV,
        matches: |t| t.arch_is(&["riscv32", "riscv64"]),
    },
];

fn is_armv6t2(t: &Target) -> bool {
    let a = t.triple_arch();
    t.is_arm() && (a.starts_with("armv6t2") || a.starts_with("thumbv6t2"))
}

fn is_armv7a(t: &Target) -> bool {
    let a = t.triple_arch();
    t.is_arm() && (a.starts_with("armv7a") || a.starts_with("thumbv7a"))
}

fn is_armv7r(t: &Target) -> bool {
    let a = t.triple_arch();
    t.is_arm()
        && (a.starts_with("armv7r") || a.starts_with("thumbv7r") || a.starts_with("armebv7r"))
}

fn is_armv7m(t: &Target) -> bool {
    t.is_arm() && matches!(t.triple_arch(), "thumbv7m" | "thumbv7em")
}

fn is_armv7s(t: &Target) -> bool {
    t.is_arm() && t.triple_arch() == "armv7s"
}
