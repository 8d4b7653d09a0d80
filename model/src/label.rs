use std::{fmt, str::FromStr};

use crate::ParseError;

// Generates a label vocabulary: the enum, its label strings, `ALL`, and the
// `Display`/`FromStr` pair. Labels must be unique within one vocabulary.
macro_rules! labels {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every value in the vocabulary, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the human-readable label.
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Returns the Rust path of the variant, e.g. `Os::Linux`.
            ///
            /// Used when emitting generated source.
            pub const fn path(self) -> &'static str {
                match self {
                    $($name::$variant => concat!(stringify!($name), "::", stringify!($variant)),)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(ParseError::$err(s.to_owned())),
                }
            }
        }
    };
}

labels! {
    /// Operating system family of the build target.
    Os, UnknownOs {
        Windows => "Windows",
        Linux => "Linux",
        /// Any other member of the unix family.
        Unix => "Unix",
        Unknown => "UNKNOWN",
    }
}

labels! {
    /// CPU architecture family of the build target.
    Arch, UnknownArch {
        X86_64 => "x86_64",
        X86 => "x86_32",
        ArmV2 => "ARMv2",
        ArmV3 => "ARMv3",
        ArmV4T => "ARMv4T",
        ArmV5 => "ARMv5",
        ArmV6T2 => "ARMv6T2",
        ArmV6 => "ARMv6",
        /// ARMv7 with no more specific profile.
        ArmV7 => "ARMv7",
        ArmV7A => "ARMv7A",
        ArmV7R => "ARMv7R",
        ArmV7M => "ARMv7M",
        ArmV7S => "ARMv7S",
        Arm64 => "ARM64",
        Mips => "MIPS",
        SuperH => "SUPERH",
        PowerPc => "POWERPC",
        PowerPc64 => "POWERPC64",
        Sparc => "SPARC",
        M68k => "M68K",
        RiscV => "RISC-V",
        Unknown => "UNKNOWN",
    }
}
