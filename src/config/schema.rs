//! Declarative table of every configuration option the dump tooling knows:
//! name, semantic kind, default value, and the contexts the option matters in.
//! The table carries no logic — the loader in the parent module validates and
//! types raw values against it.

use std::fmt;
use std::ops::BitOr;

/// Semantic kind of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Str,
    Int,
    Bool,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Str => "string",
            Self::Int => "integer",
            Self::Bool => "boolean",
        })
    }
}

/// Bitset of the contexts an option is meaningful in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Usage(u8);

impl Usage {
    /// Initrd assembly.
    pub const MKINITRD: Self = Self(1);
    /// Loading the capture kernel.
    pub const KEXEC: Self = Self(1 << 1);
    /// Saving the dump after a crash.
    pub const DUMP: Self = Self(1 << 2);

    /// `BitOr` can't be used in `static` initializers, so the table below
    /// combines flags through this const equivalent.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Usage {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (flag, name) in [
            (Self::MKINITRD, "mkinitrd"),
            (Self::KEXEC, "kexec"),
            (Self::DUMP, "dump"),
        ] {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// One row of the option table. Defaults are kept as strings here and typed
/// by the loader so the table stays a plain data declaration.
#[derive(Debug, Clone, Copy)]
pub struct OptionDef {
    pub name: &'static str,
    pub kind: OptionKind,
    pub default: &'static str,
    pub usage: Usage,
}

pub static OPTIONS: &[OptionDef] = &[
    OptionDef { name: "KDUMP_KERNELVER", kind: OptionKind::Str, default: "", usage: Usage::KEXEC },
    OptionDef { name: "KDUMP_CPUS", kind: OptionKind::Int, default: "1", usage: Usage::KEXEC.or(Usage::DUMP) },
    OptionDef { name: "KDUMP_COMMANDLINE", kind: OptionKind::Str, default: "", usage: Usage::KEXEC },
    OptionDef { name: "KDUMP_COMMANDLINE_APPEND", kind: OptionKind::Str, default: "", usage: Usage::KEXEC },
    OptionDef { name: "KDUMP_FADUMP", kind: OptionKind::Bool, default: "false", usage: Usage::MKINITRD },
    OptionDef { name: "KEXEC_OPTIONS", kind: OptionKind::Str, default: "", usage: Usage::KEXEC },
    OptionDef { name: "MAKEDUMPFILE_OPTIONS", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_IMMEDIATE_REBOOT", kind: OptionKind::Bool, default: "true", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_TRANSFER", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_SAVEDIR", kind: OptionKind::Str, default: "/var/log/dump", usage: Usage::MKINITRD.or(Usage::DUMP) },
    OptionDef { name: "KDUMP_KEEP_OLD_DUMPS", kind: OptionKind::Int, default: "0", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_FREE_DISK_SIZE", kind: OptionKind::Int, default: "64", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_VERBOSE", kind: OptionKind::Int, default: "0", usage: Usage::KEXEC.or(Usage::DUMP) },
    OptionDef { name: "KDUMP_DUMPLEVEL", kind: OptionKind::Int, default: "31", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_DUMPFORMAT", kind: OptionKind::Str, default: "compressed", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_CONTINUE_ON_ERROR", kind: OptionKind::Bool, default: "true", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_REQUIRED_PROGRAMS", kind: OptionKind::Str, default: "", usage: Usage::MKINITRD },
    OptionDef { name: "KDUMP_PRESCRIPT", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_POSTSCRIPT", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_COPY_KERNEL", kind: OptionKind::Bool, default: "false", usage: Usage::DUMP },
    OptionDef { name: "KDUMPTOOL_FLAGS", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_NETCONFIG", kind: OptionKind::Str, default: "auto", usage: Usage::MKINITRD },
    OptionDef { name: "KDUMP_SMTP_SERVER", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_SMTP_USER", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_SMTP_PASSWORD", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_NOTIFICATION_TO", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_NOTIFICATION_CC", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
    OptionDef { name: "KDUMP_HOST_KEY", kind: OptionKind::Str, default: "", usage: Usage::DUMP },
];

/// Looks an option up by its exact (uppercase) name.
#[must_use]
pub fn find(name: &str) -> Option<&'static OptionDef> {
    OPTIONS.iter().find(|def| def.name == name)
}

/// All options meaningful in the given context.
pub fn for_usage(usage: Usage) -> impl Iterator<Item = &'static OptionDef> {
    OPTIONS.iter().filter(move |def| def.usage.contains(usage))
}
