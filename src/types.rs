//! Value kinds, typed payloads and access rights.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

// =============================================================================
// Value Kinds
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Dword,
    Qword,
    String,
    ExpandString,
    Binary,
}

impl ValueKind {
    pub const ALL: [ValueKind; 5] = [
        Self::Dword,
        Self::Qword,
        Self::String,
        Self::ExpandString,
        Self::Binary,
    ];

    /// Registry type name, e.g. `REG_DWORD`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dword => "REG_DWORD",
            Self::Qword => "REG_QWORD",
            Self::String => "REG_SZ",
            Self::ExpandString => "REG_EXPAND_SZ",
            Self::Binary => "REG_BINARY",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reg_dword" | "dword" => Ok(Self::Dword),
            "reg_qword" | "qword" => Ok(Self::Qword),
            "reg_sz" | "string" => Ok(Self::String),
            "reg_expand_sz" | "expand_string" => Ok(Self::ExpandString),
            "reg_binary" | "binary" => Ok(Self::Binary),
            _ => Err(RegistryError::UnknownValueType(s.to_string())),
        }
    }
}

// =============================================================================
// Typed Payloads
// =============================================================================

/// A sequence of values of one kind, written positionally against a names sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Values {
    Dword(Vec<u32>),
    Qword(Vec<u64>),
    String(Vec<String>),
    ExpandString(Vec<String>),
    Binary(Vec<Vec<u8>>),
}

impl Values {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Dword(_) => ValueKind::Dword,
            Self::Qword(_) => ValueKind::Qword,
            Self::String(_) => ValueKind::String,
            Self::ExpandString(_) => ValueKind::ExpandString,
            Self::Binary(_) => ValueKind::Binary,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Dword(v) => v.len(),
            Self::Qword(v) => v.len(),
            Self::String(v) | Self::ExpandString(v) => v.len(),
            Self::Binary(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Access Rights
// =============================================================================

/// Access rights requested when opening a key. Sufficiency is left to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessMask(u32);

impl AccessMask {
    pub const QUERY_VALUE: Self = Self(0x0001);
    pub const SET_VALUE: Self = Self(0x0002);
    pub const CREATE_SUB_KEY: Self = Self(0x0004);
    pub const ENUMERATE_SUB_KEYS: Self = Self(0x0008);
    pub const NOTIFY: Self = Self(0x0010);
    pub const CREATE_LINK: Self = Self(0x0020);
    pub const WOW64_64KEY: Self = Self(0x0100);
    pub const WOW64_32KEY: Self = Self(0x0200);
    pub const READ: Self = Self(0x0002_0019);
    pub const WRITE: Self = Self(0x0002_0006);
    pub const ALL_ACCESS: Self = Self(0x000F_003F);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for AccessMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AccessMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for AccessMask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}
