//! Registry access seam - thin wrapper over winreg.
//!
//! `RegistryKey` is the caller-owned parent handle, `KeyScope` the sub-key
//! handle opened for a single batch. A scope is closed when it is dropped.

use crate::types::AccessMask;
use std::io;

pub trait RegistryKey {
    type Scope: KeyScope;

    /// Open an existing sub-key of `self` with the requested access rights
    fn open_scope(&self, location: &str, access: AccessMask) -> io::Result<Self::Scope>;
}

/// One setter per registry value type.
pub trait KeyScope {
    fn set_dword(&self, name: &str, value: u32) -> io::Result<()>;
    fn set_qword(&self, name: &str, value: u64) -> io::Result<()>;
    fn set_string(&self, name: &str, value: &str) -> io::Result<()>;
    fn set_expand_string(&self, name: &str, value: &str) -> io::Result<()>;
    fn set_binary(&self, name: &str, value: &[u8]) -> io::Result<()>;
}

#[cfg(windows)]
mod winreg_key {
    use super::{KeyScope, RegistryKey};
    use crate::types::AccessMask;
    use std::io;
    use winreg::{
        enums::{REG_BINARY, REG_EXPAND_SZ},
        types::ToRegValue,
        RegKey, RegValue,
    };

    impl RegistryKey for RegKey {
        type Scope = RegKey;

        fn open_scope(&self, location: &str, access: AccessMask) -> io::Result<RegKey> {
            self.open_subkey_with_flags(location, access.bits())
        }
    }

    impl KeyScope for RegKey {
        fn set_dword(&self, name: &str, value: u32) -> io::Result<()> {
            self.set_value(name, &value)
        }

        fn set_qword(&self, name: &str, value: u64) -> io::Result<()> {
            self.set_value(name, &value)
        }

        fn set_string(&self, name: &str, value: &str) -> io::Result<()> {
            self.set_value(name, &value)
        }

        fn set_expand_string(&self, name: &str, value: &str) -> io::Result<()> {
            // Same UTF-16 encoding as REG_SZ, only the type differs
            let mut raw = value.to_reg_value();
            raw.vtype = REG_EXPAND_SZ;
            self.set_raw_value(name, &raw)
        }

        fn set_binary(&self, name: &str, value: &[u8]) -> io::Result<()> {
            let raw = RegValue {
                bytes: value.to_vec(),
                vtype: REG_BINARY,
            };
            self.set_raw_value(name, &raw)
        }
    }
}
