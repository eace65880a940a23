use crate::{
    error::{RegistryError, Result},
    repositories::{KeyScope, RegistryKey},
    types::{AccessMask, ValueKind, Values},
    validate,
};
use std::io;
use tracing::{debug, trace};

/// Written under the single name when a binary batch comes with no values
const BINARY_PLACEHOLDER: &[&[u8]] = &[&[0x00]];

/// Validate, open `location` under `key`, then write `values[i]` under `names[i]` in order.
///
/// The first failed write ends the batch. Values written before it stay in the registry.
fn write_batch<K, S, V, F>(
    key: &K,
    location: &str,
    access: AccessMask,
    names: &[S],
    values: &[V],
    kind: ValueKind,
    write: F,
) -> Result
where
    K: RegistryKey + ?Sized,
    S: AsRef<str>,
    F: Fn(&K::Scope, &str, &V) -> io::Result<()>,
{
    validate::check_arguments(location, names)?;
    validate::check_lengths(names.len(), values.len())?;

    let scope = key
        .open_scope(location, access)
        .map_err(|source| RegistryError::OpenFailed {
            location: location.to_string(),
            source,
        })?;
    debug!(location, %kind, count = names.len(), "opened registry key");

    for (index, (name, value)) in names.iter().zip(values).enumerate() {
        let name = name.as_ref();
        write(&scope, name, value).map_err(|source| RegistryError::WriteFailed {
            name: name.to_string(),
            index,
            source,
        })?;
        trace!(location, name, index, "registry value written");
    }

    debug!(location, %kind, count = names.len(), "registry batch written");
    Ok(())
}

/// Set several `REG_DWORD` values in one registry key
///
/// # Errors
///
/// Returns error if arguments are missing or unpaired, the key cannot be opened, or a write fails
pub fn set_multiple_dword_values<K, S>(
    key: &K,
    location: &str,
    access: AccessMask,
    names: &[S],
    values: &[u32],
) -> Result
where
    K: RegistryKey + ?Sized,
    S: AsRef<str>,
{
    write_batch(key, location, access, names, values, ValueKind::Dword, |scope, name, value| {
        scope.set_dword(name, *value)
    })
}

/// Set several `REG_QWORD` values in one registry key
///
/// # Errors
///
/// Returns error if arguments are missing or unpaired, the key cannot be opened, or a write fails
pub fn set_multiple_qword_values<K, S>(
    key: &K,
    location: &str,
    access: AccessMask,
    names: &[S],
    values: &[u64],
) -> Result
where
    K: RegistryKey + ?Sized,
    S: AsRef<str>,
{
    write_batch(key, location, access, names, values, ValueKind::Qword, |scope, name, value| {
        scope.set_qword(name, *value)
    })
}

/// Set several `REG_SZ` values in one registry key
///
/// # Errors
///
/// Returns error if arguments are missing or unpaired, the key cannot be opened, or a write fails
pub fn set_multiple_string_values<K, S, V>(
    key: &K,
    location: &str,
    access: AccessMask,
    names: &[S],
    values: &[V],
) -> Result
where
    K: RegistryKey + ?Sized,
    S: AsRef<str>,
    V: AsRef<str>,
{
    write_batch(key, location, access, names, values, ValueKind::String, |scope, name, value| {
        scope.set_string(name, value.as_ref())
    })
}

/// Set several `REG_EXPAND_SZ` values in one registry key
///
/// # Errors
///
/// Returns error if arguments are missing or unpaired, the key cannot be opened, or a write fails
pub fn set_multiple_expand_string_values<K, S, V>(
    key: &K,
    location: &str,
    access: AccessMask,
    names: &[S],
    values: &[V],
) -> Result
where
    K: RegistryKey + ?Sized,
    S: AsRef<str>,
    V: AsRef<str>,
{
    write_batch(
        key,
        location,
        access,
        names,
        values,
        ValueKind::ExpandString,
        |scope, name, value| scope.set_expand_string(name, value.as_ref()),
    )
}

/// Set several `REG_BINARY` values in one registry key
///
/// An empty `values` slice stands for a single `[0x00]` value, so it only pairs with exactly one name.
///
/// # Errors
///
/// Returns error if arguments are missing or unpaired, the key cannot be opened, or a write fails
pub fn set_multiple_binary_values<K, S, B>(
    key: &K,
    location: &str,
    access: AccessMask,
    names: &[S],
    values: &[B],
) -> Result
where
    K: RegistryKey + ?Sized,
    S: AsRef<str>,
    B: AsRef<[u8]>,
{
    if values.is_empty() {
        return write_batch(
            key,
            location,
            access,
            names,
            BINARY_PLACEHOLDER,
            ValueKind::Binary,
            |scope, name, value| scope.set_binary(name, value),
        );
    }

    write_batch(key, location, access, names, values, ValueKind::Binary, |scope, name, value| {
        scope.set_binary(name, value.as_ref())
    })
}

/// Set several values of the kind carried by `values` in one registry key
///
/// # Errors
///
/// Same as the typed setter for that kind
pub fn set_multiple_values<K, S>(
    key: &K,
    location: &str,
    access: AccessMask,
    names: &[S],
    values: &Values,
) -> Result
where
    K: RegistryKey + ?Sized,
    S: AsRef<str>,
{
    match values {
        Values::Dword(v) => set_multiple_dword_values(key, location, access, names, v),
        Values::Qword(v) => set_multiple_qword_values(key, location, access, names, v),
        Values::String(v) => set_multiple_string_values(key, location, access, names, v),
        Values::ExpandString(v) => {
            set_multiple_expand_string_values(key, location, access, names, v)
        }
        Values::Binary(v) => set_multiple_binary_values(key, location, access, names, v),
    }
}
