//! In-memory registry double for unit tests.

use crate::repositories::{KeyScope, RegistryKey};
use crate::types::AccessMask;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stored {
    Dword(u32),
    Qword(u64),
    String(String),
    ExpandString(String),
    Binary(Vec<u8>),
}

#[derive(Default)]
struct State {
    keys: BTreeMap<String, BTreeMap<String, Stored>>,
    opened: Vec<(String, AccessMask)>,
    live_scopes: usize,
    writes: usize,
    fail_on: Option<String>,
}

/// Parent handle holding a fixed set of existing sub-keys.
#[derive(Default)]
pub struct MemoryKey {
    state: Rc<RefCell<State>>,
}

impl MemoryKey {
    pub fn with_subkey(location: &str) -> Self {
        let key = Self::default();
        key.state
            .borrow_mut()
            .keys
            .insert(location.to_string(), BTreeMap::new());
        key
    }

    /// Make every write to `name` fail
    pub fn fail_writes_to(&self, name: &str) {
        self.state.borrow_mut().fail_on = Some(name.to_string());
    }

    pub fn value(&self, location: &str, name: &str) -> Option<Stored> {
        self.state.borrow().keys.get(location)?.get(name).cloned()
    }

    pub fn value_count(&self, location: &str) -> usize {
        self.state.borrow().keys.get(location).map_or(0, BTreeMap::len)
    }

    pub fn opens(&self) -> usize {
        self.state.borrow().opened.len()
    }

    pub fn last_access(&self) -> Option<AccessMask> {
        self.state.borrow().opened.last().map(|(_, access)| *access)
    }

    pub fn live_scopes(&self) -> usize {
        self.state.borrow().live_scopes
    }

    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

pub struct MemoryScope {
    state: Rc<RefCell<State>>,
    location: String,
}

impl MemoryScope {
    fn put(&self, name: &str, value: Stored) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_on.as_deref() == Some(name) {
            return Err(io::Error::other("injected write failure"));
        }
        state.writes += 1;
        state
            .keys
            .entry(self.location.clone())
            .or_default()
            .insert(name.to_string(), value);
        Ok(())
    }
}

impl Drop for MemoryScope {
    fn drop(&mut self) {
        self.state.borrow_mut().live_scopes -= 1;
    }
}

impl RegistryKey for MemoryKey {
    type Scope = MemoryScope;

    fn open_scope(&self, location: &str, access: AccessMask) -> io::Result<MemoryScope> {
        let mut state = self.state.borrow_mut();
        if !state.keys.contains_key(location) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        if !access.contains(AccessMask::SET_VALUE) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        state.opened.push((location.to_string(), access));
        state.live_scopes += 1;
        Ok(MemoryScope {
            state: Rc::clone(&self.state),
            location: location.to_string(),
        })
    }
}

impl KeyScope for MemoryScope {
    fn set_dword(&self, name: &str, value: u32) -> io::Result<()> {
        self.put(name, Stored::Dword(value))
    }

    fn set_qword(&self, name: &str, value: u64) -> io::Result<()> {
        self.put(name, Stored::Qword(value))
    }

    fn set_string(&self, name: &str, value: &str) -> io::Result<()> {
        self.put(name, Stored::String(value.to_string()))
    }

    fn set_expand_string(&self, name: &str, value: &str) -> io::Result<()> {
        self.put(name, Stored::ExpandString(value.to_string()))
    }

    fn set_binary(&self, name: &str, value: &[u8]) -> io::Result<()> {
        self.put(name, Stored::Binary(value.to_vec()))
    }
}
