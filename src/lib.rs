pub mod batch;
pub mod error;
pub mod repositories;
pub mod service;
pub mod types;
pub mod validate;

#[cfg(test)]
mod testing;

// Public, stable-ish API surface for consumers

pub use crate::service::{
    set_multiple_binary_values, set_multiple_dword_values, set_multiple_expand_string_values,
    set_multiple_qword_values, set_multiple_string_values, set_multiple_values,
};

pub use crate::batch::ValueBatch;

pub use crate::error::{RegistryError, Result};

pub use crate::repositories::{KeyScope, RegistryKey};

pub use crate::types::{AccessMask, ValueKind, Values};

pub mod prelude {
    pub use crate::batch::ValueBatch;
    pub use crate::error::{RegistryError, Result};
    pub use crate::repositories::{KeyScope, RegistryKey};
    pub use crate::service::{
        set_multiple_binary_values, set_multiple_dword_values, set_multiple_expand_string_values,
        set_multiple_qword_values, set_multiple_string_values, set_multiple_values,
    };
    pub use crate::types::{AccessMask, ValueKind, Values};
}
