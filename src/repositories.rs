pub mod registry;

pub use registry::{KeyScope, RegistryKey};
