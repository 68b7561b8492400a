pub use libgqlc_core::*;
