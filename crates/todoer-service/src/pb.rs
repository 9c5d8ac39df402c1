//! Hand-checked-in prost/tonic stubs for the `todoer.v1` proto package.

pub mod todoer {
    pub mod v1 {
        include!("generated/todoer.v1.rs");
    }
}
