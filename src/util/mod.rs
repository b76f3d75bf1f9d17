// Utility Module
// File persistence for keys and signatures

pub mod file_ops;

pub use file_ops::{
    load_key, load_signature, save_key, save_keypair, save_signature, sign_file, verify_file,
};
