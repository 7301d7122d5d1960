//! # Animal Sounds: Dynamic Dispatch
//!
//! A base capability with a default behavior, two specializations that
//! override it, and dispatch resolved by the *runtime* type of the value,
//! never by the static type of the reference used to call it.
//!
//! Run with: cargo run

/// The shared capability: every animal can announce itself.
///
/// `announcement` carries the default base behavior; implementors override
/// it to supply their own line. `announce` is a provided method that emits
/// the line on stdout, so every variant prints the same way.
pub trait Animal {
    /// The line this animal produces when asked to speak.
    fn announcement(&self) -> String {
        "The animal makes a sound".to_string()
    }

    /// Print the announcement as a single line on standard output.
    fn announce(&self) {
        println!("{}", self.announcement());
    }
}

/// The base variant. Inherits the default announcement unchanged.
pub struct GenericAnimal;

impl Animal for GenericAnimal {}

/// A pig. Overrides the base announcement.
pub struct Pig;

impl Animal for Pig {
    fn announcement(&self) -> String {
        "The pig says: wee wee".to_string()
    }
}

/// A dog. Overrides the base announcement.
pub struct Dog;

impl Animal for Dog {
    fn announcement(&self) -> String {
        "The dog says: bow wow".to_string()
    }
}
