//! End-to-end run of the demo binary.
//!
//! The driver constructs a base instance it never asks to speak and a `Dog`
//! behind a base-typed reference, so the whole run must emit the dog's line
//! and nothing else.

use pretty_assertions::assert_eq;
use std::process::Command;

#[test]
fn demo_prints_exactly_the_dog_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_animal_dispatch"))
        .output()
        .expect("failed to run the demo binary");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "The dog says: bow wow\n"
    );
    assert!(output.stderr.is_empty());
}
