//! Dynamic dispatch demo: hold a `Dog` behind a base-typed reference and
//! watch the override run instead of the default.
//!
//! Run with: cargo run

use animal_dispatch::{Animal, Dog, GenericAnimal};

fn main() {
    // A base instance held by a base-typed reference. Never asked to speak.
    let _my_animal: &dyn Animal = &GenericAnimal;

    // The reference type is the base trait; the value is a Dog.
    let my_dog: Box<dyn Animal> = Box::new(Dog);

    // Resolves to Dog's override, not the trait default.
    my_dog.announce();
}
