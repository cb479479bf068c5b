//! Variant 5: shared pimpl, with two very different duplication policies.
//!
//! The hidden state is reference-counted, so several `Car` handles can be
//! alive at once and the state dies with the last of them. Duplicating a
//! handle comes in two flavours:
//! - [`Car::clone`] deep-copies: a fresh hidden object with the same state,
//!   after which the two cars evolve independently.
//! - [`Car::alias`] shares: both handles refer to the same hidden object.
//!
//! Neither flavour logs a lifecycle line; only `new` and drop do.

use std::cell::RefCell;
use std::rc::Rc;

use crate::lifecycle;

mod detail {
    /// Hidden state. `Clone` here is what makes `Car::clone`'s deep copy
    /// possible.
    #[derive(Clone, Default)]
    pub(super) struct UnderTheHood {
        pub(super) odometer: u32,
    }
}

pub struct Car {
    shared: Rc<RefCell<detail::UnderTheHood>>,
}

impl Car {
    pub fn new() -> Self {
        lifecycle::emit("Car::new");
        Car {
            shared: Rc::default(),
        }
    }

    pub fn drive(&self, miles: u32) {
        self.shared.borrow_mut().odometer += miles;
    }

    pub fn odometer(&self) -> u32 {
        self.shared.borrow().odometer
    }

    /// Both handles refer to the same hidden object afterwards.
    ///
    /// This is deliberately different from both [`Car::clone`] (no new
    /// hidden object is made) and a plain Rust move (the original handle
    /// stays alive and usable): after `alias` there are two live owners
    /// and no exclusive one. Whether that is ever the sharing policy you
    /// want is a fair question; it is kept as a distinct, named operation
    /// precisely so the sharing is explicit at the call site.
    pub fn alias(&self) -> Car {
        Car {
            shared: Rc::clone(&self.shared),
        }
    }

    /// How many handles currently keep the hidden state alive.
    pub(crate) fn owner_count(&self) -> usize {
        Rc::strong_count(&self.shared)
    }
}

impl Clone for Car {
    /// Deep copy: a fresh hidden object with the same state.
    fn clone(&self) -> Self {
        Car {
            shared: Rc::new(RefCell::new(self.shared.borrow().clone())),
        }
    }
}

impl Drop for Car {
    fn drop(&mut self) {
        lifecycle::emit("drop Car");
        // The hidden object goes away only with the last owner.
    }
}

//
// Example: clone deep-copies, alias shares
//
pub fn example_deep_copy_vs_alias() {
    println!("== Car: clone deep-copies, alias shares ==");
    let a = Car::new();
    a.drive(10);

    let b = a.clone(); // fresh hidden object
    b.drive(5);
    println!("a = {} miles, b = {} miles (independent)", a.odometer(), b.odometer());

    let c = a.alias(); // same hidden object
    c.drive(90);
    println!("a = {} miles, c = {} miles (shared)", a.odometer(), c.odometer());
    println!("owners of a's hidden state = {}", a.owner_count());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::capture;

    #[test]
    fn clone_is_a_deep_copy() {
        let a = Car::new();
        a.drive(10);

        let b = a.clone();
        b.drive(5);

        assert_eq!(a.odometer(), 10);
        assert_eq!(b.odometer(), 15);
        assert_eq!(a.owner_count(), 1);
        assert_eq!(b.owner_count(), 1);
    }

    #[test]
    fn alias_shares_the_hidden_object() {
        let a = Car::new();
        let b = a.alias();
        assert_eq!(a.owner_count(), 2);

        a.drive(30);
        assert_eq!(b.odometer(), 30);

        b.drive(12);
        assert_eq!(a.odometer(), 42);
    }

    #[test]
    fn hidden_state_outlives_the_first_owner() {
        let a = Car::new();
        let b = a.alias();
        a.drive(7);

        drop(a);

        assert_eq!(b.odometer(), 7);
        assert_eq!(b.owner_count(), 1);
    }

    #[test]
    fn each_owner_logs_its_own_drop() {
        let _ = capture::take();
        {
            let a = Car::new();
            let _b = a.alias();
            let _c = a.clone();
        }
        let lines = capture::take();
        assert_eq!(lines.iter().filter(|l| *l == "Car::new").count(), 1);
        assert_eq!(lines.iter().filter(|l| *l == "drop Car").count(), 3);
    }
}
