//! Variant 3: move-only pimpl.
//!
//! Once the implementation sits behind a `Box`, transferring ownership is
//! just a move of the handle: nothing to write, nothing to allocate, no
//! lifecycle lines. What stays deliberately absent is any way to duplicate
//! the owner, so there is no `Clone` and no `Copy`.

use crate::lifecycle;

mod detail {
    use crate::lifecycle;

    #[derive(Default)]
    pub(super) struct FooImpl {
        internal_data: i32,
    }

    impl FooImpl {
        pub(super) fn do_internal_work(&mut self) {
            lifecycle::emit("FooImpl::do_internal_work");
            self.internal_data = 5;
        }

        pub(super) fn internal_data(&self) -> i32 {
            self.internal_data
        }
    }
}

pub struct Foo {
    imp: Box<detail::FooImpl>,
}

impl Foo {
    pub fn new() -> Self {
        lifecycle::emit("Foo::new");
        let mut foo = Foo {
            imp: Box::default(),
        };
        foo.imp.do_internal_work();
        foo
    }

    pub(crate) fn internal_data(&self) -> i32 {
        self.imp.internal_data()
    }
}

impl Drop for Foo {
    fn drop(&mut self) {
        lifecycle::emit("drop Foo");
    }
}

/// Takes the `Foo` by value and hands it back: two moves, zero lifecycle
/// lines, same hidden object throughout.
fn pass_through(f: Foo) -> Foo {
    f
}

//
// Example: ownership moves, never copies
//
pub fn example_move_only() {
    println!("== Foo: ownership moves, never copies ==");
    let f = Foo::new();
    let f = pass_through(f);
    println!("internal data after the round trip = {}", f.internal_data());
    // `f.clone()` would not compile; the only way to a second `Foo`
    // is `Foo::new()`.
}
