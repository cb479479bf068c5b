//! Pimpl (opaque-handle) ownership patterns, mini-docs + runnable examples
//!
//! "Pimpl" (pointer to implementation) hides everything about a type behind
//! a stable public surface: the public type stores only a handle to an
//! implementation type defined in a private module, so consumers never see
//! the hidden fields. In Rust the module boundary plays the role that a
//! separate implementation file plays in the idiom's C++ homeland.
//!
//! Five classic variants, one module each, deliberately NOT unified into a
//! shared abstraction. The point is comparing the ownership disciplines
//! side by side:
//! - [`widget`]   exclusive ownership, bare minimum
//! - [`my_class`] exclusive ownership plus a forwarded public method
//! - [`foo`]      move-only: moves come for free once the impl is boxed
//! - [`bar`]      exclusive ownership with a caller-supplied release function
//! - [`car`]      shared ownership: deep copy on clone, shared via alias
//!
//! Every constructor, drop, and forwarded call prints one fixed line, so
//! `cargo run` shows the whole lifecycle, reverse-order drops included.

mod lifecycle;

pub mod bar;
pub mod car;
pub mod foo;
pub mod my_class;
pub mod widget;

pub use bar::Bar;
pub use car::Car;
pub use foo::Foo;
pub use my_class::MyClass;
pub use widget::Widget;

/*
| Public type | Hidden type    | Ownership                     | Duplication policy                  |
| ----------- | -------------- | ----------------------------- | ----------------------------------- |
| `Widget`    | `WidgetImpl`   | exclusive (`Box`)             | none                                |
| `MyClass`   | `MyClassImp`   | exclusive (`Box`)             | none                                |
| `Foo`       | `FooImpl`      | exclusive (`Box`)             | move-only                           |
| `Bar`       | `BarImpl`      | exclusive + custom release fn | none                                |
| `Car`       | `UnderTheHood` | shared (`Rc<RefCell<_>>`)     | `clone` deep-copies, `alias` shares |
*/

#[cfg(test)]
mod duplication_policy {
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use crate::{Bar, Car, Foo, MyClass, Widget};

    // The table above, checked at compile time.
    assert_not_impl_any!(Widget: Clone, Copy);
    assert_not_impl_any!(MyClass: Clone, Copy);
    assert_not_impl_any!(Foo: Clone, Copy);
    assert_not_impl_any!(Bar: Clone, Copy);
    assert_impl_all!(Car: Clone);
    assert_not_impl_any!(Car: Copy);

    // `Rc` keeps `Car` on one thread.
    assert_not_impl_any!(Car: Send, Sync);
}
