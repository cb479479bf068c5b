//! Variant 4: exclusive ownership with a custom release function.
//!
//! Sometimes the generic drop path cannot be used: the code that knows how
//! to destroy the hidden object is not visible where the handle is
//! declared. The handle then carries its own release function and invokes
//! it exactly once at end of life, instead of letting the box free the
//! object on the generic path.

use crate::lifecycle;

mod detail {
    use crate::lifecycle;

    #[derive(Default)]
    pub(super) struct BarImpl {
        internal_data: i32,
    }

    impl BarImpl {
        pub(super) fn do_internal_work(&mut self) {
            lifecycle::emit("BarImpl::do_internal_work");
            self.internal_data = 5;
        }

        pub(super) fn internal_data(&self) -> i32 {
            self.internal_data
        }
    }
}

type Release = fn(Box<detail::BarImpl>);

fn release_bar_impl(imp: Box<detail::BarImpl>) {
    lifecycle::emit("Bar::release");
    drop(imp);
}

pub struct Bar {
    // `Option` so the drop handler can move the box out and hand it to the
    // release function; `None` is only ever observable mid-drop.
    imp: Option<Box<detail::BarImpl>>,
    release: Release,
}

impl Bar {
    pub fn new() -> Self {
        lifecycle::emit("Bar::new");
        let mut bar = Bar {
            imp: Some(Box::default()),
            release: release_bar_impl,
        };
        if let Some(imp) = bar.imp.as_mut() {
            imp.do_internal_work();
        }
        bar
    }

    pub(crate) fn internal_data(&self) -> i32 {
        self.imp.as_ref().map_or(0, |imp| imp.internal_data())
    }
}

impl Drop for Bar {
    fn drop(&mut self) {
        lifecycle::emit("drop Bar");
        // Taking out of the `Option` makes a double release unrepresentable.
        if let Some(imp) = self.imp.take() {
            (self.release)(imp);
        }
    }
}

//
// Example: release goes through the supplied function
//
pub fn example_custom_release() {
    println!("== Bar: release goes through the supplied function ==");
    {
        let stool = Bar::new();
        println!("internal data = {}", stool.internal_data());
    }
    println!("(hidden object released exactly once)");
}
