//! Variant 1: the bare minimum pimpl.
//!
//! The public type owns its implementation exclusively through a `Box`.
//! The implementation type lives in a private module, so nothing about it
//! reaches the public surface; consumers only ever see the handle.
//! No clone, no copy, nothing but construct and drop.

use crate::lifecycle;

mod detail {
    /// All of `Widget`'s data would live here. Deliberately empty: this
    /// variant is about the boundary, not the contents.
    pub(super) struct WidgetImpl;
}

pub struct Widget {
    // Never inspected, only owned.
    _imp: Box<detail::WidgetImpl>,
}

impl Widget {
    pub fn new() -> Self {
        lifecycle::emit("Widget::new");
        Widget {
            _imp: Box::new(detail::WidgetImpl),
        }
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        lifecycle::emit("drop Widget");
        // The hidden object is freed by the box right after this line.
    }
}

//
// Example: construct, then drop at scope exit
//
pub fn example_basic() {
    println!("== Widget: construct, then drop at scope exit ==");
    {
        let _w = Widget::new();
        println!("(inside scope)");
    }
    println!("(after scope)");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::capture;

    #[test]
    fn construct_and_drop_emit_one_line_each() {
        let _ = capture::take();
        {
            let _w = Widget::new();
        }
        assert_eq!(capture::take(), ["Widget::new", "drop Widget"]);
    }
}
