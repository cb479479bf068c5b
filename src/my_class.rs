//! Variant 2: pimpl with a forwarded public method.
//!
//! Same exclusive-ownership boundary as [`crate::widget`], plus the part
//! that makes the idiom useful: a public method whose real work happens
//! entirely inside the hidden type. The hidden type logs its own lifecycle
//! here, which makes the construction and destruction interleaving visible.

use crate::lifecycle;

mod detail {
    use crate::lifecycle;

    pub(super) struct MyClassImp {
        private_var: i32,
    }

    impl MyClassImp {
        pub(super) fn new() -> Self {
            lifecycle::emit("MyClassImp::new");
            MyClassImp { private_var: 0 }
        }

        /// Stand-in for real private work.
        pub(super) fn private_method(&mut self) {
            self.private_var = 3;
        }

        pub(super) fn private_var(&self) -> i32 {
            self.private_var
        }
    }

    impl Drop for MyClassImp {
        fn drop(&mut self) {
            lifecycle::emit("drop MyClassImp");
        }
    }
}

pub struct MyClass {
    imp: Box<detail::MyClassImp>,
}

impl MyClass {
    pub fn new() -> Self {
        lifecycle::emit("MyClass::new");
        MyClass {
            imp: Box::new(detail::MyClassImp::new()),
        }
    }

    /// Forwards into the hidden type; nothing outside `self` changes.
    pub fn public_method(&mut self) {
        lifecycle::emit("MyClass::public_method");
        self.imp.private_method();
    }

    pub(crate) fn private_var(&self) -> i32 {
        self.imp.private_var()
    }
}

impl Drop for MyClass {
    fn drop(&mut self) {
        lifecycle::emit("drop MyClass");
        // `MyClassImp` drops right after, logging its own line.
    }
}

//
// Example: the hidden state moves, the caller never sees how
//
pub fn example_forwarded_method() {
    println!("== MyClass: method forwarding into the hidden type ==");
    let mut mc = MyClass::new();
    mc.public_method();
    println!("hidden private_var is now {}", mc.private_var());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::capture;

    #[test]
    fn lifecycle_lines_come_out_in_order() {
        let _ = capture::take();
        {
            let mut mc = MyClass::new();
            mc.public_method();
        }
        assert_eq!(
            capture::take(),
            [
                "MyClass::new",
                "MyClassImp::new",
                "MyClass::public_method",
                "drop MyClass",
                "drop MyClassImp",
            ]
        );
    }

    #[test]
    fn public_method_mutates_only_its_own_hidden_state() {
        let mut mc = MyClass::new();
        let other = MyClass::new();
        assert_eq!(mc.private_var(), 0);

        mc.public_method();

        assert_eq!(mc.private_var(), 3);
        assert_eq!(other.private_var(), 0);
    }
}
