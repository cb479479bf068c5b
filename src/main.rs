use pimpl_doc::{bar, car, foo, my_class, widget};
use pimpl_doc::{Bar, Car, Foo, MyClass};
use tracing::info;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    info!("per-variant examples");
    widget::example_basic();
    my_class::example_forwarded_method();
    foo::example_move_only();
    bar::example_custom_release();
    car::example_deep_copy_vs_alias();

    info!("combined sequence, one scope, four owners");
    {
        let mut mc = MyClass::new();
        mc.public_method();

        let _fighter = Foo::new();
        let _stool = Bar::new();
        let _wreck = Car::new();
    } // drops run here, reverse construction order

    info!("done");
}
