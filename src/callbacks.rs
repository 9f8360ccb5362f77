use crate::error::Error;
use crate::number_scanner::Number;

/// Event sink invoked by the recognizer as it walks a JSON text.
///
/// Every method has a no-op default so an implementor only needs to
/// override the events it cares about. Structural events bracket their
/// contents (`on_begin_array` ... `on_end_array`) and a member name always
/// precedes the value it names.
pub trait ParseCallbacks {
    fn on_error(&mut self, _err: Error) {}

    fn on_null(&mut self) {}
    fn on_true(&mut self) {}
    fn on_false(&mut self) {}
    fn on_number(&mut self, _num: Number) {}
    fn on_string(&mut self, _s: String) {}
    fn on_member_name(&mut self, _s: String) {}

    fn on_begin_array(&mut self) {}
    fn on_end_array(&mut self) {}
    fn on_begin_object(&mut self) {}
    fn on_end_object(&mut self) {}
}

/// A sink that records nothing; useful for pure validation ("does this
/// parse?") without materializing a value tree.
#[derive(Debug, Default)]
pub struct NullCallbacks;

impl ParseCallbacks for NullCallbacks {}
