// Declaration driven by the pass-through integration tests.
pub trait IInterface {
    fn method_with_return(&self, p1: String) -> u32;
    fn void_method(&self);
    fn other_method(&self);
}

pub trait Overloaded {
    fn overload(&self);
    fn overload(&self, p1: String);
    fn overload(&self, p1: String, p2: String) -> u32;
    fn has_return(&self) -> u32;
}
