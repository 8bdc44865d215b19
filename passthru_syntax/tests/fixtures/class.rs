// Not compiled: overload sets are only legal as far as the parser is concerned.
pub struct Class {
    pub some_prop: String,
}

impl Class {
    pub const SOME_PROP: &'static str = "some_prop";

    pub fn method_no_parameters_void(&self) {
        unimplemented!()
    }
    pub fn method_with_one_parameter_returns(&self, p1: String) -> u32 {
        unimplemented!()
    }
    pub fn method_with_two_parameter_returns(&self, p1: String, p2: String) -> u32 {
        unimplemented!()
    }
    pub fn overload(&self) {}
    pub fn overload(&self, p1: String) {}
    pub fn overload(&self, p1: String, p2: String) {}
    pub fn reverse_overload(&self, p1: String, p2: String) {}
    pub fn reverse_overload(&self, p1: String) {}
    pub fn reverse_overload(&self) {}
    pub fn explicit_unit(&self) -> () {}
}

pub trait Unrelated {
    fn unrelated(&self);
}
