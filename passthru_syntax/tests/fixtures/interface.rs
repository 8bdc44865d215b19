// Not compiled: overload sets are only legal as far as the parser is concerned.
pub trait SomeInterface {
    const SOME_PROP: &'static str;

    fn method_no_parameters_void(&self);
    fn method_with_one_parameter_returns(&self, p1: String) -> u32;
    fn method_with_two_parameter_returns(&self, p1: String, p2: String) -> u32;

    fn overload(&self);
    fn overload(&self, p1: String);
    fn overload(&self, p1: String, p2: String);

    fn reverse_overload(&self, p1: String, p2: String);
    fn reverse_overload(&self, p1: String);
    fn reverse_overload(&self);

    fn explicit_unit(&self) -> ();
}
