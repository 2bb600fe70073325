//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tablekit_core::{Name, Symbol};

/// Generate a valid name string (no trailing dot, thirteenth char `.`-`j`).
pub fn name_string() -> impl Strategy<Value = String> {
    "([.1-5a-z]{0,11}[1-5a-z]|[.1-5a-z]{12}[1-5a-j])?"
}

/// Generate a valid name.
pub fn name() -> impl Strategy<Value = Name> {
    name_string().prop_map(|s| Name::new(&s).expect("generated name is valid"))
}

/// Generate a valid symbol code.
pub fn symbol_code() -> impl Strategy<Value = String> {
    "[A-Z]{1,7}"
}

/// Generate a valid symbol.
pub fn symbol() -> impl Strategy<Value = Symbol> {
    (any::<u8>(), symbol_code())
        .prop_map(|(p, code)| Symbol::new(p, &code).expect("generated symbol is valid"))
}

/// Generate a text value of bounded length.
pub fn text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=max_len).prop_map(|cs| cs.into_iter().collect())
}

/// Parameters for a sequence of saves against one table.
#[derive(Debug, Clone)]
pub struct SaveParams {
    /// Keys drawn from a small range so collisions happen.
    pub keys: Vec<u64>,
    pub texts: Vec<String>,
}

impl Arbitrary for SaveParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::vec((0u64..16, text(32)), 0..48)
            .prop_map(|pairs| {
                let (keys, texts) = pairs.into_iter().unzip();
                SaveParams { keys, texts }
            })
            .boxed()
    }
}
