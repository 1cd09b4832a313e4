//! String and integer unit families
//!
//! Two members per category so that a category default and an exact-type
//! override can be observed side by side (see [`crate::transform`]).

use crate::core_types::registry::opaque_type;

opaque_type! {
    /// Text tagged as the first string kind
    TString1: StringBased
}

opaque_type! {
    /// Text tagged as the second string kind
    TString2: StringBased
}

opaque_type! {
    /// Integer tagged as the first int kind
    TInt1: IntBased
}

opaque_type! {
    /// Integer tagged as the second int kind
    TInt2: IntBased
}
