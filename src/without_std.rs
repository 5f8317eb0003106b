#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

// f64 bit fiddling (to_bits/from_bits) is in core, but rounding helpers
// come from num-traits when there is no std.
#[allow(unused_imports)]
use num_traits::float::FloatCore;

// Wrap core:: and alloc:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        fmt,
        iter,
        mem,
        num,
        ops,
        slice,
        str,
    };

    pub use alloc::borrow;
    pub use alloc::string;
    pub use alloc::vec;

    pub use alloc::string::String;
    pub use alloc::vec::Vec;
}
