
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        borrow,
        cmp,
        convert,
        fmt,
        iter,
        mem,
        num,
        ops,
        slice,
        str,
        string,
        vec,
    };

    pub use std::string::String;
    pub use std::vec::Vec;
}
