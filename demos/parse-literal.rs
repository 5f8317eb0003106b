//! Parse BigInt literals from the command line and print them back in a
//! few radixes.
//!
//! ```console
//! cargo run --example parse-literal -- 0x1F -42 0b101
//! ```

extern crate jsbigint;

use jsbigint::{init_with_bytes, to_string_radix, MutableBigIntRef, OperationStatus, ParsedBigInt};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        vec!["0x1F", "  -42 ", "0b101", "0o777", "18446744073709551616", ""]
    } else {
        args.iter().map(|s| s.as_str()).collect()
    };

    for input in inputs {
        let parsed: ParsedBigInt = match input.parse() {
            Ok(parsed) => parsed,
            Err(err) => {
                println!("{:?}: {}", input, err);
                continue;
            }
        };

        let mut buf = vec![0; parsed.num_digits()];
        let mut value = MutableBigIntRef::new(&mut buf);
        let status = init_with_bytes(&mut value, parsed.as_bytes());
        assert_eq!(status, OperationStatus::Returned);

        println!(
            "{:?}: bytes {:02x?} = {} (hex {}, binary {})",
            input,
            parsed.as_bytes(),
            value.as_immutable(),
            to_string_radix(value.as_immutable(), 16),
            to_string_radix(value.as_immutable(), 2),
        );
    }
}
