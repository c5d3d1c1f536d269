use std::io::Write;

use rustc_hash::FxHashMap;

use crate::dummy::Dummy;
use crate::io::{print_line, DeepCodeError};

pub fn lookup_table() -> FxHashMap<&'static str, i64> {
    let mut table = FxHashMap::default();
    table.insert("a", 1);
    table.insert("b", 2);
    table.insert("c", 3);
    table
}

/// `base` raised to `exp`, or `None` when the result overflows `i64`.
pub fn power(base: i64, exp: u32) -> Option<i64> {
    base.checked_pow(exp)
}

fn self_power(c: i64) -> Result<i64, DeepCodeError> {
    u32::try_from(c)
        .ok()
        .and_then(|exp| power(c, exp))
        .ok_or(DeepCodeError::Overflow { base: c, exp: c })
}

/// Prints the dummy line, the computed `c` and `c ** c`, then the nested function's line.
pub fn deep_code<W: Write + ?Sized>(out: &mut W) -> Result<(), DeepCodeError> {
    let _table = lookup_table();
    let x = Dummy::new();
    x.dummy_method(out)?;
    let b = 2;
    let c = 1 + b;
    let d = self_power(c)?;
    print_line(out, &[&"This is a deep code", &c, &d])?;

    fn lol<O: Write + ?Sized>(out: &mut O) -> Result<(), DeepCodeError> {
        print_line(out, &[&"This is a lol function"])
    }
    lol(out)
}
