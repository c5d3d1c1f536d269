use std::io::Write;

use crate::deep_code::deep_code;
use crate::io::{print_line, DeepCodeError};
use crate::timing::TimingGuard;

/// Value bound at module level before the main routine runs. Never printed.
pub const MODULE_LEVEL_A: i64 = 1337;

/// Number of times the main routine repeats `deep_code`.
pub const DEEP_CODE_CALLS: usize = 3;

pub const EXPECTED_TRANSCRIPT: &str = "\
This is a main code
This is a dummy method 1 2
This is a deep code 3 27
This is a lol function
This is a dummy method 1 2
This is a deep code 3 27
This is a lol function
This is a dummy method 1 2
This is a deep code 3 27
This is a lol function
";

pub fn main_code<W: Write + ?Sized>(out: &mut W) -> Result<(), DeepCodeError> {
    print_line(out, &[&"This is a main code"])?;
    let a = 1;
    let b = 2;
    let _c = a + b;
    for call in 1..=DEEP_CODE_CALLS {
        let _guard = TimingGuard::for_call("deep_code", call);
        deep_code(out)?;
    }
    Ok(())
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<(), DeepCodeError> {
    let _guard = TimingGuard::new("main_code");
    main_code(out)?;
    out.flush()?;
    Ok(())
}

pub fn transcript() -> Result<String, DeepCodeError> {
    let mut buffer = Vec::new();
    run(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
