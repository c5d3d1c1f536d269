mod deep_code;
mod dummy;
mod io;
mod program;
pub mod timing;

pub use deep_code::{deep_code, lookup_table, power};
pub use dummy::Dummy;
pub use io::{print_line, DeepCodeError};
pub use program::{
    main_code, run, transcript, DEEP_CODE_CALLS, EXPECTED_TRANSCRIPT, MODULE_LEVEL_A,
};
