use std::io::Write;

use crate::io::{print_line, DeepCodeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dummy {
    pub a: i64,
    pub b: i64,
}

impl Dummy {
    pub fn new() -> Self {
        Self { a: 1, b: 2 }
    }

    pub fn dummy_method<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), DeepCodeError> {
        print_line(out, &[&"This is a dummy method", &self.a, &self.b])
    }
}

impl Default for Dummy {
    fn default() -> Self {
        Self::new()
    }
}
