use std::fmt::Display;
use std::io::Write;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeepCodeError {
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("{base} ** {exp} does not fit in a 64-bit integer")]
    Overflow { base: i64, exp: i64 },
}

/// Write `values` separated by single spaces, then a newline.
pub fn print_line<W: Write + ?Sized>(
    out: &mut W,
    values: &[&dyn Display],
) -> Result<(), DeepCodeError> {
    let mut first = true;
    for value in values {
        if !first {
            out.write_all(b" ")?;
        }
        write!(out, "{value}")?;
        first = false;
    }
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{print_line, DeepCodeError};
    use std::io::{self, Write};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn joins_values_with_single_spaces() {
        let mut out = Vec::new();
        print_line(&mut out, &[&"value", &1, &2]).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "value 1 2\n");
    }

    #[test]
    fn overflow_names_the_operands() {
        let err = DeepCodeError::Overflow { base: 10, exp: 19 };
        assert_eq!(err.to_string(), "10 ** 19 does not fit in a 64-bit integer");
    }

    #[test]
    fn empty_values_write_bare_newline() {
        let mut out = Vec::new();
        print_line(&mut out, &[]).expect("write");
        assert_eq!(out, b"\n");
    }

    #[test]
    fn surfaces_writer_failures() {
        let err = print_line(&mut BrokenPipe, &[&"x"]).unwrap_err();
        match &err {
            DeepCodeError::Write(source) => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected write error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("failed to write output"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
