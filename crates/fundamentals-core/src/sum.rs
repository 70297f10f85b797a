//! Summation utility
//!
//! Adds two native integers and reports the result as `Sum: <value>`.

use std::io::{self, Write};

use crate::error::FundamentalsResult;

/// Native-width addition. Overflow wraps around.
pub fn sum(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Write one `Sum: <a + b>` line to `out` and return the sum
pub fn write_sum<W: Write>(out: &mut W, a: i32, b: i32) -> FundamentalsResult<i32> {
    let total = sum(a, b);
    writeln!(out, "Sum: {}", total)?;
    tracing::debug!(a, b, sum = total, "sum written");
    Ok(total)
}

/// Print the sum of `a` and `b` to standard output
pub fn add_number(a: i32, b: i32) -> FundamentalsResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_sum(&mut out, a, b)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rendered(a: i32, b: i32) -> String {
        let mut out = Vec::new();
        write_sum(&mut out, a, b).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_literal_pair() {
        assert_eq!(rendered(5, 10), "Sum: 15\n");
    }

    #[test]
    fn test_variable_pair() {
        let x = 4;
        assert_eq!(rendered(x, 20), "Sum: 24\n");
    }

    #[test]
    fn test_negative_and_zero() {
        assert_eq!(rendered(-7, 3), "Sum: -4\n");
        assert_eq!(rendered(0, 0), "Sum: 0\n");
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(sum(i32::MAX, 1), i32::MIN);
        assert_eq!(rendered(i32::MIN, -1), format!("Sum: {}\n", i32::MAX));
    }

    #[test]
    fn test_returns_sum() {
        let mut sink = Vec::new();
        assert_eq!(write_sum(&mut sink, 100, -1).unwrap(), 99);
    }

    #[test]
    fn test_write_failure_surfaces() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_sum(&mut Closed, 1, 2).unwrap_err();
        assert!(err.to_string().starts_with("IO/"));
    }

    proptest! {
        #[test]
        fn prop_sum_line_for_any_pair(a in any::<i32>(), b in any::<i32>()) {
            let mut out = Vec::new();
            let total = write_sum(&mut out, a, b).unwrap();
            prop_assert_eq!(total, a.wrapping_add(b));
            prop_assert_eq!(String::from_utf8(out).unwrap(), format!("Sum: {}\n", a.wrapping_add(b)));
        }
    }
}
