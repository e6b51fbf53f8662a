//! Interactive acquisition of bounded integers.

use std::num::IntErrorKind;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::infrastructure::Console;

pub const INVALID_INTEGER_MESSAGE: &str = "Please enter a valid integer.";

/// Prompt until the console yields a base-10 integer within `[min, max]`.
///
/// A bound of `None` is unconstrained. Malformed or out-of-range input is answered
/// with a corrective message and the prompt is repeated, without a retry limit.
/// Only end of input or a failing console ends the loop with an error.
pub fn read_bounded_int<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    min: Option<i64>,
    max: Option<i64>,
) -> ApplicationResult<i64> {
    loop {
        console.write(prompt).io_context("write prompt")?;
        let Some(line) = console.read_line().io_context("read input")? else {
            return Err(ApplicationError::InputClosed {
                prompt: prompt.trim().to_string(),
            });
        };

        let value = match line.trim().parse::<i64>() {
            Ok(value) => value,
            Err(e) => {
                debug!("rejected input {:?}: {}", line, e);
                // well-formed but wider than i64: still a range violation
                let message = match e.kind() {
                    IntErrorKind::PosOverflow => {
                        format!("Value must be <= {}", max.unwrap_or(i64::MAX))
                    }
                    IntErrorKind::NegOverflow => {
                        format!("Value must be >= {}", min.unwrap_or(i64::MIN))
                    }
                    _ => INVALID_INTEGER_MESSAGE.to_string(),
                };
                console.write_line(&message).io_context("write message")?;
                continue;
            }
        };

        if let Some(min) = min.filter(|min| value < *min) {
            console
                .write_line(&format!("Value must be >= {min}"))
                .io_context("write message")?;
            continue;
        }
        if let Some(max) = max.filter(|max| value > *max) {
            console
                .write_line(&format!("Value must be <= {max}"))
                .io_context("write message")?;
            continue;
        }
        return Ok(value);
    }
}
