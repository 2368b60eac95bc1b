//! Building testbench assertion messages.
//!
//! Run with: cargo run --example assertion_messages

use sformat::{sformat, BitVector, TimeUnit, TimeValue};
use std::error::Error;

struct Sample {
    at: TimeValue,
    expected: BitVector,
    actual: BitVector,
}

fn main() -> Result<(), Box<dyn Error>> {
    let samples = vec![
        Sample {
            at: TimeValue::new(100, TimeUnit::Ns),
            expected: BitVector::new(0x3c, 8).ok_or("bad width")?,
            actual: BitVector::new(0x3c, 8).ok_or("bad width")?,
        },
        Sample {
            at: TimeValue::new(110, TimeUnit::Ns),
            expected: BitVector::new(0x3d, 8).ok_or("bad width")?,
            actual: BitVector::new(0x1d, 8).ok_or("bad width")?,
        },
    ];

    let mut failures = 0u32;
    for sample in &samples {
        let status = if sample.expected == sample.actual {
            "PASS"
        } else {
            failures += 1;
            "FAIL"
        };
        let line = sformat!(
            "[%8t] %-4s expected=%b (0x%x) actual=%b (0x%x)",
            sample.at,
            status,
            sample.expected,
            sample.expected,
            sample.actual,
            sample.actual
        )?;
        println!("{}", line);
    }

    println!("{}", sformat!("%u of %u checks failed", failures, samples.len())?);

    // Formatting failures are values, not panics
    if let Err(err) = sformat!("%d", "not a number") {
        println!("rejected: {}", err);
    }

    Ok(())
}
