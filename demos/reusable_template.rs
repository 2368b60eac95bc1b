//! Parsing a template once and rendering it for every clock cycle.
//!
//! Run with: cargo run --example reusable_template

use sformat::{args, FormatOptions, Template, TimeUnit, TimeValue};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let template = Template::parse("cycle %04u @ %t: state=%-6s valid=%s")?;
    println!(
        "template {:?} takes {} arguments",
        template.source(),
        template.argument_count()
    );

    let states = ["IDLE", "LOAD", "SHIFT", "DONE"];
    let period = TimeValue::new(10, TimeUnit::Ns);

    for (cycle, state) in states.iter().enumerate() {
        let now = TimeValue::new(period.magnitude * cycle as i64, period.unit);
        let line = template.render(&args![cycle, now, *state, *state == "DONE"])?;
        println!("{}", line);
    }

    // A tight capacity turns an oversized message into an error
    let narrow = FormatOptions::new().with_capacity(16);
    match template.render_with_options(&args![0u8, period, "IDLE", false], narrow) {
        Ok(line) => println!("{}", line),
        Err(err) => println!("too long for a 16 character display: {}", err),
    }

    Ok(())
}
