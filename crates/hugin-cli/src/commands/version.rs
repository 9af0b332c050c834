//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum backend status and concept demos",
        style("Hugin").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  hugin-ir           Circuit intermediate representation");
    println!("  hugin-hal          Hardware abstraction layer");
    println!("  hugin-math         Closed-form quantum-state numerics");
    println!("  hugin-adapter-sim  Local statevector simulator");
    println!("  hugin-adapter-ibm  IBM Quantum cloud status client");
    println!("  hugin-cli          Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hugin-qc/hugin").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
