//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum circuit board editor tools",
        style("qboard").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qboard-ir            Board model, placement rules, wire encoding");
    println!("  qboard-state         State vectors and chart datasets");
    println!("  qboard-hal           Simulation backend interface");
    println!("  qboard-adapter-http  HTTP simulation service client");
    println!("  qboard-editor        Editor session and result sequencing");
    println!("  qboard-cli           Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
