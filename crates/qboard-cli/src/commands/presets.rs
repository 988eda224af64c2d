//! Presets command implementation.

use console::style;

use qboard_ir::Preset;

use super::common::print_grid;

/// Execute the presets command.
pub fn execute(show: bool) {
    println!("{}", style("Built-in boards:").bold());

    for preset in Preset::all() {
        let grid = preset.grid();
        println!(
            "  {:<14} {:>2}x{:<3} {}",
            style(preset.name()).cyan(),
            grid.num_lines(),
            grid.num_steps(),
            style(preset.description()).dim()
        );
        if show {
            print_grid(&grid);
            println!();
        }
    }
}
