// Terminal UI utilities

use colored::Colorize;

pub fn print_error(message: &str) {
    eprintln!("{}", format!("❌ {}", message).bright_red().bold());
}
