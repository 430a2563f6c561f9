//! List rules command implementation.

use flatlint::rules::{all_rule_tables, Preset};

/// Runs the list-rules command.
pub fn run() {
    for (table, rules) in all_rule_tables() {
        println!("{table} ({} rules):\n", rules.len());
        println!("{:<8} {:<50} Options", "Level", "Rule");
        println!("{}", "-".repeat(80));

        for (name, entry) in &rules {
            let options = if entry.options.is_empty() {
                String::new()
            } else {
                format!("{} option(s)", entry.options.len())
            };
            println!("{:<8} {:<50} {}", entry.level.to_string(), name, options);
        }
        println!();
    }

    println!("Extended presets:");
    for preset in Preset::ALL {
        println!("  {preset}");
    }

    println!("\nOverride rules with [[layers]] in flatlint.toml, e.g.:");
    println!("  [[layers]]");
    println!("  files = [\"scripts/**/*.ts\"]");
    println!("  rules = {{ \"no-console\" = \"off\" }}");
}
