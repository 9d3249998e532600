use crate::models::config;
use crate::models::Variant;

use super::{fail, ConfigArg};

pub fn handle_variant(variant: Option<Variant>, config_arg: &ConfigArg) {
    let path = match config_arg.resolve() {
        Ok(p) => p,
        Err(e) => fail(e),
    };
    let mut user_config = config::load_config(&path);

    match variant {
        None => {
            let current = user_config.variant;
            println!("Current variant: {}", current.display_name());
            println!("Output file:     {}", current.output_file());
            println!();
            println!("Variants:");
            println!("  classic:  fixed difficulty table, 📌 goals, combined + DSA views");
            println!("  extended: table plus id thresholds (<50 easy, >1000 hard),");
            println!("            📌/🎯 goals, combined + DSA + System Design views");
            println!();
            println!("To change: plantrack variant <classic|extended>");
        }
        Some(new_variant) => {
            let old_variant = user_config.variant;
            if old_variant == new_variant {
                println!("Variant is already set to {}", new_variant.display_name());
                return;
            }

            user_config.variant = new_variant;
            if let Err(e) = config::save_config(&path, &user_config) {
                fail(e);
            }

            println!(
                "Variant changed from {} to {}",
                old_variant.display_name(),
                new_variant.display_name()
            );
        }
    }
}
