//! Example usage of templates: build, render, fork, validate

use serde_json::json;
use stencil::util::wrap;
use stencil::{FixSuggestion, Overrides, Template};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========================================
    // Build and render
    // ========================================

    println!("=== Build and Render ===\n");

    let letter = Template::builder("Dear {title} {surname}, your order {order} has shipped.")
        .default_value("title", "Mx")
        .build();

    println!("Placeholders: {:?}", letter.placeholders());

    let values: Overrides = [
        ("surname".to_string(), json!("Roe")),
        ("order".to_string(), json!(1204)),
    ]
    .into_iter()
    .collect();

    println!("Rendered: {}", letter.render_with(&values));

    // Unresolved placeholders stay verbatim
    println!("Defaults only: {}\n", letter);

    // ========================================
    // Fork pipelines
    // ========================================

    println!("=== Fork Pipeline ===\n");

    let stage_one = Template::new("{greeting}, {name}!");
    let stage_two = stage_one.fork(&[("greeting".to_string(), json!("Hello"))].into_iter().collect());

    println!("After first fork: {}", stage_two);
    println!("Remaining: {:?}\n", stage_two.placeholders());

    // ========================================
    // Validation
    // ========================================

    println!("=== Validation ===\n");

    match letter.render_checked(&values) {
        Ok(out) => println!("Validated: {out}"),
        Err(err) => {
            println!("Failed: {err}");
            if let Some(hint) = err.fix_suggestion() {
                println!("Hint: {hint}");
            }
        }
    }

    // A token built by hand matches what the scanner produces
    let token = wrap("surname", "{", "}");
    println!("Token {token} still present: {:?}", letter.remaining_placeholders(letter.source()));

    Ok(())
}
