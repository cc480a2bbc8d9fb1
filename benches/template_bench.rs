//! Quick benchmark to verify placeholder extraction and render performance

use serde_json::json;
use std::time::Instant;
use stencil::{Overrides, Template};

fn main() {
    let values: Overrides = [
        ("name".to_string(), json!("Ana")),
        ("age".to_string(), json!(30)),
        ("city".to_string(), json!("Lisbon")),
    ]
    .into_iter()
    .collect();

    // Sources of varying placeholder density
    let sources = vec![
        "Simple text with no placeholders",
        "Hello {name}",
        "Hello {name}, you are {age} years old",
        "{name} {name} {name} lives in {city} at age {age}",
        "{ not one } {name} mixed {{escaped} content {age} and {missing}",
    ];

    println!("Template Render Performance Test");
    println!("================================\n");

    // Warm up the pattern cache
    for source in &sources {
        let _ = Template::new(*source).render_with(&values);
    }

    for source in &sources {
        let iterations = 10_000u32;

        let start = Instant::now();
        for _ in 0..iterations {
            let _ = Template::new(*source);
        }
        let construct = start.elapsed();

        let template = Template::new(*source);
        let start = Instant::now();
        for _ in 0..iterations {
            let _ = template.render_with(&values);
        }
        let render = start.elapsed();

        println!("Source: {:70}", format!("\"{}\"", source));
        println!("  Construct: {:?} per op", construct / iterations);
        println!("  Render:    {:?} per op\n", render / iterations);
    }
}
