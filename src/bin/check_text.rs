use std::env;
use fundboard::profanity::{ProfanityFilter, WordListFilter};

fn main() {
    let filter = WordListFilter::new();

    let inputs: Vec<String> = env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("Usage: check_text <text>...");
        std::process::exit(2);
    }

    for (i, text) in inputs.iter().enumerate() {
        println!("Input #{}: {}", i + 1, text);

        if filter.check(text) {
            println!("  ❌ Contains listed words");
            println!("  Cleaned: {}", filter.clean(text));
        } else {
            println!("  ✅ Clean");
        }

        println!();
    }
}
