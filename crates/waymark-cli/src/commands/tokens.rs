//! Whitespace tokenizer command for plain-text tables

use anyhow::Result;
use waymark_csv::{lines, read_csv_file, split_whitespace};

pub fn run(input: &str) -> Result<()> {
    let Some(content) = read_csv_file(input) else {
        anyhow::bail!("Could not read {}", input);
    };

    for (index, line) in lines(&content).enumerate() {
        let tokens = split_whitespace(line);
        if tokens.is_empty() {
            continue;
        }
        println!("{:>4}: {}", index + 1, tokens.join(" | "));
    }

    Ok(())
}
