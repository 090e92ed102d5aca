use std::io::{self, Write};
use anyhow::Result;
use colored::Colorize;

pub struct Prompt;

impl Prompt {
    pub fn new() -> Self {
        Self
    }

    /// Read one line, showing the selected component in the prompt.
    pub fn get_input(&self, selected: Option<&str>) -> Result<String> {
        match selected {
            Some(name) => print!("{} {} ", format!("[{}]", name).as_str().cyan(), ">>".bright_green().bold()),
            None => print!("{} ", ">>".bright_green().bold()),
        }
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input)
    }
}
