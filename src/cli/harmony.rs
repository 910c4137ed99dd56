//! Color harmony command.

use crate::accessibility::{color_harmony, harmony, HarmonyKind};
use crate::cli::common::{parse_color_arg, print_json, CliResult};
use clap::Args;
use serde::Serialize;

/// Generate hue-rotated harmony colors
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Base color
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Harmony scheme (complementary, analogous, triadic, split); all when omitted
    #[arg(long, value_name = "KIND")]
    pub kind: Option<HarmonyKind>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct HarmonyOutput {
    base: String,
    colors: Vec<String>,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self) -> CliResult<()> {
        let base = parse_color_arg(&self.color)?;
        let colors = match self.kind {
            Some(kind) => harmony(base, kind),
            None => color_harmony(base).to_vec(),
        };

        if self.json {
            return print_json(&HarmonyOutput {
                base: base.to_hex(),
                colors: colors.iter().map(|c| c.to_hex()).collect(),
            });
        }

        match self.kind {
            Some(kind) => println!("{kind} harmony of {base}:"),
            None => println!("Harmony of {base}:"),
        }
        for color in colors {
            println!("  {color}");
        }
        Ok(())
    }
}
