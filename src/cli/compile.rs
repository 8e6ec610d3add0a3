//! Compile command: prints the placement grid for a keyboard file.

use crate::cli::common::{load_catalogs, print_json, CliResult};
use crate::compiler::{load_keyboard, CompiledKeyboard};
use crate::config::Config;
use crate::models::{CompiledValue, GridLength, KeyText, NavigationTarget, Placement};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Compile a keyboard definition and print the resulting grid
#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Path to keyboard definition file (omitted means no file chosen)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output the placement grid as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of the compile output.
#[derive(Debug, Serialize)]
struct CompileResponse<'a> {
    file: String,
    shift_aware: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<FailureMessage>,
    issues: Vec<String>,
    grid: &'a crate::models::PlacementGrid,
}

/// Heading/detail pair of a fatal failure.
#[derive(Debug, Serialize)]
pub(crate) struct FailureMessage {
    pub heading: String,
    pub detail: String,
}

impl FailureMessage {
    pub(crate) fn from_keyboard(keyboard: &CompiledKeyboard) -> Option<Self> {
        keyboard.failure.as_ref().map(|failure| Self {
            heading: failure.heading().to_string(),
            detail: failure.detail(),
        })
    }
}

impl CompileArgs {
    /// Execute the compile command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let catalogs = load_catalogs(config)?;
        let path = config.resolve_keyboard_path(self.file.as_deref().unwrap_or(Path::new("")));
        let keyboard = load_keyboard(&path, catalogs.as_catalogs());

        if self.json {
            return print_json(&CompileResponse {
                file: path.display().to_string(),
                shift_aware: keyboard.shift_aware,
                failure: FailureMessage::from_keyboard(&keyboard),
                issues: keyboard.issues.iter().map(ToString::to_string).collect(),
                grid: &keyboard.grid,
            });
        }

        print_summary(&path, &keyboard);
        Ok(())
    }
}

fn print_summary(path: &Path, keyboard: &CompiledKeyboard) {
    let grid = &keyboard.grid;

    println!("Keyboard: {}", path.display());
    if let Some(failure) = FailureMessage::from_keyboard(keyboard) {
        println!("✗ {}", failure.heading);
        for line in failure.detail.lines() {
            println!("  {line}");
        }
    }

    let panel = if grid.output_row.visible {
        match grid.keys_height {
            GridLength::Star(weight) => format!("output panel shown, keys weighted {weight}"),
            GridLength::Pixel(height) => format!("output panel shown, keys {height}px"),
        }
    } else {
        "output panel hidden".to_string()
    };
    println!(
        "Grid: {} rows x {} columns ({})",
        grid.rows(),
        grid.cols(),
        panel
    );
    println!("Shift aware: {}", if keyboard.shift_aware { "yes" } else { "no" });
    if let Some(border) = grid.border_thickness {
        println!("Border: {border}");
    }

    println!("\nKeys:");
    for placement in grid.placements() {
        println!("  {}", describe_placement(placement));
    }

    if !keyboard.issues.is_empty() {
        println!("\nIssues:");
        for issue in &keyboard.issues {
            println!("  ⚠ {issue}");
        }
    }
}

fn describe_placement(placement: &Placement) -> String {
    let key = &placement.key;
    let text = match &key.text {
        KeyText::Blank => String::new(),
        KeyText::Plain(text) => format!("{:?}", text),
        KeyText::Shifted { up, down } => format!("{:?}/{:?}", up, down),
    };
    let symbol = key
        .symbol
        .as_ref()
        .map(|symbol| format!(" [{}]", symbol.name))
        .unwrap_or_default();

    let value = match &key.value {
        CompiledValue::FunctionAction(function) => format!("action {function}"),
        CompiledValue::LiteralText(text) => format!("text {:?}", text),
        CompiledValue::NavigateTo {
            target,
            replace_current,
        } => {
            let target = match target {
                NavigationTarget::Named(named) => named.to_string(),
                NavigationTarget::File(path) => path.display().to_string(),
            };
            let mode = if *replace_current { "replace" } else { "push" };
            format!("navigate {target} ({mode})")
        }
        CompiledValue::PluginInvocation(_) => "plugin".to_string(),
        CompiledValue::BackNavigation => "back".to_string(),
        CompiledValue::Empty => "-".to_string(),
    };

    format!(
        "({}, {}) {}x{} {:?} {}{} -> {}",
        placement.row,
        placement.col,
        placement.row_span,
        placement.col_span,
        key.sizing_class,
        text,
        symbol,
        value
    )
}
