use legobrick_core::{capitalize, Brick};

use crate::config::OutputConfig;
use crate::examples::*;

pub struct FormatOptions {
    pub decorations: bool,
    pub bar_glyph: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decorations: true,
            bar_glyph: "█".into(),
        }
    }
}

impl From<&OutputConfig> for FormatOptions {
    fn from(output: &OutputConfig) -> Self {
        Self {
            decorations: output.decorations,
            bar_glyph: output.bar_glyph.clone(),
        }
    }
}

const RULE_WIDTH: usize = 60;

/// Emoji prefix, or nothing when decorations are off.
fn mark(opts: &FormatOptions, emoji: &str) -> String {
    if opts.decorations {
        format!("{} ", emoji)
    } else {
        String::new()
    }
}

/// `selected` lists the examples that follow; the wording only claims "all"
/// when every example is in the run.
pub fn format_banner(selected: &[Example], opts: &FormatOptions) -> String {
    let mut out = String::new();
    if opts.decorations {
        out.push_str("🧱 LEGO BRICK EXAMPLES & EXPERIMENTS 🧱\n\n");
    } else {
        out.push_str("LEGO BRICK EXAMPLES & EXPERIMENTS\n\n");
    }
    if Example::ALL.iter().all(|e| selected.contains(e)) {
        out.push_str("Running all example demonstrations...\n\n");
    } else {
        let noun = if selected.len() == 1 { "demonstration" } else { "demonstrations" };
        out.push_str(&format!(
            "Running {} of {} example {}...\n\n",
            selected.len(),
            Example::ALL.len(),
            noun
        ));
    }
    out
}

pub fn format_footer(opts: &FormatOptions) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!(
        "{rule}\n{}All examples completed successfully!\n{rule}\n",
        mark(opts, "✅")
    );
    let rocket = if opts.decorations { " 🚀" } else { "" };
    out.push_str(&format!("\nNow go forth and build amazing things!{}\n", rocket));
    out.push_str("(Just remember: with great power comes great responsibility...)\n");
    out.push_str("(And also a lot of tiny plastic pieces to organize.)\n");
    out
}

pub fn format_reports(reports: &[Report], opts: &FormatOptions) -> String {
    let selected: Vec<Example> = reports.iter().map(Report::example).collect();
    let mut out = format_banner(&selected, opts);
    for report in reports {
        out.push_str(&format_report(report, opts));
        out.push('\n');
    }
    out.push_str(&format_footer(opts));
    out
}

pub fn format_report(report: &Report, opts: &FormatOptions) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);
    out.push_str(&format!("{rule}\n{}\n{rule}\n\n", report.example().title()));

    match report {
        Report::Collection(r) => format_collection(&mut out, r, opts),
        Report::Compatibility(r) => format_compatibility(&mut out, r, opts),
        Report::Counter(r) => format_counter(&mut out, r, opts),
        Report::Colors(r) => format_colors(&mut out, r, opts),
        Report::Experimental(r) => format_experimental(&mut out, r, opts),
        Report::Factory(r) => format_factory(&mut out, r, opts),
    }

    out
}

fn format_collection(out: &mut String, report: &CollectionReport, opts: &FormatOptions) {
    out.push_str(&format!(
        "{}Our collection has {} bricks:\n\n",
        mark(opts, "📦"),
        report.bricks.len()
    ));
    for (i, brick) in report.bricks.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, brick));
    }
    out.push_str(&format!(
        "\n{}Total studs across all bricks: {}\n",
        mark(opts, "🔢"),
        report.total_studs
    ));
    out.push_str("   (That's a lot of potential pain for bare feet!)\n");
}

fn format_compatibility(out: &mut String, report: &CompatibilityReport, opts: &FormatOptions) {
    out.push_str(&format!(
        "{}Testing connections for: {}\n\n",
        mark(opts, "🎯"),
        report.target
    ));
    for verdict in &report.verdicts {
        if verdict.can_connect {
            out.push_str(&format!("  {}CAN connect to: {}\n", mark(opts, "✅"), verdict.brick));
        } else {
            out.push_str(&format!("  {}CANNOT connect to: {}\n", mark(opts, "❌"), verdict.brick));
        }
    }
    out.push_str(&format!("\n{}Results:\n", mark(opts, "📊")));
    out.push_str(&format!("  Compatible: {}\n", report.compatible));
    out.push_str(&format!("  Incompatible: {}\n", report.incompatible));
}

fn format_counter(out: &mut String, report: &CounterReport, opts: &FormatOptions) {
    out.push_str(&format!("{}Starting production...\n\n", mark(opts, "🏭")));
    out.push_str(&format!("{}Production Results:\n\n", mark(opts, "📦")));
    let bullet = if opts.decorations { "•" } else { "-" };
    for brick in &report.bricks {
        out.push_str(&format!("  {} {}\n", bullet, brick));
    }
    out.push_str(&format!(
        "\n{}Total bricks manufactured: {}\n",
        mark(opts, "📊"),
        report.total_created
    ));
    out.push_str("   (The factory is running smoothly!)\n");
}

fn format_colors(out: &mut String, report: &ColorReport, opts: &FormatOptions) {
    out.push_str(&format!("{}Color Distribution:\n\n", mark(opts, "🎨")));
    for entry in &report.distribution {
        let bar = opts.bar_glyph.repeat(entry.count);
        out.push_str(&format!(
            "  {:8} {} ({})\n",
            capitalize(&entry.color),
            bar,
            entry.count
        ));
    }
    if let Some(ref color) = report.most_common {
        out.push_str(&format!(
            "\n{}Most common color: {}\n",
            mark(opts, "🏆"),
            capitalize(color)
        ));
        out.push_str("   (Clearly someone has a favorite!)\n");
    }
}

fn format_experimental(out: &mut String, report: &ExperimentalReport, opts: &FormatOptions) {
    out.push_str(&format!("{}Testing unusual brick configurations:\n\n", mark(opts, "🧪")));
    for specimen in &report.specimens {
        out.push_str(&format!("  {}: {}\n", specimen.label, specimen.brick));
    }
    out.push_str(&format!(
        "\n{}All experimental bricks created successfully!\n",
        mark(opts, "✨")
    ));
    out.push_str("   (LEGO lawyers have not yet sent cease and desist letters)\n");
}

fn format_factory(out: &mut String, report: &FactoryReport, opts: &FormatOptions) {
    let bullet = if opts.decorations { "•" } else { "-" };
    out.push_str(&format!("{}Welcome to the LEGO Brick Factory!\n\n", mark(opts, "🧱")));
    out.push_str("Manufacturing some bricks...\n\n");
    out.push_str(&format!("{}Brick Inventory:\n", mark(opts, "📦")));
    for brick in &report.inventory {
        out.push_str(&format!("  {} {}\n", bullet, brick));
    }

    out.push_str(&format!("\n{}Connection Tests:\n", mark(opts, "🔗")));
    for test in &report.connection_tests {
        out.push_str(&format!(
            "  Can {} connect to {}? {}\n",
            short_label(&test.from),
            short_label(&test.to),
            test.connects
        ));
    }

    // Details read the first three inventory bricks, whatever they are.
    if let [first, second, third, ..] = report.inventory.as_slice() {
        out.push_str(&format!("\n{}Brick Details:\n", mark(opts, "🎨")));
        out.push_str(&format!(
            "  The {} brick is {} and has {} studs\n",
            first.color(),
            first.color(),
            first.studs()
        ));
        out.push_str(&format!(
            "  The {} brick is {} units long\n",
            second.color(),
            second.length()
        ));
        out.push_str(&format!(
            "  The {} brick has {} units of width\n",
            third.color(),
            third.width()
        ));
    }

    out.push_str(&format!(
        "\n{}Success! You've mastered the art of digital LEGO brick creation!\n",
        mark(opts, "✨")
    ));
    out.push_str("   (Now if only organizing real LEGO was this easy...)\n");
}

/// `red (2x4)`
fn short_label(brick: &Brick) -> String {
    format!("{} ({}x{})", brick.color(), brick.length(), brick.width())
}

pub fn format_describe(bricks: &[Brick]) -> String {
    let mut out = String::new();
    for brick in bricks {
        out.push_str(&brick.describe());
        out.push('\n');
    }
    out
}

pub fn format_connect(a: &Brick, b: &Brick) -> String {
    format!(
        "Can {} connect to {}? {}\n",
        short_label(a),
        short_label(b),
        a.can_connect_to(b)
    )
}
