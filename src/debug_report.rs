use chrono::NaiveDate;
use receiptor::{ExtractionDetails, ExtractionReport, ExtractionResult, QualityLevel};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_report(
    label: &str,
    report: &ExtractionReport,
    fallback_date: Option<NaiveDate>,
    verbose: bool,
    color: bool,
) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("🧾 Receipt: {label}"), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Fields ━━━", ansi::GRAY));
    print_fields(&report.result, fallback_date, &palette);

    println!("\n{}", palette.paint("━━━ Quality ━━━", ansi::GRAY));
    print_quality(&report.result, &palette);

    if verbose {
        println!("\n{}", palette.paint("━━━ Candidates ━━━", ansi::GRAY));
        print_candidates(&report.details, &palette);

        println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
        let m = &report.details.metrics;
        println!(
            "  Total: {}  │  Amount: {}  │  Vendor: {}  │  Date: {}  │  Time: {}  │  Category: {}",
            palette.paint(format!("{:?}", m.total), ansi::GREEN),
            palette.dim(format!("{:?}", m.amount)),
            palette.dim(format!("{:?}", m.vendor)),
            palette.dim(format!("{:?}", m.date)),
            palette.dim(format!("{:?}", m.time)),
            palette.dim(format!("{:?}", m.category)),
        );
    }
    println!();
}

fn print_fields(result: &ExtractionResult, fallback_date: Option<NaiveDate>, palette: &ansi::Palette) {
    let field = |name: &str, value: Option<String>| match value {
        Some(value) => println!("  {} {}", palette.paint(format!("{name:<9}"), ansi::BLUE), palette.paint(value, ansi::GREEN)),
        None => println!("  {} {}", palette.paint(format!("{name:<9}"), ansi::BLUE), palette.dim("not found")),
    };

    field("amount", result.amount.as_ref().map(|a| format!("₹{a}")));
    field("vendor", result.vendor.clone());

    match (result.date_iso(), fallback_date) {
        (Some(date), _) => {
            let confidence = result.date_confidence.map(|c| format!(" ({c}%)")).unwrap_or_default();
            field("date", Some(format!("{date}{}", palette.dim(confidence))));
        }
        (None, Some(fallback)) => {
            let shown = format!("{} {}", fallback.format("%Y-%m-%d"), palette.paint("(fallback)", ansi::YELLOW));
            field("date", Some(shown));
        }
        (None, None) => field("date", None),
    }

    field("time", result.time_hhmm());
    field("category", Some(result.category.to_string()));
    println!("  {} {}", palette.paint(format!("{:<9}", "note"), ansi::BLUE), palette.dim(&result.description));
}

fn print_quality(result: &ExtractionResult, palette: &ansi::Palette) {
    let color = match result.quality_level {
        QualityLevel::Excellent | QualityLevel::Good => ansi::GREEN,
        QualityLevel::Fair => ansi::YELLOW,
        QualityLevel::Poor => ansi::RED,
    };
    println!(
        "  {} {}",
        palette.bold(palette.paint(format!("{}/100", result.quality_score), color)),
        palette.paint(result.quality_level.as_str(), color)
    );
}

fn print_candidates(details: &ExtractionDetails, palette: &ansi::Palette) {
    println!("  {} {}", palette.dim("lines:"), details.lines);

    match &details.amount {
        Some(c) => println!(
            "  {} {} {}",
            palette.paint("amount", ansi::BLUE),
            palette.paint(c.value.to_string(), ansi::GREEN),
            palette.dim(format!("│ {:?}", c.source))
        ),
        None => println!("  {} {}", palette.paint("amount", ansi::BLUE), palette.dim("no strategy matched")),
    }

    if details.vendor_candidates.is_empty() {
        println!("  {} {}", palette.paint("vendor", ansi::BLUE), palette.dim("no candidate lines"));
    }
    for c in details.vendor_candidates.iter().take(5) {
        println!(
            "  {} {} {}",
            palette.paint(format!("[{}]", c.line_position), ansi::GRAY),
            palette.paint(&c.text, if c.score > 0 { ansi::GREEN } else { ansi::GRAY }),
            palette.dim(format!("│ score {}", c.score)),
        );
    }
    if details.vendor_candidates.len() > 5 {
        println!("    {}", palette.dim(format!("... +{} more", details.vendor_candidates.len() - 5)));
    }

    if let Some(d) = &details.date {
        println!(
            "  {} {} {}",
            palette.paint("date", ansi::BLUE),
            palette.paint(d.date.to_string(), ansi::GREEN),
            palette.dim(format!("│ rule: {} │ line {} │ {}%", d.rule, d.line_index, d.confidence)),
        );
    }
    if let Some(t) = &details.time {
        println!(
            "  {} {} {}",
            palette.paint("time", ansi::BLUE),
            palette.paint(t.time.format("%H:%M").to_string(), ansi::GREEN),
            palette.dim(format!("│ rule: {} │ line {}", t.rule, t.line_index)),
        );
    }

    let scored: Vec<String> = details
        .category_scores
        .iter()
        .filter(|(_, score)| *score > 0)
        .map(|(category, score)| format!("{category} {score}"))
        .collect();
    println!(
        "  {} {}",
        palette.paint("category", ansi::BLUE),
        if scored.is_empty() { palette.dim("no keywords") } else { palette.paint(scored.join(", "), ansi::CYAN) }
    );
}
