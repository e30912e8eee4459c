use anyhow::Result;
use colored::Colorize;
use giftshelf_catalog::{FailureKind, LoadOutcome, RenderPlan, View};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// One card as it would be mounted
#[derive(Debug, Clone, Serialize)]
pub struct CardSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance_delay_ms: Option<u32>,
    pub looping_image: bool,
}

/// Result of inspecting one view of a catalog
#[derive(Debug, Clone, Serialize)]
pub struct InspectionRecord {
    pub resource: String,
    pub view: View,
    pub passed: bool,
    pub cards: Vec<CardSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<FailureKind>,
    /// Notification text the page would show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl InspectionRecord {
    pub fn from_outcome(resource: &str, outcome: &LoadOutcome) -> Self {
        let cards = outcome
            .plan
            .cards()
            .iter()
            .map(|card| CardSummary {
                name: card.item.name.clone(),
                price: card.item.price.filter(|_| card.show_price),
                entrance_delay_ms: card.entrance_delay_ms,
                looping_image: card.item.has_looping_image(),
            })
            .collect();
        let empty_state = match &outcome.plan {
            RenderPlan::Empty(state) => Some(state.default_text().to_string()),
            RenderPlan::Cards(_) => None,
        };
        Self {
            resource: resource.to_string(),
            view: outcome.view,
            passed: outcome.is_success(),
            cards,
            empty_state,
            failure_kind: outcome.failure.as_ref().map(|err| err.kind()),
            notice: outcome.notice_message(),
        }
    }
}

const fn view_label(view: View) -> &'static str {
    match view {
        View::Owned => "owned",
        View::Market => "market",
    }
}

pub fn generate_console_report(
    out: &mut dyn Write,
    records: &[InspectionRecord],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Catalog Inspection Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=============================".cyan())?;

    let total = records.len();
    let passed = records.iter().filter(|r| r.passed).count();
    writeln!(out, "Views inspected: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for record in records {
        let status = if record.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{status} {} ({})",
            view_label(record.view).bold(),
            record.resource
        )?;
        if let Some(notice) = &record.notice {
            writeln!(out, "   Notice: {}", notice.red())?;
        }
        if let Some(text) = &record.empty_state {
            writeln!(out, "   Empty state: {text}")?;
        }
        for card in &record.cards {
            let price = card
                .price
                .map_or_else(String::new, |price| format!(" ★{price}"));
            let delay = card
                .entrance_delay_ms
                .map_or_else(String::new, |ms| format!(" (+{ms}ms)"));
            writeln!(out, "   • {}{price}{delay}", card.name)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, records: &[InspectionRecord]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(records)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, records: &[InspectionRecord]) -> Result<()> {
    writeln!(out, "# Giftshelf Catalog Inspection\n")?;
    writeln!(
        out,
        "_Generated {}_\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;

    let total = records.len();
    let passed = records.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Views inspected**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}\n", total - passed)?;

    writeln!(out, "## Views\n")?;
    for record in records {
        let status = if record.passed { "✅" } else { "❌" };
        writeln!(out, "### {status} {}\n", view_label(record.view))?;
        if let Some(notice) = &record.notice {
            writeln!(out, "- **Notice**: {notice}")?;
        }
        if let Some(text) = &record.empty_state {
            writeln!(out, "- **Empty state**: {text}")?;
        }
        if !record.cards.is_empty() {
            writeln!(out, "| Name | Price | Entrance delay |")?;
            writeln!(out, "|------|-------|----------------|")?;
            for card in &record.cards {
                let price = card.price.map_or_else(|| "-".to_string(), |p| p.to_string());
                let delay = card
                    .entrance_delay_ms
                    .map_or_else(|| "-".to_string(), |ms| format!("{ms}ms"));
                writeln!(out, "| {} | {price} | {delay} |", card.name)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
