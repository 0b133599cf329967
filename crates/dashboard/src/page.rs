// File: crates/dashboard/src/page.rs
// Summary: HTML mount step: dashboard cards around the inline chart SVGs, plus the tooltip hover script.

use std::fmt::Write;

use dash_client::{LevelInfo, Profile};
use dash_core::cards::{notable_transactions, AuditStats};
use dash_core::interaction::{format_date, format_kb};
use dash_core::svg::escape_text;
use dash_core::{Palette, Record};

pub const TOOLTIP_ID: &str = "transaction-info";

/// Everything one dashboard page shows. `None` cards failed to load and render
/// as unavailable.
pub struct PageContent<'a> {
    pub palette: &'a Palette,
    pub profile: Option<&'a Profile>,
    pub level: Option<&'a LevelInfo>,
    pub audits: Option<&'a AuditStats>,
    /// Newest first.
    pub transactions: Option<&'a [Record]>,
    pub progress_svg: &'a str,
    pub skills_svg: &'a str,
}

pub fn render_page(c: &PageContent<'_>) -> String {
    let p = c.palette;
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Dashboard</title>
<style>
body {{ background: {bg}; color: {axis}; font-family: Inter, sans-serif; margin: 0; padding: 24px; }}
.cards {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 16px; }}
.card {{ background: {panel}; border-radius: 8px; padding: 16px; }}
.card-title {{ font-size: 1rem; margin: 0 0 8px; color: {primary}; }}
.unavailable {{ opacity: 0.6; font-style: italic; }}
#{tip} {{ position: absolute; display: none; background: {bg}; border: 1px solid {primary}; border-radius: 6px; padding: 8px; pointer-events: none; }}
.data-point {{ cursor: pointer; }}
</style>
</head>
<body>
"#,
        bg = p.background,
        axis = p.axis,
        panel = p.panel,
        primary = p.primary,
        tip = TOOLTIP_ID,
    );

    match c.profile {
        Some(profile) => {
            let _ = writeln!(html, "<h1 class=\"greeting\">Welcome, {}!</h1>", escape_text(&profile.display_name()));
        }
        None => html.push_str("<h1 class=\"greeting\">Welcome!</h1>\n"),
    }

    html.push_str("<div class=\"cards\">\n");
    html.push_str(&level_card(c.level));
    html.push_str(&audits_card(c.audits));
    html.push_str(&transactions_card(c.transactions));
    html.push_str("</div>\n");

    let _ = write!(
        html,
        "<section class=\"card chart\" id=\"transactions-chart\">\n<h2 class=\"card-title\">Progress Timeline</h2>\n{}</section>\n",
        c.progress_svg
    );
    let _ = write!(
        html,
        "<section class=\"card chart\" id=\"skills-chart\">\n<h2 class=\"card-title\">Skills</h2>\n{}</section>\n",
        c.skills_svg
    );
    let _ = writeln!(html, "<div id=\"{TOOLTIP_ID}\"></div>");
    html.push_str(TOOLTIP_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

fn card(title: &str, body: Option<String>) -> String {
    let body = body.unwrap_or_else(|| "<p class=\"unavailable\">Unavailable</p>".to_string());
    format!("<section class=\"card\">\n<h2 class=\"card-title\">{title}</h2>\n{body}</section>\n")
}

fn level_card(level: Option<&LevelInfo>) -> String {
    card(
        "Current Level",
        level.map(|l| {
            format!(
                "<div class=\"level\">{}</div>\n<div class=\"rank\">{}</div>\n",
                dash_core::scene::fmt_number(l.level),
                escape_text(l.rank)
            )
        }),
    )
}

fn audits_card(audits: Option<&AuditStats>) -> String {
    card(
        "Audits",
        audits.map(|a| {
            format!(
                "<div class=\"audit-ratio\">{:.1}</div>\n<ul>\n<li>Total: {}</li>\n<li>Succeeded: {:.1}%</li>\n<li>Failed: {:.1}%</li>\n</ul>\n",
                a.ratio, a.total, a.succeeded_pct, a.failed_pct
            )
        }),
    )
}

fn transactions_card(transactions: Option<&[Record]>) -> String {
    card(
        "Latest Transactions",
        transactions.map(|records| {
            let mut list = String::from("<ul class=\"transactions\">\n");
            for r in notable_transactions(records) {
                let _ = writeln!(
                    list,
                    "<li><span class=\"name\">{}</span> <span class=\"amount\">{}</span> <span class=\"date\">{}</span></li>",
                    escape_text(&r.name),
                    format_kb(r.amount),
                    format_date(&r.timestamp)
                );
            }
            list.push_str("</ul>\n");
            list
        }),
    )
}

/// Binds every `.data-point` marker to the single tooltip panel: hover shows the
/// marker's record at its precomputed offset, leaving hides it.
const TOOLTIP_SCRIPT: &str = r#"<script>
(() => {
  const info = document.getElementById("transaction-info");
  const line = (cls, text) => {
    const el = document.createElement("div");
    el.className = cls;
    el.textContent = text;
    return el;
  };
  const show = (p) => {
    const d = p.dataset;
    info.replaceChildren(line("tip-title", d.tooltipTitle), line("tip-amount", d.tooltipAmount), line("tip-date", d.tooltipDate));
    info.style.left = d.tooltipLeft + "px";
    info.style.top = d.tooltipTop + "px";
    info.style.display = "block";
  };
  const hide = () => { info.style.display = "none"; };
  document.querySelectorAll(".data-point").forEach((p) => {
    p.addEventListener("mouseover", () => show(p));
    p.addEventListener("focus", () => show(p));
    p.addEventListener("mouseout", hide);
    p.addEventListener("blur", hide);
  });
})();
</script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn page(level: Option<&LevelInfo>, audits: Option<&AuditStats>, tx: Option<&[Record]>) -> String {
        let palette = Palette::dark();
        let profile = Profile { first_name: "Ada".into(), last_name: "<Lovelace>".into() };
        render_page(&PageContent {
            palette: &palette,
            profile: Some(&profile),
            level,
            audits,
            transactions: tx,
            progress_svg: "<svg class=\"progress-chart\"/>\n",
            skills_svg: "<svg class=\"skills-chart\"/>\n",
        })
    }

    #[test]
    fn cards_show_figures_and_escape_names() {
        let level = LevelInfo { level: 23.0, rank: "Apprentice developer" };
        let audits = AuditStats::new(3, 1, 1.34);
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let tx = vec![Record::new(t, 12_500.0, "lem-in"), Record::new(t, 900.0, "checkpoint")];
        let html = page(Some(&level), Some(&audits), Some(tx.as_slice()));

        assert!(html.contains("Welcome, Ada &lt;Lovelace&gt;!"));
        assert!(html.contains("<div class=\"level\">23</div>"));
        assert!(html.contains("Apprentice developer"));
        assert!(html.contains("<div class=\"audit-ratio\">1.3</div>"));
        assert!(html.contains("Succeeded: 75.0%"));
        assert!(html.contains("12.5 KB"));
        assert!(!html.contains("checkpoint"));
        assert!(html.contains("id=\"transaction-info\""));
        assert!(html.contains("<svg class=\"progress-chart\"/>"));
    }

    #[test]
    fn failed_cards_render_unavailable() {
        let html = page(None, None, None);
        assert_eq!(html.matches("Unavailable").count(), 3);
        assert!(html.contains("<svg class=\"skills-chart\"/>"));
    }

    #[test]
    fn zero_audits_show_zero_percent() {
        let audits = AuditStats::new(0, 0, 0.0);
        let html = page(None, Some(&audits), None);
        assert!(html.contains("Succeeded: 0.0%"));
        assert!(!html.contains("NaN"));
    }
}
