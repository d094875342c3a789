use crate::present::chart::{ChartSpec, UNKNOWN_LABEL};
use crate::present::dashboard::Dashboard;
use crate::record::EventRecord;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

/// Plain terminal rendering of the dashboard.
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Honeyscope Dashboard\n\
         ====================\n\
         events: {} | connects: {}\n",
        dashboard.total_events, dashboard.total_connects
    );

    section(&mut out, "Top IPs");
    if dashboard.top_ips.is_empty() {
        let _ = writeln!(out, "  <no connects>");
    }
    for row in &dashboard.top_ips {
        let _ = writeln!(out, "  {:<40} {:>6}", row.src_ip, row.ip_count);
    }
    out.push('\n');

    section(&mut out, "Top countries");
    for row in &dashboard.top_countries {
        let label = row.country_short.as_deref().unwrap_or(UNKNOWN_LABEL);
        let _ = writeln!(out, "  {:<8} {:>6}", label, row.country_count);
    }
    out.push('\n');

    section(&mut out, "Latest sessions");
    for s in &dashboard.latest_sessions {
        let _ = writeln!(
            out,
            "  {}  {:<14} {:<40} {:<8} {}",
            s.timestamp.format("%Y-%m-%d %H:%M:%S"),
            s.session.as_deref().unwrap_or("-"),
            s.src_ip,
            s.country_short.as_deref().unwrap_or(UNKNOWN_LABEL),
            s.isp.as_deref().unwrap_or("-"),
        );
    }
    out.push('\n');

    section(&mut out, "Top commands");
    for row in &dashboard.top_commands {
        let _ = writeln!(out, "  {:>6}  {}", row.input_count, row.input);
    }
    out.push('\n');

    render_chart(&mut out, &dashboard.time_chart);

    out
}

/// Horizontal bar rendering; bars are scaled to the largest value.
pub fn render_chart(out: &mut String, chart: &ChartSpec) {
    section(out, &chart.title);

    let Some(max) = chart.data.iter().copied().max().filter(|m| *m > 0) else {
        let _ = writeln!(out, "  <no samples>");
        return;
    };

    for (label, value) in chart.labels.iter().zip(&chart.data) {
        let bars = ((*value as f64 / max as f64) * BAR_WIDTH as f64).ceil() as usize;
        let _ = writeln!(
            out,
            "  {:<10} {:<width$} {:>6}",
            label,
            "█".repeat(bars.max(1)),
            value,
            width = BAR_WIDTH
        );
    }
}

/// One line per event, oldest first.
pub fn render_session(session_id: &str, records: &[&EventRecord]) -> String {
    let mut out = String::new();

    if records.is_empty() {
        let _ = writeln!(
            out,
            "{}: no events for session {session_id}",
            "warning".if_supports_color(Stream::Stdout, |t| t.style(warning_style()))
        );
        return out;
    }

    section(&mut out, &format!("Session {session_id}"));
    for r in records {
        let _ = write!(
            out,
            "  {} {:<16}",
            r.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            r.kind.name()
        );
        if let Some(ip) = r.src_ip() {
            let _ = write!(out, " {ip}");
        }
        if let Some(country) = r.country_short() {
            let _ = write!(out, " [{country}]");
        }
        if let Some(input) = r.input() {
            let _ = write!(out, " $ {input}");
        }
        out.push('\n');
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(
        out,
        "{}",
        title.if_supports_color(Stream::Stdout, |t| t.bold())
    );
}

fn warning_style() -> Style {
    Style::new().yellow().bold()
}
