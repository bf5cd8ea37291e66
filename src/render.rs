//! Text rendering of simulation results.
//!
//! Everything here is presentation: the simulator never depends on it, and
//! any other front end can consume [`Report`] directly instead.

use std::fmt::Display;
use std::io::{self, Write};

use crate::policy::{CacheStats, PolicyKind};
use crate::simulator::{Report, Step};

const EVICTED_MARK: char = '*';

/// Format resident pages as `[a, b, c]`, front first.
///
/// When `evicted` is given and is the front page, it is suffixed with `*`.
pub fn format_cache<P: Display + PartialEq>(pages: &[P], evicted: Option<&P>) -> String {
    let body: Vec<String> = pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            if i == 0 && evicted == Some(page) {
                format!("{}{}", page, EVICTED_MARK)
            } else {
                page.to_string()
            }
        })
        .collect();
    format!("[{}]", body.join(", "))
}

/// Format a hit ratio with two decimals, or `N/A` when undefined.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}", r),
        None => "N/A".to_string(),
    }
}

/// One-sentence explanation of what a step did.
pub fn explain<P: Display>(step: &Step<P>, policy: PolicyKind) -> String {
    if step.hit {
        match policy {
            PolicyKind::Lru => "HIT: page already cached, moved to most recently used.".to_string(),
            PolicyKind::Fifo => "HIT: page already cached, order unchanged.".to_string(),
        }
    } else {
        match &step.evicted {
            Some(victim) => format!("MISS: cache full, evicted page {}.", victim),
            None => "MISS: added to cache, no eviction required.".to_string(),
        }
    }
}

/// Write the per-step table for a report.
///
/// With `explain_steps`, each row is followed by an explanation line.
pub fn render_steps<P, W>(out: &mut W, report: &Report<P>, explain_steps: bool) -> io::Result<()>
where
    P: Display + PartialEq,
    W: Write,
{
    writeln!(
        out,
        "{:>5}  {:>6}  {:<6}  {:<24}  {:<24}  {}",
        "Step", "Page", "Result", "Before", "After", "Evicted"
    )?;

    for step in &report.steps {
        let evicted = step
            .evicted
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        writeln!(
            out,
            "{:>5}  {:>6}  {:<6}  {:<24}  {:<24}  {}",
            step.index,
            step.page.to_string(),
            if step.hit { "HIT" } else { "MISS" },
            format_cache(&step.before, step.evicted.as_ref()),
            format_cache(&step.after, None),
            evicted
        )?;
        if explain_steps {
            writeln!(out, "{:>7}{}", "", explain(step, report.policy))?;
        }
    }
    Ok(())
}

/// Write the final report block.
pub fn render_summary<W: Write>(
    out: &mut W,
    policy: PolicyKind,
    capacity: usize,
    stats: &CacheStats,
) -> io::Result<()> {
    writeln!(out, "Final Report ({}, capacity {})", policy, capacity)?;
    writeln!(out, "  Total Requests: {}", stats.accesses())?;
    writeln!(out, "  Hits:           {}", stats.hits)?;
    writeln!(out, "  Misses:         {}", stats.misses)?;
    writeln!(out, "  Evictions:      {}", stats.evictions)?;
    writeln!(out, "  Hit Ratio:      {}", format_ratio(stats.hit_ratio()))
}

/// Write the step table followed by the final report.
pub fn render_report<P, W>(out: &mut W, report: &Report<P>, explain_steps: bool) -> io::Result<()>
where
    P: Display + PartialEq,
    W: Write,
{
    render_steps(out, report, explain_steps)?;
    writeln!(out)?;
    render_summary(out, report.policy, report.capacity, &report.stats)
}

/// Write one summary row per policy.
pub fn render_comparison<P, W: Write>(out: &mut W, reports: &[Report<P>]) -> io::Result<()> {
    writeln!(
        out,
        "{:<6}  {:>8}  {:>6}  {:>6}  {:>9}  {:>9}",
        "Policy", "Capacity", "Hits", "Misses", "Evictions", "Hit Ratio"
    )?;
    for report in reports {
        writeln!(
            out,
            "{:<6}  {:>8}  {:>6}  {:>6}  {:>9}  {:>9}",
            report.policy.name(),
            report.capacity,
            report.stats.hits,
            report.stats.misses,
            report.stats.evictions,
            format_ratio(report.hit_ratio())
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SimConfig;
    use crate::simulator::simulate;

    fn render_to_string(report: &Report<i64>, explain_steps: bool) -> String {
        let mut buf = Vec::new();
        render_report(&mut buf, report, explain_steps).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_cache() {
        assert_eq!(format_cache::<i64>(&[], None), "[]");
        assert_eq!(format_cache(&[1, 2, 3], None), "[1, 2, 3]");
        assert_eq!(format_cache(&[1, 2, 3], Some(&1)), "[1*, 2, 3]");
        // Only the front page can be the victim
        assert_eq!(format_cache(&[1, 2, 3], Some(&2)), "[1, 2, 3]");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(Some(1.0 / 6.0)), "0.17");
        assert_eq!(format_ratio(None), "N/A");
    }

    #[test]
    fn test_render_report() {
        let config = SimConfig::new(PolicyKind::Fifo, 3).unwrap();
        let report = simulate(config, &[1i64, 2, 3, 2, 4, 1]).unwrap();
        let text = render_to_string(&report, false);

        assert!(text.contains("[1*, 2, 3]"));
        assert!(text.contains("[2, 3, 4]"));
        assert!(text.contains("Total Requests: 6"));
        assert!(text.contains("Hits:           1"));
        assert!(text.contains("Misses:         5"));
        assert!(text.contains("Hit Ratio:      0.17"));
    }

    #[test]
    fn test_render_explanations() {
        let config = SimConfig::new(PolicyKind::Lru, 3).unwrap();
        let report = simulate(config, &[1i64, 2, 3, 2, 4]).unwrap();
        let text = render_to_string(&report, true);

        assert!(text.contains("MISS: added to cache, no eviction required."));
        assert!(text.contains("HIT: page already cached, moved to most recently used."));
        assert!(text.contains("MISS: cache full, evicted page 1."));
    }

    #[test]
    fn test_render_empty_report() {
        let config = SimConfig::new(PolicyKind::Lru, 3).unwrap();
        let report = simulate::<i64>(config, &[]).unwrap();
        let text = render_to_string(&report, false);

        assert!(text.contains("Total Requests: 0"));
        assert!(text.contains("Hit Ratio:      N/A"));
    }

    #[test]
    fn test_render_comparison() {
        let reports = crate::simulator::compare(3, &[1i64, 2, 3, 2, 4, 1]).unwrap();
        let mut buf = Vec::new();
        render_comparison(&mut buf, &reports).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("FIFO"));
        assert!(lines[2].starts_with("LRU"));
        assert!(lines[2].ends_with("0.17"));
    }
}
