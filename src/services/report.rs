use anyhow::Result;
use colored::*;
use log::info;
use std::fmt::Write;

use crate::config::settings::AppConfig;
use crate::config::{get_disambiguations, Categories};
use crate::database::{self, Store};
use crate::export::Exporter;
use crate::search::{search, SearchContext, SearchOutcome};
use crate::stats::{site_stats, top_reviewers, ReviewerStat, SiteStats};

/// Terminal rendering of the same views the API serves
pub struct ReportService {
    config: AppConfig,
    store: Store,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.storage.database_path)?;
        let store = Store::new(pool)?;
        Ok(Self { config, store })
    }

    pub fn top_reviewers(&self, limit: Option<usize>) -> Result<()> {
        let catalog = self.store.load_catalog()?;
        let limit = limit.unwrap_or(self.config.stats.top_reviewers_limit);
        let board = top_reviewers(&catalog.items, limit, &self.config.stats);
        print!("{}", format_leaderboard(&board));
        Ok(())
    }

    pub fn search(&self, query: &str) -> Result<()> {
        let catalog = self.store.load_catalog()?;
        let categories = Categories::default();
        let disambiguations = get_disambiguations();
        let ctx = SearchContext {
            categories: &categories,
            disambiguations: &disambiguations,
            search: &self.config.search,
            stats: &self.config.stats,
        };
        print!("{}", format_search(&search(&catalog.items, query, &ctx)));
        Ok(())
    }

    pub fn stats(&self) -> Result<()> {
        let catalog = self.store.load_catalog()?;
        print!("{}", format_site_stats(&site_stats(&catalog.users, &catalog.items)));
        Ok(())
    }

    pub fn export(&self, dir: Option<&str>) -> Result<()> {
        let dir = dir.unwrap_or(&self.config.storage.export_dir);
        let catalog = self.store.load_catalog()?;
        let path = Exporter::new(dir)?.export(&catalog)?;
        info!("Export finished");
        println!("{} {}", "Exported to".green(), path.display());
        Ok(())
    }
}

fn format_leaderboard(board: &[ReviewerStat]) -> String {
    let mut output = String::new();
    writeln!(output, "{}", "TOP REVIEWERS".bright_yellow().bold()).ok();

    if board.is_empty() {
        writeln!(output, "  {}", "No reviews yet".dimmed()).ok();
        return output;
    }

    for (rank, stat) in board.iter().enumerate() {
        writeln!(
            output,
            "  {:>2}. {} {} reviews, {} comments, avg {:.1}, engagement {}",
            rank + 1,
            stat.name.bright_white().bold(),
            stat.total_reviews,
            stat.total_comments,
            stat.average_rating,
            stat.total_engagement.to_string().bright_cyan()
        )
        .ok();
    }
    output
}

fn format_search(outcome: &SearchOutcome) -> String {
    let mut output = String::new();
    writeln!(output, "{} {:?}", "SEARCH".bright_yellow().bold(), outcome.query).ok();

    if let Some(overall) = &outcome.overall {
        writeln!(
            output,
            "  Overall {} from {} ratings across {} items",
            format!("{:.1}", overall.rating).bright_green().bold(),
            overall.total_ratings,
            overall.total_items
        )
        .ok();
    }
    if let Some(context) = &outcome.category_context {
        writeln!(output, "  Mostly {}", context).ok();
    }
    if let Some(entry) = &outcome.disambiguation {
        writeln!(output, "  {} {}", "Note:".yellow(), entry.note).ok();
    }

    if outcome.results.is_empty() {
        writeln!(output, "  {}", "No matching items".dimmed()).ok();
    }
    for item in &outcome.results {
        writeln!(
            output,
            "  - {} [{}] {:.1} ({} ratings)",
            item.name.bright_white(),
            item.category,
            item.average_rating,
            item.ratings.len()
        )
        .ok();
    }

    if !outcome.suggestions.is_empty() {
        writeln!(output, "  Did you mean: {}", outcome.suggestions.join(", ")).ok();
    }
    output
}

fn format_site_stats(stats: &SiteStats) -> String {
    let mut output = String::new();
    writeln!(output, "{}", "SITE STATISTICS".bright_yellow().bold()).ok();
    for (label, value) in [
        ("Users", stats.total_users),
        ("Items", stats.total_items),
        ("Reviews", stats.total_reviews),
        ("Comments", stats.total_comments),
    ] {
        writeln!(output, "  {:<9} {}", label, value.to_string().bright_cyan()).ok();
    }
    output
}
