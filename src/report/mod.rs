//! Report assembler
//!
//! Renders the full document in a fixed order: header, frameworks
//! (statistics and feature groups), components, and the "How to make a
//! change" footer. Rendering is synchronous and has no side effects; the
//! capture timestamp is supplied by the caller.

pub mod sections;

use crate::aggregation::Aggregator;
use crate::config::ReportSettings;
use crate::core::Catalog;
use crate::errors::Result;
use crate::io::writers::markdown::{lines, Block};
use crate::stats::StatsIndex;
use chrono::{DateTime, Utc};

pub struct ReportAssembler<'a> {
    catalog: &'a Catalog,
    stats: &'a StatsIndex,
    settings: &'a ReportSettings,
    aggregator: Aggregator<'a>,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(catalog: &'a Catalog, stats: &'a StatsIndex, settings: &'a ReportSettings) -> Self {
        Self {
            catalog,
            stats,
            settings,
            aggregator: Aggregator::new(catalog),
        }
    }

    /// Render the whole report. Structural errors in the data abort rendering.
    pub fn render(&self, captured_at: DateTime<Utc>) -> Result<String> {
        let writers: Vec<fn(&Self, DateTime<Utc>) -> Result<Block>> = vec![
            |a, _| a.header(),
            |a, at| a.frameworks(at),
            |a, _| a.components(),
            |a, _| a.footer(),
        ];

        let blocks = writers
            .iter()
            .map(|writer| writer(self, captured_at))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Rendered report for {} frameworks and {} components",
            self.catalog.frameworks.len(),
            self.catalog.descriptors.len()
        );

        let mut document = lines(blocks);
        document.push('\n');
        Ok(document)
    }

    fn header(&self) -> Result<Block> {
        sections::header(self.settings)
    }

    fn frameworks(&self, captured_at: DateTime<Utc>) -> Result<Block> {
        sections::frameworks(self.catalog, &self.aggregator, self.stats, captured_at)
    }

    fn components(&self) -> Result<Block> {
        sections::components(self.catalog, &self.aggregator, self.settings)
    }

    fn footer(&self) -> Result<Block> {
        sections::footer(self.settings)
    }
}
