// src/cli.rs
use std::path::PathBuf;

use clap::{ Parser, ValueEnum };

use crate::config::options::{ AppOptions, ClusterSelector, ExportFormat };
use crate::page::SnapshotPage;
use crate::progress::Progress;
use crate::{ file, reference, scrape };

#[derive(Debug, Parser)]
#[command(name = "mibig-domains", version, about = "Extract KS/ACP domains from MIBiG PKS cluster pages")]
pub struct Args {
    /// MIBiG JSON dump used to pick the PKS clusters
    #[arg(short, long, value_name = "FILE")]
    pub reference: Option<PathBuf>,

    /// Directory of saved page captures (<cluster_id>.json)
    #[arg(short, long, value_name = "DIR")]
    pub snapshots: Option<PathBuf>,

    /// Output table
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Only these accessions, comma separated
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub ids: Vec<String>,

    /// Print the PKS cluster ids and exit
    #[arg(long)]
    pub list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format { Csv, Tsv }

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(r) = &self.reference { opts.scrape.reference = r.clone(); }
        if let Some(s) = &self.snapshots { opts.scrape.snapshots = s.clone(); }

        let ids: Vec<String> = self.ids.iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !ids.is_empty() { opts.scrape.clusters = ClusterSelector::Ids(ids); }

        opts.export.format = match self.format {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        };
        if let Some(o) = &self.out { opts.export.set_path(o); }
        opts
    }
}

/// Console progress: one line per cluster.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("\n[→] {msg}");
    }
    fn item_done(&mut self, cluster_id: &str, found: usize) {
        self.done += 1;
        println!("[✓] {cluster_id}: {found} KS/ACP domains ({}/{})", self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, cluster_id: &str, reason: &str) {
        self.failed += 1;
        eprintln!("[!] Skipping {cluster_id}: {reason}");
    }
    fn finish(&mut self) {
        if self.failed > 0 {
            println!("\n[i] {} clusters skipped", self.failed);
        }
    }
}

pub fn run(args: Args) -> crate::error::Result<()> {
    crate::log::init();
    let opts = args.to_options();

    println!("[i] Reading local MIBiG JSON file...");
    let pks_ids = reference::load_pks_ids(&opts.scrape.reference)?;
    println!("[✓] Found {} PKS-only BGCs", pks_ids.len());
    let ids = opts.scrape.clusters.apply(pks_ids);

    if args.list {
        for id in &ids {
            println!("{id}");
        }
        return Ok(());
    }

    let mut page = SnapshotPage::new(&opts.scrape.snapshots);
    let mut progress = ConsoleProgress::default();
    let entries = scrape::collect_domains(&ids, &mut page, Some(&mut progress));

    match file::write_export(&opts.export, &entries)? {
        Some(path) => println!("\n✅ Extracted {} ACP/KS entries to {}", entries.len(), path.display()),
        None => {
            logf!("No ACP/KS domains found");
            println!("⚠️ No ACP/KS domains found.");
        }
    }
    Ok(())
}
