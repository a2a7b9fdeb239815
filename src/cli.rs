// src/cli.rs
use std::{env, path::PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use crate::{
    config::{
        consts::SETTINGS_FILE,
        options::{AppOptions, ExportFormat, Location},
        settings,
    },
    file,
    progress::Progress,
    runner, store,
    standings::SessionType,
    table::{self, NO_DATA},
};

/// Flags as typed; `None` means "keep what the settings file says".
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub season: Option<u32>,
    pub standings: Option<Location>,
    pub order: Option<Location>,
    /// `Some(None)` is an explicit `--session auto`.
    pub session: Option<Option<SessionType>>,
    pub demo: bool,
    pub offline: bool,
    pub strict: bool,
    pub format: Option<ExportFormat>,
    pub out: Option<String>,
    pub no_headers: bool,
    pub save_config: bool,
    pub help: bool,
}

impl CliArgs {
    pub fn apply(&self, opts: &mut AppOptions) -> Result<()> {
        if let Some(y) = self.season { opts.fetch.season = y; }
        if let Some(l) = &self.standings { opts.fetch.standings = Some(l.clone()); }
        if let Some(l) = &self.order { opts.fetch.order = Some(l.clone()); }
        if let Some(s) = self.session { opts.fetch.session = s; }
        if self.demo { opts.fetch.demo = true; }
        if self.strict { opts.fetch.strict_names = true; }
        if let Some(f) = self.format { opts.export.format = f; }
        if let Some(o) = &self.out { opts.export.set_path(o); }
        if self.no_headers { opts.export.include_headers = false; }

        if self.offline {
            let (standings, order) = store::offline_locations()
                .ok_or_else(|| eyre!("--offline: no stored standings snapshot in {}", store::snapshot_dir().display()))?;
            opts.fetch.standings = Some(standings);
            if self.order.is_none() {
                opts.fetch.order = order;
            }
        }
        Ok(())
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| eyre!("Missing value for {flag}"));
        match a.as_str() {
            "--config" => out.config = Some(PathBuf::from(value("--config")?)),
            "--season" => {
                let v = value("--season")?;
                out.season = Some(v.parse().wrap_err_with(|| format!("Bad season: {v}"))?);
            }
            "--standings" => out.standings = Some(Location::parse(&value("--standings")?)),
            "--order" => out.order = Some(Location::parse(&value("--order")?)),
            "--session" => {
                let v = value("--session")?;
                out.session = Some(match v.to_ascii_lowercase().as_str() {
                    "auto" => None,
                    "race" | "sprint" | "qualifying" | "other" => Some(SessionType::from_label(&v)),
                    other => bail!("Unknown session: {other} (race|sprint|qualifying|other|auto)"),
                });
            }
            "--demo" => out.demo = true,
            "--offline" => out.offline = true,
            "--strict" => out.strict = true,
            "--format" => {
                let v = value("--format")?;
                out.format = Some(ExportFormat::parse(&v).ok_or_else(|| eyre!("Unknown format: {v}"))?);
            }
            "-o" | "--out" => out.out = Some(value("--out")?),
            "--no-headers" => out.no_headers = true,
            "--save-config" => out.save_config = true,
            "-h" | "--help" => out.help = true,
            _ => bail!("Unknown arg: {a}"),
        }
    }
    Ok(out)
}

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn step_done(&mut self, step: &str) { eprintln!("  ✓ {step}"); }
}

pub fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let cfg_path = args.config.clone().unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let mut opts = settings::load(&cfg_path);
    args.apply(&mut opts)?;

    if args.save_config {
        settings::save(&cfg_path, &opts)
            .wrap_err_with(|| format!("Cannot write {}", cfg_path.display()))?;
        eprintln!("Saved {}", cfg_path.display());
    }

    let report = runner::run(&opts.fetch, Some(&mut CliProgress))?;
    eprintln!("{}", report.summary());

    let Some(ds) = report.dataset() else {
        println!("{NO_DATA}");
        return Ok(());
    };

    if args.out.is_some() || args.format.is_some() {
        let path = file::write_export(&opts.export, &ds).map_err(|e| eyre!("Export failed: {e}"))?;
        eprintln!("Wrote {}", path.display());
    } else {
        print!("{}", table::render_text(&ds));
    }
    Ok(())
}
