// src/runner.rs
use std::thread;

use crate::{
    config::options::FetchOptions,
    ingest::{DemoSource, IngestError, PageSource, Source},
    progress::Progress,
    specs::results::RunningOrder,
    standings::{self, ExactOnly, ExactThenContains, NameMatcher, ProjectedEntry, SessionType},
    table::{self, DataSet},
};

/// Outcome of one refresh.
#[derive(Clone, Debug)]
pub struct Report {
    pub source: String,
    pub session: SessionType,
    /// Display order, projected leader first.
    pub projected: Vec<ProjectedEntry>,
    /// Running-order names that matched nobody.
    pub unmatched: Vec<String>,
    /// Set when the running order could not be read and the projection fell
    /// back to current standings.
    pub order_error: Option<String>,
}

impl Report {
    pub fn dataset(&self) -> Option<DataSet> {
        table::to_dataset(&self.projected)
    }

    pub fn summary(&self) -> String {
        let live = self.projected.iter().any(|e| e.session_points > 0);
        let mut s = format!(
            "{}: {} drivers, session: {}{}",
            self.source,
            self.projected.len(),
            self.session,
            if live { "" } else { " (no live points)" },
        );
        if !self.unmatched.is_empty() {
            s.push_str(&format!(", unmatched: {}", self.unmatched.join(", ")));
        }
        if let Some(e) = &self.order_error {
            s.push_str(&format!(", running order unavailable: {e}"));
        }
        s
    }
}

pub fn build_source(opts: &FetchOptions) -> Result<Box<dyn Source>, IngestError> {
    if opts.demo {
        let session = opts.session.unwrap_or(SessionType::Race);
        return Ok(Box::new(DemoSource { session }));
    }
    Ok(Box::new(PageSource::new(opts.standings_location(), opts.order.clone())?))
}

/// Fetch, project, report.
pub fn run(opts: &FetchOptions, progress: Option<&mut dyn Progress>) -> Result<Report, IngestError> {
    let source = build_source(opts)?;
    run_with(source.as_ref(), opts, progress)
}

pub fn run_with(
    source: &dyn Source,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Report, IngestError> {
    let name = source.name();
    logf!("Run: begin source={name}");
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
        p.log(&format!("Fetching from {name}…"));
    }

    // Both pages at once; they don't depend on each other.
    let (standings, order) = thread::scope(|s| {
        let order = s.spawn(|| source.running_order());
        let standings = source.standings();
        let order = order.join().unwrap_or_else(|e| std::panic::resume_unwind(e));
        (standings, order)
    });

    let standings = match standings {
        Ok(v) => v,
        Err(e) => {
            loge!("Run: standings failed: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Standings: {e}"));
                p.finish();
            }
            return Err(e);
        }
    };
    if let Some(p) = progress.as_deref_mut() { p.step_done("standings"); }

    let (order, order_error) = match order {
        Ok(o) => (o, None),
        Err(e) => {
            loge!("Run: running order failed: {e}");
            (RunningOrder::default(), Some(e.to_string()))
        }
    };
    if let Some(p) = progress.as_deref_mut() { p.step_done("running order"); }

    let session = opts.session.or(order.session).unwrap_or(SessionType::Other);
    let matcher: &dyn NameMatcher = if opts.strict_names { &ExactOnly } else { &ExactThenContains };

    let projected = match standings::project_with(matcher, &standings, &order.names, session) {
        Ok(p) => p,
        Err(e) => {
            loge!("Run: projection rejected standings: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Standings: {e}"));
                p.finish();
            }
            return Err(e.into());
        }
    };
    let unmatched: Vec<String> = standings::unmatched(matcher, &standings, &order.names)
        .into_iter()
        .map(String::from)
        .collect();
    for u in &unmatched {
        logd!("Run: unmatched running-order name '{u}'");
    }
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("projection");
        p.finish();
    }

    logf!(
        "Run: OK drivers={} order={} session={} unmatched={}",
        projected.len(), order.names.len(), session, unmatched.len()
    );
    Ok(Report { source: name, session, projected, unmatched, order_error })
}
