// src/ingest/demo.rs
//! Built-in demo data for when no live session is available.
//! The running order is written the way live feeds print names (surnames,
//! caps, missing accents) so the matcher gets exercised too.

use super::{IngestError, Source};
use crate::specs::results::RunningOrder;
use crate::standings::{SessionType, StandingsEntry};

const DEMO_STANDINGS: &[(&str, &str, &str, u32)] = &[
    ("Max Verstappen", "NED", "Red Bull Racing Honda RBPT", 393),
    ("Lando Norris", "GBR", "McLaren Mercedes", 331),
    ("Charles Leclerc", "MON", "Ferrari", 307),
    ("Oscar Piastri", "AUS", "McLaren Mercedes", 262),
    ("Carlos Sainz", "ESP", "Ferrari", 244),
    ("Lewis Hamilton", "GBR", "Mercedes", 208),
    ("George Russell", "GBR", "Mercedes", 192),
    ("Sergio Pérez", "MEX", "Red Bull Racing Honda RBPT", 151),
    ("Fernando Alonso", "ESP", "Aston Martin Aramco Mercedes", 62),
    ("Nico Hülkenberg", "GER", "Haas Ferrari", 31),
];

const DEMO_ORDER: &[&str] = &[
    "NORRIS",
    "Leclerc",
    "Verstappen",
    "Piastri",
    "Sergio Perez",
    "Hulkenberg",
    "Sainz",
    "Hamilton",
    "Russell",
    "Alonso",
];

#[derive(Clone, Copy, Debug)]
pub struct DemoSource {
    pub session: SessionType,
}

impl Default for DemoSource {
    fn default() -> Self {
        Self { session: SessionType::Race }
    }
}

impl Source for DemoSource {
    fn name(&self) -> String {
        format!("demo ({})", self.session)
    }

    fn standings(&self) -> Result<Vec<StandingsEntry>, IngestError> {
        Ok(DEMO_STANDINGS
            .iter()
            .enumerate()
            .map(|(i, (name, nat, team, pts))| {
                StandingsEntry::new(i as u32 + 1, name, team, *pts).with_nationality(nat)
            })
            .collect())
    }

    fn running_order(&self) -> Result<RunningOrder, IngestError> {
        Ok(RunningOrder {
            names: DEMO_ORDER.iter().map(|s| s.to_string()).collect(),
            session: Some(self.session),
        })
    }
}
