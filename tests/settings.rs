// tests/settings.rs
use std::fs;

use f1_live::config::options::{AppOptions, ExportFormat, Location};
use f1_live::config::settings;
use f1_live::standings::SessionType;

#[test]
fn applies_known_keys_and_skips_junk() {
    let text = "\
# local overrides
season = 2023
session=sprint
order=https://www.formula1.com/en/results/2023/races/1210/qatar/sprint-results
strict_names=yes
format=tsv
include_headers=0
nonsense
colour=red
season=twenty
";
    let mut opts = AppOptions::default();
    settings::apply(text, &mut opts);

    assert_eq!(opts.fetch.season, 2023);
    assert_eq!(opts.fetch.session, Some(SessionType::Sprint));
    assert!(matches!(opts.fetch.order, Some(Location::Url(_))));
    assert!(opts.fetch.strict_names);
    assert!(!opts.fetch.demo);
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert!(!opts.export.include_headers);
}

#[test]
fn render_then_load_keeps_settings() {
    let mut opts = AppOptions::default();
    opts.fetch.season = 2022;
    opts.fetch.session = Some(SessionType::Qualifying);
    opts.fetch.demo = true;
    opts.fetch.order = Some(Location::parse("running_order.txt"));
    opts.export.format = ExportFormat::Tsv;

    let dir = std::env::temp_dir().join("f1_live_settings");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("f1_live.cfg");
    settings::save(&path, &opts).unwrap();

    assert_eq!(settings::load(&path), opts);
}

#[test]
fn missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("f1_live_settings_absent.cfg");
    let _ = fs::remove_file(&path);
    assert_eq!(settings::load(&path), AppOptions::default());
}

#[test]
fn out_dir_before_format_uses_the_final_format() {
    let mut opts = AppOptions::default();
    settings::apply("out_path=exports/\nformat=tsv\n", &mut opts);
    assert_eq!(opts.export.out_path(), std::path::Path::new("exports/").join("projection.tsv"));

    // the directory survives a render/apply round trip
    let mut again = AppOptions::default();
    settings::apply(&settings::render(&opts), &mut again);
    assert_eq!(again, opts);
}
