//! `billar` — offline checks for venue schedules and venue lists.
//!
//! # Usage
//!
//! ```
//! billar validate horarios.json
//! billar suggest horarios.json --day LUNES
//! billar nearby venues.json --lat -17.3895 --lon -66.1568 --radius 3 --tag pool
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use billar_core::{day::Day, geo::TableTag};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use commands::NearbyQuery;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "billar", about = "Offline checks for Billar venue data")]
struct Args {
  /// Path to a TOML config file (center_lat, center_lon, radius_km).
  #[arg(short, long, value_name = "FILE", env = "BILLAR_CONFIG")]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Validate a weekly schedule in backend JSON format.
  Validate {
    /// JSON object keyed DOMINGO…SABADO.
    file: PathBuf,
  },
  /// Suggest default hours for a new shift on one day.
  Suggest {
    file: PathBuf,
    #[arg(short, long)]
    day:  Day,
  },
  /// List venues near a point.
  Nearby {
    /// JSON array of venues.
    file:          PathBuf,
    #[arg(long, allow_hyphen_values = true)]
    lat:           Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    lon:           Option<f64>,
    /// Search radius in kilometres.
    #[arg(short, long)]
    radius:        Option<f64>,
    /// Accepted table type; repeat for several. None accepts all.
    #[arg(short, long = "tag")]
    tags:          Vec<TableTag>,
    /// Nearest first instead of file order.
    #[arg(long)]
    sort_distance: bool,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug, PartialEq)]
struct ConfigFile {
  center_lat: Option<f64>,
  center_lon: Option<f64>,
  radius_km:  Option<f64>,
}

const DEFAULT_RADIUS_KM: f64 = 5.0;

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  let output = match args.command {
    Command::Validate { file } => commands::validate(&file)?,
    Command::Suggest { file, day } => commands::suggest(&file, day)?,
    Command::Nearby {
      file,
      lat,
      lon,
      radius,
      tags,
      sort_distance,
    } => {
      // CLI flags override the config file, which overrides defaults.
      let query = NearbyQuery {
        lat: lat
          .or(file_cfg.center_lat)
          .context("no latitude given (--lat or center_lat in config)")?,
        lon: lon
          .or(file_cfg.center_lon)
          .context("no longitude given (--lon or center_lon in config)")?,
        radius_km: radius.or(file_cfg.radius_km).unwrap_or(DEFAULT_RADIUS_KM),
        tags: tags.into_iter().collect(),
        sort_by_distance: sort_distance,
      };
      commands::nearby(&file, &query)?
    }
  };

  print!("{output}");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_nearby_with_negative_coordinates() {
    let args = Args::try_parse_from([
      "billar", "nearby", "v.json", "--lat", "-17.39", "--lon", "-66.15",
      "--tag", "pool", "--tag", "SNOOKER",
    ])
    .unwrap();
    match args.command {
      Command::Nearby { lat, lon, tags, .. } => {
        assert_eq!(lat, Some(-17.39));
        assert_eq!(lon, Some(-66.15));
        assert_eq!(tags, vec![TableTag::Pool, TableTag::Snooker]);
      }
      other => panic!("unexpected command: {other:?}"),
    }
  }

  #[test]
  fn parses_suggest_day() {
    let args =
      Args::try_parse_from(["billar", "suggest", "h.json", "--day", "sabado"])
        .unwrap();
    assert!(matches!(args.command, Command::Suggest { day: Day::Sabado, .. }));
  }

  #[test]
  fn rejects_unknown_tag() {
    assert!(
      Args::try_parse_from(["billar", "nearby", "v.json", "--tag", "darts"])
        .is_err()
    );
  }

  #[test]
  fn config_file_fields_are_optional() {
    let cfg: ConfigFile = toml::from_str("radius_km = 2.5\n").unwrap();
    assert_eq!(cfg, ConfigFile {
      center_lat: None,
      center_lon: None,
      radius_km:  Some(2.5),
    });
  }
}
