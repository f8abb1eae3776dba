use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{ExtractError, Result};

static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^CDIR-\d{4}-\d{2}-\d{2}-(?P<state>[A-Z]{2})-(?P<chamber>[HS])-(?P<district>\d+)\.txt$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Chamber {
    #[serde(rename = "H")]
    House,
    #[serde(rename = "S")]
    Senate,
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Chamber::House => "H",
            Chamber::Senate => "S",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub state: String,
    pub chamber: Chamber,
    pub district: u32,
}

/// Parse `CDIR-YYYY-MM-DD-<STATE>-<H|S>-<district>.txt`.
pub fn parse_filename(name: &str) -> Result<FileMeta> {
    let bad = || ExtractError::BadFilename { file: name.to_string() };
    let caps = FILENAME_RE.captures(name).ok_or_else(bad)?;
    let chamber = match &caps["chamber"] {
        "H" => Chamber::House,
        _ => Chamber::Senate,
    };
    let district = caps["district"].parse().map_err(|_| bad())?;
    Ok(FileMeta {
        state: caps["state"].to_string(),
        chamber,
        district,
    })
}
