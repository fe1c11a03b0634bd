//! List command handler
//!
//! Prints catalog data: areas, the locations of one area, or every timezone.

use anyhow::Result;

use tzpick::catalog;

/// What `tzpick list` should print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    Areas,
    Locations(String),
    Timezones,
}

impl ListTarget {
    pub fn from_flags(areas: bool, locations: Option<String>) -> Self {
        match (areas, locations) {
            (true, _) => ListTarget::Areas,
            (false, Some(area)) => ListTarget::Locations(area),
            (false, None) => ListTarget::Timezones,
        }
    }
}

pub fn cmd_list(target: &ListTarget, json: bool) -> Result<()> {
    let items = collect(target)?;

    if json {
        tzpick::ui::json::emit(serde_json::json!(items))?;
        return Ok(());
    }

    for item in items {
        println!("{}", item);
    }
    Ok(())
}

fn collect(target: &ListTarget) -> Result<Vec<&'static str>> {
    Ok(match target {
        ListTarget::Areas => catalog::list_areas().into_keys().collect(),
        ListTarget::Locations(area) => catalog::locations_in(area)?,
        ListTarget::Timezones => catalog::ALL_TIMEZONES.to_vec(),
    })
}
