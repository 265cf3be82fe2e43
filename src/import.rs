//! Reading the team list out of a CSV export.
//!
//! The export starts with one metadata row, then a header row that must name a
//! `School` column; every following non-blank `School` cell is a team.

use std::io::Read;

use anyhow::{anyhow, bail, Context, Result};
use url::Url;

pub const SCHOOL_COLUMN: &str = "School";

pub fn read_team_names<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv_reader.records();

    // Skip first metadata row
    records
        .next()
        .context("CSV is empty")?
        .context("Failed to read metadata row")?;

    let header = records
        .next()
        .context("CSV has no header row")?
        .context("Failed to read header row")?;
    let Some(school_idx) = header.iter().position(|h| h.trim() == SCHOOL_COLUMN) else {
        bail!("'{}' column not found in CSV header", SCHOOL_COLUMN);
    };

    let mut teams = Vec::new();
    for record in records {
        let record = record.context("Failed to read CSV row")?;
        if let Some(name) = record.get(school_idx).map(str::trim) {
            if !name.is_empty() {
                teams.push(name.to_string());
            }
        }
    }

    if teams.is_empty() {
        bail!("No team data found in CSV.");
    }
    Ok(teams)
}

/// Connection URL from the discrete `DB_*` settings used by the container setup.
/// Credentials are percent-encoded so any password survives the round trip.
pub fn database_url_from_parts(host: &str, port: u16, name: &str, user: &str, password: &str) -> Result<String> {
    let mut url = Url::parse(&format!("postgres://{}:{}/{}", host, port, name))
        .with_context(|| format!("Invalid database host or name: {}:{}/{}", host, port, name))?;
    url.set_username(user)
        .map_err(|_| anyhow!("Cannot set database user on {}", url))?;
    if !password.is_empty() {
        url.set_password(Some(password))
            .map_err(|_| anyhow!("Cannot set database password on {}", url))?;
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_school_column_after_metadata_row() {
        let csv = "Exported 2026-07-01,,\nRank,School,Conference\n1,Georgia,SEC\n2,Ohio State,Big Ten\n";
        let teams = read_team_names(csv.as_bytes()).unwrap();
        assert_eq!(teams, vec!["Georgia", "Ohio State"]);
    }

    #[test]
    fn skips_blank_cells_and_short_rows() {
        let csv = "meta\nSchool,Conference\n  Auburn  ,SEC\n,Independent\n\"Miami, FL\",ACC\n";
        let teams = read_team_names(csv.as_bytes()).unwrap();
        assert_eq!(teams, vec!["Auburn", "Miami, FL"]);
    }

    #[test]
    fn missing_school_column_is_an_error() {
        let csv = "meta\nTeam,Conference\nAuburn,SEC\n";
        let err = read_team_names(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'School' column not found"));
    }

    #[test]
    fn no_teams_is_an_error() {
        let csv = "meta\nSchool\n\n";
        let err = read_team_names(csv.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "No team data found in CSV.");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(read_team_names("".as_bytes()).is_err());
    }

    #[test]
    fn builds_url_from_parts() {
        assert_eq!(
            database_url_from_parts("localhost", 5432, "cfb26", "cfbuser", "pw").unwrap(),
            "postgres://cfbuser:pw@localhost:5432/cfb26"
        );
    }

    #[test]
    fn reserved_characters_in_credentials_are_encoded() {
        let url = database_url_from_parts("db", 5432, "cfb26", "cfb user", "p@ss/w#rd:1").unwrap();
        assert_eq!(url, "postgres://cfb%20user:p%40ss%2Fw%23rd%3A1@db:5432/cfb26");

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.host_str(), Some("db"));
        assert_eq!(parsed.port(), Some(5432));
        assert_eq!(parsed.path(), "/cfb26");
    }

    #[test]
    fn empty_password_is_left_out() {
        assert_eq!(
            database_url_from_parts("localhost", 5432, "cfb26", "cfbuser", "").unwrap(),
            "postgres://cfbuser@localhost:5432/cfb26"
        );
    }
}
