use tabled::Table;

use crate::{scopes::Scope, types::ScopeTableRow};

/// Prints every scope Spotify defines with what it grants.
pub async fn scopes() {
    let table_rows: Vec<ScopeTableRow> = Scope::ALL
        .iter()
        .map(|s| ScopeTableRow {
            scope: s.as_str().to_string(),
            description: s.description().to_string(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
