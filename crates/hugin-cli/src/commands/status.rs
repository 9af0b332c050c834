//! Backend status command implementation.

use anyhow::Result;
use console::style;
use serde::Serialize;

use hugin_adapter_ibm::{BackendInfo, IbmClient};

use super::common::{create_progress_bar, print_info};

/// One row of the status table.
#[derive(Debug, Serialize)]
struct StatusRow {
    backend: String,
    qubits: usize,
    pending_jobs: Option<u32>,
}

impl From<&BackendInfo> for StatusRow {
    fn from(info: &BackendInfo) -> Self {
        Self {
            backend: info.name.clone(),
            qubits: info.num_qubits,
            pending_jobs: info.status.pending_jobs,
        }
    }
}

/// Execute the status command.
///
/// Lists the operational cloud backends in the order the service
/// returns them. Auth and listing failures are fatal; a single
/// backend whose detail fetch fails is skipped with a warning.
pub async fn execute(json: bool) -> Result<()> {
    let client = IbmClient::connect().await?;

    if json {
        let backends = client.list_backends().await?;
        let rows: Vec<StatusRow> = backends
            .iter()
            .filter(|b| b.status.operational)
            .map(StatusRow::from)
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let names = client.list_device_names().await?;
    let pb = create_progress_bar(names.len() as u64, "Querying backends...");

    let mut rows = Vec::with_capacity(names.len());
    for name in &names {
        match client.get_backend(name).await {
            Ok(info) if info.status.operational => rows.push(StatusRow::from(&info)),
            // Non-operational backends are excluded from the table.
            Ok(_) => {}
            Err(e) => tracing::warn!("skipping backend {name}: {e}"),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if rows.is_empty() {
        print_info("No operational backends reported by the service.");
        return Ok(());
    }

    println!("{} operational backends:\n", style("Hugin").cyan().bold());
    print!("{}", render_table(&rows));

    Ok(())
}

/// Render the fixed-width status table with its two-row header.
fn render_table(rows: &[StatusRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:>6} {:>10}\n",
        "Backend", "Qubits", "Pending"
    ));
    out.push_str(&format!(
        "{:<24} {:>6} {:>10}\n",
        "───────", "──────", "───────"
    ));
    for row in rows {
        let pending = row
            .pending_jobs
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        out.push_str(&format!(
            "{:<24} {:>6} {:>10}\n",
            row.backend, row.qubits, pending
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_two_header_rows() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 2);
        assert!(table.lines().next().unwrap().contains("Backend"));
    }

    #[test]
    fn test_table_rows_are_fixed_width() {
        let rows = vec![
            StatusRow {
                backend: "ibm_torino".into(),
                qubits: 133,
                pending_jobs: Some(12),
            },
            StatusRow {
                backend: "ibm_fez".into(),
                qubits: 156,
                pending_jobs: None,
            },
        ];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("ibm_torino"));
        assert!(lines[2].ends_with("12"));
        assert!(lines[3].ends_with("-"));
        // All rows pad the name column to the same width.
        assert_eq!(lines[2].find("133"), lines[3].find("156"));
    }

    #[test]
    fn test_row_from_backend_info() {
        use hugin_adapter_ibm::BackendStatus;

        let info = BackendInfo {
            name: "ibm_marrakesh".into(),
            num_qubits: 156,
            status: BackendStatus {
                operational: true,
                status_msg: Some("active".into()),
                pending_jobs: Some(7),
            },
            simulator: false,
            max_shots: Some(20_000),
        };
        let row = StatusRow::from(&info);
        assert_eq!(row.backend, "ibm_marrakesh");
        assert_eq!(row.qubits, 156);
        assert_eq!(row.pending_jobs, Some(7));
    }
}
