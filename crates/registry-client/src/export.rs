//! Local export of the in-memory record list.
//!
//! # Purpose
//! CSV text and a print-ready HTML document, both produced entirely from the
//! records the controller already holds. Neither touches the server.
use registry_model::Graduate;

const CSV_HEADER: &[&str] = &[
    "id",
    "student_id",
    "full_name",
    "program",
    "cohort",
    "status",
    "address",
    "gender",
    "phone",
    "email",
    "employer",
    "job_title",
    "created_at",
];

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| csv_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

fn record_columns(record: &Graduate) -> Vec<String> {
    vec![
        record.id.clone(),
        record.student_id.clone(),
        record.full_name.clone(),
        record.program.clone(),
        record.cohort.to_string(),
        record.status.clone(),
        record.address.clone().unwrap_or_default(),
        record.gender.clone().unwrap_or_default(),
        record.phone.clone().unwrap_or_default(),
        record.email.clone(),
        record.employer.clone().unwrap_or_default(),
        record.job_title.clone().unwrap_or_default(),
        record.created_at.to_rfc3339(),
    ]
}

/// Render the records as CSV: one header row plus one row per record.
pub fn to_csv(records: &[Graduate]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(csv_row(
        &CSV_HEADER
            .iter()
            .map(|column| column.to_string())
            .collect::<Vec<_>>(),
    ));
    for record in records {
        lines.push(csv_row(&record_columns(record)));
    }
    let mut csv = lines.join("\n");
    csv.push('\n');
    csv
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a standalone HTML document the browser can open in a new window
/// and hand to its print-to-PDF flow.
pub fn to_print_html(records: &[Graduate]) -> String {
    let mut rows = String::new();
    for record in records {
        rows.push_str("<tr>");
        for column in [
            record.student_id.as_str(),
            record.full_name.as_str(),
            record.program.as_str(),
            &record.cohort.to_string(),
            record.status.as_str(),
            record.email.as_str(),
        ] {
            rows.push_str("<td>");
            rows.push_str(&escape_html(column));
            rows.push_str("</td>");
        }
        rows.push_str("</tr>\n");
    }
    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Graduate records</title>\n\
         <style>table{{border-collapse:collapse;width:100%}}\
         th,td{{border:1px solid #999;padding:4px 8px;text-align:left}}</style>\n\
         </head>\n<body>\n<h1>Graduate records ({count})</h1>\n\
         <table>\n<thead><tr><th>Student ID</th><th>Name</th><th>Program</th>\
         <th>Cohort</th><th>Status</th><th>Email</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>\n</body>\n</html>\n",
        count = records.len(),
    )
}
